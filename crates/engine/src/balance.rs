// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cw_adapters::{ProviderClient, RemoteRequestError};

use crate::locator::find_workspace;

/// Available balance of the named workspace.
///
/// `Ok(None)` without any provider call when no name is given, and `Ok(None)`
/// when no workspace has that title. There is no default workspace.
pub async fn check_balance(
    client: &dyn ProviderClient,
    workspace_name: Option<&str>,
) -> Result<Option<f64>, RemoteRequestError> {
    let Some(name) = workspace_name else {
        return Ok(None);
    };

    let Some(workspace) = find_workspace(client, None, Some(name)).await? else {
        tracing::debug!(name, "no workspace to check balance of");
        return Ok(None);
    };

    let balance = client.workspace_balance(&workspace.id).await?;
    tracing::debug!(
        workspace_id = %workspace.id,
        available_balance = balance.available_balance,
        "checked workspace balance"
    );
    Ok(Some(balance.available_balance))
}

#[cfg(test)]
#[path = "balance_tests.rs"]
mod tests;
