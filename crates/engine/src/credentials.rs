// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Liveness probe for provider credentials.

use cw_adapters::ProviderClient;

/// Returns `true` if the client can identify itself to the provider.
///
/// The only place a provider error is turned into a value instead of being
/// propagated.
pub async fn check_credentials(client: &dyn ProviderClient) -> bool {
    match client.me().await {
        Ok(user) => {
            tracing::debug!(user_id = %user.id, "provider credentials accepted");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, "provider credentials check failed");
            false
        }
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
