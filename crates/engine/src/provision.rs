// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end provisioning of the study backing one task run.
//!
//! ```text
//! check_credentials ──▶ workspace ──▶ project ──▶ create_study
//! ```
//!
//! Every step is find-or-create except the study itself, so a run that fails
//! part-way can simply be retried: resources left behind are found again.
//! Nothing is rolled back.

use cw_adapters::{ExternalUrlResolver, ProviderClient};
use cw_core::{Project, Study, TaskRunConfig, Workspace};

use crate::credentials::check_credentials;
use crate::error::ProvisionError;
use crate::reconcile::{find_or_create_project, find_or_create_workspace};
use crate::study::create_study;

/// Resources backing a provisioned study.
#[derive(Debug, Clone, PartialEq)]
pub struct ProvisionedStudy {
    pub workspace: Workspace,
    pub project: Project,
    pub study: Study,
}

pub async fn provision_study(
    client: &dyn ProviderClient,
    resolver: &dyn ExternalUrlResolver,
    config: &TaskRunConfig,
) -> Result<ProvisionedStudy, ProvisionError> {
    if !check_credentials(client).await {
        return Err(ProvisionError::InvalidCredentials);
    }

    let provider = &config.provider;
    let workspace = find_or_create_workspace(client, &provider.workspace_name).await?;
    let project = find_or_create_project(client, &workspace.id, &provider.project_name).await?;
    let study = create_study(client, resolver, config, &project.id).await?;

    tracing::info!(
        workspace_id = %workspace.id,
        project_id = %project.id,
        study_id = %study.id,
        "provisioned study"
    );
    Ok(ProvisionedStudy { workspace, project, study })
}

#[cfg(test)]
#[path = "provision_tests.rs"]
mod tests;
