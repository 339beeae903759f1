// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Find-or-create for workspaces, projects and qualifications.
//!
//! A lookup miss is followed directly by a create, with no re-check in
//! between. Two callers racing on the same name can therefore both create a
//! resource; later lookups take the first match. The provider exposes no
//! create-if-absent primitive, so this race is accepted.

use cw_adapters::{ProviderClient, RemoteRequestError};
use cw_core::{ParticipantGroup, ParticipantGroupId, Project, ProjectId, Workspace, WorkspaceId};

use crate::locator::{find_project, find_qualification, find_workspace};

pub async fn find_or_create_workspace(
    client: &dyn ProviderClient,
    title: &str,
) -> Result<Workspace, RemoteRequestError> {
    if let Some(workspace) = find_workspace(client, None, Some(title)).await? {
        tracing::debug!(workspace_id = %workspace.id, title, "found existing workspace");
        return Ok(workspace);
    }

    let workspace = client.create_workspace(title).await?;
    tracing::info!(workspace_id = %workspace.id, title, "created workspace");
    Ok(workspace)
}

pub async fn find_or_create_project(
    client: &dyn ProviderClient,
    workspace_id: &WorkspaceId,
    title: &str,
) -> Result<Project, RemoteRequestError> {
    if let Some(project) = find_project(client, workspace_id, None, Some(title)).await? {
        tracing::debug!(project_id = %project.id, %workspace_id, title, "found existing project");
        return Ok(project);
    }

    let project = client.create_project(workspace_id, title).await?;
    tracing::info!(project_id = %project.id, %workspace_id, title, "created project");
    Ok(project)
}

/// Find a qualification by name, creating it when absent.
///
/// `description` is only used when creating; an existing group is returned
/// as-is even if its description differs.
pub async fn find_or_create_qualification(
    client: &dyn ProviderClient,
    project_id: &ProjectId,
    name: &str,
    description: Option<&str>,
) -> Result<ParticipantGroup, RemoteRequestError> {
    if let Some(group) = find_qualification(client, project_id, None, Some(name)).await? {
        tracing::debug!(group_id = %group.id, %project_id, name, "found existing qualification");
        return Ok(group);
    }

    create_qualification(client, project_id, name, description).await
}

/// Create a qualification unconditionally.
pub async fn create_qualification(
    client: &dyn ProviderClient,
    project_id: &ProjectId,
    name: &str,
    description: Option<&str>,
) -> Result<ParticipantGroup, RemoteRequestError> {
    let group = client.create_participant_group(project_id, name, description).await?;
    tracing::info!(group_id = %group.id, %project_id, name, "created qualification");
    Ok(group)
}

/// Remove a qualification. Returns `true` once the provider confirms.
pub async fn delete_qualification(
    client: &dyn ProviderClient,
    id: &ParticipantGroupId,
) -> Result<bool, RemoteRequestError> {
    client.remove_participant_group(id).await?;
    tracing::info!(group_id = %id, "deleted qualification");
    Ok(true)
}

#[cfg(test)]
#[path = "reconcile_tests.rs"]
mod tests;
