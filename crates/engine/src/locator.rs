// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Find-by-key over provider collections.
//!
//! Two strategies, tried in this order:
//!
//! ```text
//! id given   ──▶ retrieve(id)      404 ──▶ None, other errors propagate
//! name given ──▶ list(parent) ──▶ first exact name/title match, else None
//! ```
//!
//! The name is ignored whenever an id is supplied. Lookups never mutate
//! remote state.

use std::fmt;

use async_trait::async_trait;
use cw_adapters::{ProviderClient, RemoteRequestError};
use cw_core::{
    ParticipantGroup, ParticipantGroupId, Project, ProjectId, Workspace, WorkspaceId,
};

/// A provider resource that can be looked up by id or by name.
#[async_trait]
pub trait Locatable: Sized + Send {
    type Id: fmt::Display + Sync;
    /// Scope the name lookup lists within.
    type Parent: fmt::Debug + Sync;

    const KIND: &'static str;

    /// The soft-unique lookup key (title or name).
    fn lookup_name(&self) -> &str;

    async fn retrieve(client: &dyn ProviderClient, id: &Self::Id) -> Result<Self, RemoteRequestError>;

    async fn list(
        client: &dyn ProviderClient,
        parent: &Self::Parent,
    ) -> Result<Vec<Self>, RemoteRequestError>;
}

#[async_trait]
impl Locatable for Workspace {
    type Id = WorkspaceId;
    type Parent = ();

    const KIND: &'static str = "workspace";

    fn lookup_name(&self) -> &str {
        &self.title
    }

    async fn retrieve(client: &dyn ProviderClient, id: &WorkspaceId) -> Result<Self, RemoteRequestError> {
        client.retrieve_workspace(id).await
    }

    async fn list(client: &dyn ProviderClient, _parent: &()) -> Result<Vec<Self>, RemoteRequestError> {
        client.list_workspaces().await
    }
}

#[async_trait]
impl Locatable for Project {
    type Id = ProjectId;
    type Parent = WorkspaceId;

    const KIND: &'static str = "project";

    fn lookup_name(&self) -> &str {
        &self.title
    }

    async fn retrieve(client: &dyn ProviderClient, id: &ProjectId) -> Result<Self, RemoteRequestError> {
        client.retrieve_project(id).await
    }

    async fn list(
        client: &dyn ProviderClient,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Self>, RemoteRequestError> {
        client.list_projects(workspace_id).await
    }
}

#[async_trait]
impl Locatable for ParticipantGroup {
    type Id = ParticipantGroupId;
    type Parent = ProjectId;

    const KIND: &'static str = "participant group";

    fn lookup_name(&self) -> &str {
        &self.name
    }

    async fn retrieve(
        client: &dyn ProviderClient,
        id: &ParticipantGroupId,
    ) -> Result<Self, RemoteRequestError> {
        client.retrieve_participant_group(id).await
    }

    async fn list(
        client: &dyn ProviderClient,
        project_id: &ProjectId,
    ) -> Result<Vec<Self>, RemoteRequestError> {
        client.list_participant_groups(project_id).await
    }
}

/// Locate a resource by id, or failing that by name within `parent`.
///
/// Returns `Ok(None)` when nothing matches, including when neither key is
/// given. Duplicated names resolve to the first match in provider order.
pub async fn locate<R: Locatable>(
    client: &dyn ProviderClient,
    parent: &R::Parent,
    id: Option<&R::Id>,
    name: Option<&str>,
) -> Result<Option<R>, RemoteRequestError> {
    if let Some(id) = id {
        return match R::retrieve(client, id).await {
            Ok(resource) => Ok(Some(resource)),
            Err(e) if e.is_not_found() => {
                tracing::debug!(kind = R::KIND, %id, "no resource with id");
                Ok(None)
            }
            Err(e) => Err(e),
        };
    }

    let Some(name) = name else {
        return Ok(None);
    };

    let found = R::list(client, parent).await?.into_iter().find(|r| r.lookup_name() == name);
    if found.is_none() {
        tracing::debug!(kind = R::KIND, name, ?parent, "no resource with name");
    }
    Ok(found)
}

pub async fn find_workspace(
    client: &dyn ProviderClient,
    id: Option<&WorkspaceId>,
    title: Option<&str>,
) -> Result<Option<Workspace>, RemoteRequestError> {
    locate(client, &(), id, title).await
}

pub async fn find_project(
    client: &dyn ProviderClient,
    workspace_id: &WorkspaceId,
    id: Option<&ProjectId>,
    title: Option<&str>,
) -> Result<Option<Project>, RemoteRequestError> {
    locate(client, workspace_id, id, title).await
}

/// Qualifications are participant groups; `name` is scoped to the project.
pub async fn find_qualification(
    client: &dyn ProviderClient,
    project_id: &ProjectId,
    id: Option<&ParticipantGroupId>,
    name: Option<&str>,
) -> Result<Option<ParticipantGroup>, RemoteRequestError> {
    locate(client, project_id, id, name).await
}

#[cfg(test)]
#[path = "locator_tests.rs"]
mod tests;
