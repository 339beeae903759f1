// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authenticated access to the crowdsourcing provider.
//!
//! The transport and credentials live behind this trait; the engine only
//! sees typed resources and [`RemoteRequestError`]. Resources nest as:
//!
//! ```text
//! workspace
//!   └── project
//!         ├── participant group (allow / block list)
//!         └── study
//! ```

use async_trait::async_trait;
use cw_core::{
    NewStudy, ParticipantGroup, ParticipantGroupId, Project, ProjectId, Study, StudyId,
    StudyUpdate, User, Workspace, WorkspaceBalance, WorkspaceId,
};

use crate::error::RemoteRequestError;

/// An authenticated provider client.
///
/// Every call is a single request/response. Implementations enforce their
/// own timeouts; callers never retry.
#[async_trait]
pub trait ProviderClient: Send + Sync {
    /// Identify the account the client is authenticated as.
    async fn me(&self) -> Result<User, RemoteRequestError>;

    // -- workspaces --

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, RemoteRequestError>;

    /// Fails with a 404 [`RemoteRequestError`] when the workspace does not exist.
    async fn retrieve_workspace(&self, id: &WorkspaceId) -> Result<Workspace, RemoteRequestError>;

    async fn create_workspace(&self, title: &str) -> Result<Workspace, RemoteRequestError>;

    async fn workspace_balance(
        &self,
        id: &WorkspaceId,
    ) -> Result<WorkspaceBalance, RemoteRequestError>;

    // -- projects --

    async fn list_projects(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, RemoteRequestError>;

    async fn retrieve_project(&self, id: &ProjectId) -> Result<Project, RemoteRequestError>;

    async fn create_project(
        &self,
        workspace_id: &WorkspaceId,
        title: &str,
    ) -> Result<Project, RemoteRequestError>;

    // -- participant groups --

    async fn list_participant_groups(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ParticipantGroup>, RemoteRequestError>;

    async fn retrieve_participant_group(
        &self,
        id: &ParticipantGroupId,
    ) -> Result<ParticipantGroup, RemoteRequestError>;

    async fn create_participant_group(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ParticipantGroup, RemoteRequestError>;

    async fn remove_participant_group(
        &self,
        id: &ParticipantGroupId,
    ) -> Result<(), RemoteRequestError>;

    // -- studies --

    async fn create_study(&self, study: &NewStudy) -> Result<Study, RemoteRequestError>;

    async fn retrieve_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError>;

    async fn update_study(
        &self,
        id: &StudyId,
        update: &StudyUpdate,
    ) -> Result<Study, RemoteRequestError>;

    async fn publish_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError>;

    async fn stop_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError>;
}
