// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory provider for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cw_core::{
    NewStudy, ParticipantGroup, ParticipantGroupId, Project, ProjectId, Study, StudyId,
    StudyStatus, StudyUpdate, User, Workspace, WorkspaceBalance, WorkspaceId,
};
use parking_lot::Mutex;

use crate::client::ProviderClient;
use crate::error::RemoteRequestError;

/// Provider operation, used to target injected failures and count calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderOp {
    Me,
    ListWorkspaces,
    RetrieveWorkspace,
    CreateWorkspace,
    WorkspaceBalance,
    ListProjects,
    RetrieveProject,
    CreateProject,
    ListParticipantGroups,
    RetrieveParticipantGroup,
    CreateParticipantGroup,
    RemoveParticipantGroup,
    CreateStudy,
    RetrieveStudy,
    UpdateStudy,
    PublishStudy,
    StopStudy,
}

/// Recorded provider call
#[derive(Debug, Clone, PartialEq)]
pub enum ProviderCall {
    Me,
    ListWorkspaces,
    RetrieveWorkspace { id: WorkspaceId },
    CreateWorkspace { title: String },
    WorkspaceBalance { id: WorkspaceId },
    ListProjects { workspace_id: WorkspaceId },
    RetrieveProject { id: ProjectId },
    CreateProject { workspace_id: WorkspaceId, title: String },
    ListParticipantGroups { project_id: ProjectId },
    RetrieveParticipantGroup { id: ParticipantGroupId },
    CreateParticipantGroup { project_id: ProjectId, name: String, description: Option<String> },
    RemoveParticipantGroup { id: ParticipantGroupId },
    CreateStudy { study: Box<NewStudy> },
    RetrieveStudy { id: StudyId },
    UpdateStudy { id: StudyId, update: StudyUpdate },
    PublishStudy { id: StudyId },
    StopStudy { id: StudyId },
}

impl ProviderCall {
    pub fn op(&self) -> ProviderOp {
        match self {
            ProviderCall::Me => ProviderOp::Me,
            ProviderCall::ListWorkspaces => ProviderOp::ListWorkspaces,
            ProviderCall::RetrieveWorkspace { .. } => ProviderOp::RetrieveWorkspace,
            ProviderCall::CreateWorkspace { .. } => ProviderOp::CreateWorkspace,
            ProviderCall::WorkspaceBalance { .. } => ProviderOp::WorkspaceBalance,
            ProviderCall::ListProjects { .. } => ProviderOp::ListProjects,
            ProviderCall::RetrieveProject { .. } => ProviderOp::RetrieveProject,
            ProviderCall::CreateProject { .. } => ProviderOp::CreateProject,
            ProviderCall::ListParticipantGroups { .. } => ProviderOp::ListParticipantGroups,
            ProviderCall::RetrieveParticipantGroup { .. } => ProviderOp::RetrieveParticipantGroup,
            ProviderCall::CreateParticipantGroup { .. } => ProviderOp::CreateParticipantGroup,
            ProviderCall::RemoveParticipantGroup { .. } => ProviderOp::RemoveParticipantGroup,
            ProviderCall::CreateStudy { .. } => ProviderOp::CreateStudy,
            ProviderCall::RetrieveStudy { .. } => ProviderOp::RetrieveStudy,
            ProviderCall::UpdateStudy { .. } => ProviderOp::UpdateStudy,
            ProviderCall::PublishStudy { .. } => ProviderOp::PublishStudy,
            ProviderCall::StopStudy { .. } => ProviderOp::StopStudy,
        }
    }
}

struct FakeProviderState {
    user: User,
    workspaces: Vec<Workspace>,
    balances: HashMap<WorkspaceId, WorkspaceBalance>,
    projects: Vec<Project>,
    groups: Vec<ParticipantGroup>,
    studies: Vec<Study>,
    stopped_status: StudyStatus,
    failures: HashMap<ProviderOp, RemoteRequestError>,
    calls: Vec<ProviderCall>,
}

/// Fake provider client for testing.
///
/// Collections are ordered and allow duplicate names, like the real provider.
/// Every call is recorded before any injected failure is returned.
#[derive(Clone)]
pub struct FakeProviderClient {
    inner: Arc<Mutex<FakeProviderState>>,
}

impl Default for FakeProviderClient {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeProviderState {
                user: User { id: "user-1".to_string(), email: None },
                workspaces: Vec::new(),
                balances: HashMap::new(),
                projects: Vec::new(),
                groups: Vec::new(),
                studies: Vec::new(),
                stopped_status: StudyStatus::Completed,
                failures: HashMap::new(),
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeProviderClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_workspace(self, workspace: Workspace) -> Self {
        self.inner.lock().workspaces.push(workspace);
        self
    }

    pub fn with_balance(self, id: impl Into<WorkspaceId>, available_balance: f64) -> Self {
        self.inner
            .lock()
            .balances
            .insert(id.into(), WorkspaceBalance { total_balance: available_balance, available_balance });
        self
    }

    pub fn with_project(self, project: Project) -> Self {
        self.inner.lock().projects.push(project);
        self
    }

    pub fn with_participant_group(self, group: ParticipantGroup) -> Self {
        self.inner.lock().groups.push(group);
        self
    }

    pub fn with_study(self, study: Study) -> Self {
        self.inner.lock().studies.push(study);
        self
    }

    /// Status a study lands in when stopped (default `COMPLETED`).
    pub fn with_stopped_status(self, status: StudyStatus) -> Self {
        self.inner.lock().stopped_status = status;
        self
    }

    /// Make every subsequent call of `op` fail with `message`.
    pub fn fail(&self, op: ProviderOp, message: impl Into<String>) {
        self.fail_with(op, RemoteRequestError::new(message));
    }

    pub fn fail_with(&self, op: ProviderOp, err: RemoteRequestError) {
        self.inner.lock().failures.insert(op, err);
    }

    pub fn clear_failures(&self) {
        self.inner.lock().failures.clear();
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProviderCall> {
        self.inner.lock().calls.clone()
    }

    pub fn ops(&self) -> Vec<ProviderOp> {
        self.inner.lock().calls.iter().map(ProviderCall::op).collect()
    }

    pub fn count(&self, op: ProviderOp) -> usize {
        self.inner.lock().calls.iter().filter(|c| c.op() == op).count()
    }

    pub fn workspaces(&self) -> Vec<Workspace> {
        self.inner.lock().workspaces.clone()
    }

    pub fn projects(&self) -> Vec<Project> {
        self.inner.lock().projects.clone()
    }

    pub fn participant_groups(&self) -> Vec<ParticipantGroup> {
        self.inner.lock().groups.clone()
    }

    pub fn study(&self, id: &str) -> Option<Study> {
        self.inner.lock().studies.iter().find(|s| s.id == id).cloned()
    }

    /// Overwrite a study's capacity behind the caller's back.
    pub fn set_total_available_places(&self, id: &str, places: u32) {
        if let Some(study) = self.inner.lock().studies.iter_mut().find(|s| s.id == id) {
            study.total_available_places = places;
        }
    }

    /// Record the call, then return the injected failure for its op, if any.
    fn record(&self, call: ProviderCall) -> Result<(), RemoteRequestError> {
        let mut state = self.inner.lock();
        let op = call.op();
        state.calls.push(call);
        match state.failures.get(&op) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn study_mut<R>(
        &self,
        id: &StudyId,
        f: impl FnOnce(&mut Study) -> Result<R, RemoteRequestError>,
    ) -> Result<R, RemoteRequestError> {
        let mut state = self.inner.lock();
        let study = state
            .studies
            .iter_mut()
            .find(|s| &s.id == id)
            .ok_or_else(|| not_found("study", id))?;
        f(study)
    }
}

fn next_id() -> String {
    let mut id = uuid::Uuid::new_v4().simple().to_string();
    id.truncate(24);
    id
}

fn not_found(kind: &str, id: &str) -> RemoteRequestError {
    RemoteRequestError::not_found(format!("{} {} not found", kind, id))
}

#[async_trait]
impl ProviderClient for FakeProviderClient {
    async fn me(&self) -> Result<User, RemoteRequestError> {
        self.record(ProviderCall::Me)?;
        Ok(self.inner.lock().user.clone())
    }

    async fn list_workspaces(&self) -> Result<Vec<Workspace>, RemoteRequestError> {
        self.record(ProviderCall::ListWorkspaces)?;
        Ok(self.workspaces())
    }

    async fn retrieve_workspace(&self, id: &WorkspaceId) -> Result<Workspace, RemoteRequestError> {
        self.record(ProviderCall::RetrieveWorkspace { id: id.clone() })?;
        let state = self.inner.lock();
        state.workspaces.iter().find(|w| &w.id == id).cloned().ok_or_else(|| not_found("workspace", id))
    }

    async fn create_workspace(&self, title: &str) -> Result<Workspace, RemoteRequestError> {
        self.record(ProviderCall::CreateWorkspace { title: title.to_string() })?;
        let workspace = Workspace { id: next_id().into(), title: title.to_string(), description: None };
        self.inner.lock().workspaces.push(workspace.clone());
        Ok(workspace)
    }

    async fn workspace_balance(
        &self,
        id: &WorkspaceId,
    ) -> Result<WorkspaceBalance, RemoteRequestError> {
        self.record(ProviderCall::WorkspaceBalance { id: id.clone() })?;
        let state = self.inner.lock();
        if !state.workspaces.iter().any(|w| &w.id == id) {
            return Err(not_found("workspace", id));
        }
        Ok(state.balances.get(id).copied().unwrap_or_default())
    }

    async fn list_projects(
        &self,
        workspace_id: &WorkspaceId,
    ) -> Result<Vec<Project>, RemoteRequestError> {
        self.record(ProviderCall::ListProjects { workspace_id: workspace_id.clone() })?;
        let state = self.inner.lock();
        Ok(state.projects.iter().filter(|p| &p.workspace_id == workspace_id).cloned().collect())
    }

    async fn retrieve_project(&self, id: &ProjectId) -> Result<Project, RemoteRequestError> {
        self.record(ProviderCall::RetrieveProject { id: id.clone() })?;
        let state = self.inner.lock();
        state.projects.iter().find(|p| &p.id == id).cloned().ok_or_else(|| not_found("project", id))
    }

    async fn create_project(
        &self,
        workspace_id: &WorkspaceId,
        title: &str,
    ) -> Result<Project, RemoteRequestError> {
        self.record(ProviderCall::CreateProject {
            workspace_id: workspace_id.clone(),
            title: title.to_string(),
        })?;
        let project =
            Project { id: next_id().into(), title: title.to_string(), workspace_id: workspace_id.clone() };
        self.inner.lock().projects.push(project.clone());
        Ok(project)
    }

    async fn list_participant_groups(
        &self,
        project_id: &ProjectId,
    ) -> Result<Vec<ParticipantGroup>, RemoteRequestError> {
        self.record(ProviderCall::ListParticipantGroups { project_id: project_id.clone() })?;
        let state = self.inner.lock();
        Ok(state.groups.iter().filter(|g| &g.project_id == project_id).cloned().collect())
    }

    async fn retrieve_participant_group(
        &self,
        id: &ParticipantGroupId,
    ) -> Result<ParticipantGroup, RemoteRequestError> {
        self.record(ProviderCall::RetrieveParticipantGroup { id: id.clone() })?;
        let state = self.inner.lock();
        state.groups.iter().find(|g| &g.id == id).cloned().ok_or_else(|| not_found("participant group", id))
    }

    async fn create_participant_group(
        &self,
        project_id: &ProjectId,
        name: &str,
        description: Option<&str>,
    ) -> Result<ParticipantGroup, RemoteRequestError> {
        self.record(ProviderCall::CreateParticipantGroup {
            project_id: project_id.clone(),
            name: name.to_string(),
            description: description.map(str::to_string),
        })?;
        let group = ParticipantGroup {
            id: next_id().into(),
            project_id: project_id.clone(),
            name: name.to_string(),
            description: description.map(str::to_string),
        };
        self.inner.lock().groups.push(group.clone());
        Ok(group)
    }

    async fn remove_participant_group(
        &self,
        id: &ParticipantGroupId,
    ) -> Result<(), RemoteRequestError> {
        self.record(ProviderCall::RemoveParticipantGroup { id: id.clone() })?;
        let mut state = self.inner.lock();
        let before = state.groups.len();
        state.groups.retain(|g| &g.id != id);
        if state.groups.len() == before {
            return Err(not_found("participant group", id));
        }
        Ok(())
    }

    async fn create_study(&self, study: &NewStudy) -> Result<Study, RemoteRequestError> {
        self.record(ProviderCall::CreateStudy { study: Box::new(study.clone()) })?;
        let created = Study {
            id: next_id().into(),
            project_id: study.project_id.clone(),
            name: study.name.clone(),
            internal_name: study.internal_name.clone(),
            status: StudyStatus::Unpublished,
            total_available_places: study.total_available_places,
            completion_codes: study.completion_codes.clone(),
            eligibility_requirements: study.eligibility_requirements.clone(),
        };
        self.inner.lock().studies.push(created.clone());
        Ok(created)
    }

    async fn retrieve_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError> {
        self.record(ProviderCall::RetrieveStudy { id: id.clone() })?;
        self.study_mut(id, |study| Ok(study.clone()))
    }

    async fn update_study(
        &self,
        id: &StudyId,
        update: &StudyUpdate,
    ) -> Result<Study, RemoteRequestError> {
        self.record(ProviderCall::UpdateStudy { id: id.clone(), update: update.clone() })?;
        self.study_mut(id, |study| {
            update.apply_to(study);
            Ok(study.clone())
        })
    }

    async fn publish_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError> {
        self.record(ProviderCall::PublishStudy { id: id.clone() })?;
        self.study_mut(id, |study| match study.status {
            StudyStatus::Unpublished => {
                study.status = StudyStatus::Active;
                Ok(study.clone())
            }
            status => Err(RemoteRequestError::with_status(
                400,
                format!("study {} cannot be published from {}", study.id, status),
            )),
        })
    }

    async fn stop_study(&self, id: &StudyId) -> Result<Study, RemoteRequestError> {
        self.record(ProviderCall::StopStudy { id: id.clone() })?;
        let stopped_status = self.inner.lock().stopped_status;
        self.study_mut(id, |study| {
            if study.status != StudyStatus::Completed {
                study.status = stopped_status;
            }
            Ok(study.clone())
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
