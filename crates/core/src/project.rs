// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider projects. A project belongs to exactly one workspace.

use serde::{Deserialize, Serialize};

use crate::workspace::WorkspaceId;

crate::define_id! {
    /// Provider-assigned identifier of a project.
    pub struct ProjectId;
}

/// A project as returned by the provider.
///
/// Soft-unique per `(workspace, title)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    #[serde(rename = "workspace")]
    pub workspace_id: WorkspaceId,
}

crate::builder! {
    pub struct ProjectBuilder => Project {
        into {
            id: ProjectId = "project-1",
            title: String = "Project",
            workspace_id: WorkspaceId = "workspace-1",
        }
    }
}
