// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provider workspaces and their balance.
//!
//! A workspace is the top of the remote hierarchy (workspace ⊃ project ⊃
//! study). It is created once per account per logical workspace title and is
//! never deleted from here.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Provider-assigned identifier of a workspace.
    pub struct WorkspaceId;
}

/// A workspace as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub id: WorkspaceId,
    /// Unique within an account by convention only; lookups take the first match.
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Transient balance read for a workspace. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkspaceBalance {
    #[serde(default)]
    pub total_balance: f64,
    pub available_balance: f64,
}

crate::builder! {
    pub struct WorkspaceBuilder => Workspace {
        into {
            id: WorkspaceId = "workspace-1",
            title: String = "My Workspace",
        }
        option {
            description: String = None,
        }
    }
}

#[cfg(test)]
#[path = "workspace_tests.rs"]
mod tests;
