// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Participant groups ("qualifications"): named allow- or block-lists of
//! participants, scoped to a project.

use serde::{Deserialize, Serialize};

use crate::project::ProjectId;

crate::define_id! {
    /// Provider-assigned identifier of a participant group.
    pub struct ParticipantGroupId;
}

/// A participant group as returned by the provider.
///
/// Soft-unique per `(project, name)`. Removed by the orchestration layer when
/// the task run that owns it ends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticipantGroup {
    pub id: ParticipantGroupId,
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

crate::builder! {
    pub struct ParticipantGroupBuilder => ParticipantGroup {
        into {
            id: ParticipantGroupId = "group-1",
            project_id: ProjectId = "project-1",
            name: String = "Allow list",
        }
        option {
            description: String = None,
        }
    }
}
