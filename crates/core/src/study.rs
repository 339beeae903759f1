// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Studies and their lifecycle status.
//!
//! The provider knows four statuses. "Expired" is layered on top locally: a
//! study is expired when it is `COMPLETED` and its `internal_name` carries
//! the [`EXPIRED_MARKER`] suffix.
//!
//! ```text
//! UNPUBLISHED ──publish──▶ ACTIVE ──stop──▶ AWAITING_REVIEW ──▶ COMPLETED
//!                                                                  │
//!                                           internal_name + "_EXPIRED" = expired
//! ```

use serde::{Deserialize, Serialize};

use crate::config::IdOption;
use crate::eligibility::WireRequirement;
use crate::project::ProjectId;

crate::define_id! {
    /// Provider-assigned identifier of a study.
    pub struct StudyId;
}

/// Suffix token appended to `internal_name` when a study is expired locally.
pub const EXPIRED_MARKER: &str = "EXPIRED";

/// Completion code type for a normal submission.
pub const CODE_TYPE_COMPLETED: &str = "COMPLETED";

/// Completion code action that queues a submission for manual review.
pub const ACTION_MANUALLY_REVIEW: &str = "MANUALLY_REVIEW";

/// Remote study status. There is deliberately no `Expired` variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StudyStatus {
    #[default]
    Unpublished,
    Active,
    AwaitingReview,
    Completed,
}

crate::simple_display! {
    StudyStatus {
        Unpublished => "UNPUBLISHED",
        Active => "ACTIVE",
        AwaitingReview => "AWAITING_REVIEW",
        Completed => "COMPLETED",
    }
}

/// Action the provider performs when a participant submits a completion code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCodeAction {
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionCode {
    pub code: String,
    pub code_type: String,
    #[serde(default)]
    pub actions: Vec<CompletionCodeAction>,
}

impl CompletionCode {
    /// A `COMPLETED` code whose submissions wait for manual review.
    pub fn manual_review(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            code_type: CODE_TYPE_COMPLETED.to_string(),
            actions: vec![CompletionCodeAction { action: ACTION_MANUALLY_REVIEW.to_string() }],
        }
    }
}

/// A study as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Study {
    pub id: StudyId,
    #[serde(rename = "project")]
    pub project_id: ProjectId,
    pub name: String,
    #[serde(default)]
    pub internal_name: String,
    #[serde(default)]
    pub status: StudyStatus,
    #[serde(default)]
    pub total_available_places: u32,
    #[serde(default)]
    pub completion_codes: Vec<CompletionCode>,
    #[serde(default)]
    pub eligibility_requirements: Vec<WireRequirement>,
}

impl Study {
    /// True only for a `COMPLETED` study whose internal name ends with
    /// [`EXPIRED_MARKER`]. Never inferred from status or time alone.
    pub fn is_expired(&self) -> bool {
        self.status == StudyStatus::Completed && self.internal_name.ends_with(EXPIRED_MARKER)
    }

    /// Internal name with the expiry marker appended.
    pub fn expired_internal_name(&self) -> String {
        format!("{}_{}", self.internal_name, EXPIRED_MARKER)
    }
}

/// Payload for creating a study under a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudy {
    #[serde(rename = "project")]
    pub project_id: ProjectId,
    pub name: String,
    pub internal_name: String,
    pub description: String,
    pub external_study_url: String,
    pub prolific_id_option: IdOption,
    pub completion_codes: Vec<CompletionCode>,
    /// Minutes.
    pub estimated_completion_time: u32,
    /// Cents.
    pub reward: u32,
    pub total_available_places: u32,
    pub eligibility_requirements: Vec<WireRequirement>,
}

/// Partial update of a study. Absent fields are left untouched remotely.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_available_places: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_codes: Option<Vec<CompletionCode>>,
}

impl StudyUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    crate::setters! {
        option {
            internal_name: String,
            total_available_places: u32,
            completion_codes: Vec<CompletionCode>,
        }
    }

    /// Apply the present fields onto a study, as the provider would.
    pub fn apply_to(&self, study: &mut Study) {
        if let Some(name) = &self.internal_name {
            study.internal_name = name.clone();
        }
        if let Some(places) = self.total_available_places {
            study.total_available_places = places;
        }
        if let Some(codes) = &self.completion_codes {
            study.completion_codes = codes.clone();
        }
    }
}

crate::builder! {
    pub struct StudyBuilder => Study {
        into {
            id: StudyId = "study-1",
            project_id: ProjectId = "project-1",
            name: String = "test",
            internal_name: String = "test",
        }
        set {
            status: StudyStatus = StudyStatus::Unpublished,
            total_available_places: u32 = 0,
            completion_codes: Vec<CompletionCode> = Vec::new(),
            eligibility_requirements: Vec<WireRequirement> = Vec::new(),
        }
    }
}

#[cfg(test)]
#[path = "study_tests.rs"]
mod tests;
