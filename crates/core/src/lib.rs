// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-core: resource records, eligibility translation and task-run config
//! for the crowdwork provider integration.

pub mod macros;

pub mod config;
pub mod eligibility;
pub mod id;
pub mod participant_group;
pub mod project;
pub mod study;
pub mod user;
pub mod workspace;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use config::{ArchitectConfig, ConfigError, IdOption, ProviderConfig, TaskConfig, TaskRunConfig};
pub use eligibility::{
    translate, Descriptor, EligibilityRequirement, RequirementKind, TranslationError,
    WireAttribute, WireQuery, WireRequirement,
};
pub use participant_group::{ParticipantGroup, ParticipantGroupId};
pub use project::{Project, ProjectId};
pub use study::{
    CompletionCode, CompletionCodeAction, NewStudy, Study, StudyId, StudyStatus, StudyUpdate,
    EXPIRED_MARKER,
};
pub use user::User;
pub use workspace::{Workspace, WorkspaceBalance, WorkspaceId};
