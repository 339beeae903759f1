// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use serde_json::Value;

use crate::config::{ArchitectConfig, IdOption, ProviderConfig, TaskConfig, TaskRunConfig};
use crate::eligibility::{Descriptor, EligibilityRequirement};

// ── Proptest strategies ─────────────────────────────────────────────────

pub mod strategies {
    use crate::eligibility::EligibilityRequirement;
    use proptest::prelude::*;

    pub fn arb_requirement() -> impl Strategy<Value = EligibilityRequirement> {
        prop_oneof![
            (0u32..120, 0u32..120)
                .prop_map(|(min_age, max_age)| EligibilityRequirement::AgeRange { min_age, max_age }),
            (0u32..10_000, 0u32..10_000).prop_map(|(minimum_approvals, maximum_approvals)| {
                EligibilityRequirement::ApprovalNumbers { minimum_approvals, maximum_approvals }
            }),
            (0u32..=100, 0u32..=100).prop_map(|(minimum_approval_rate, maximum_approval_rate)| {
                EligibilityRequirement::ApprovalRate { minimum_approval_rate, maximum_approval_rate }
            }),
            proptest::collection::vec("[0-9a-f]{24}", 0..4)
                .prop_map(|black_list| EligibilityRequirement::CustomBlacklist { black_list }),
            proptest::collection::vec("[0-9a-f]{24}", 0..4)
                .prop_map(|white_list| EligibilityRequirement::CustomWhitelist { white_list }),
            "20[0-9]{2}-0[1-9]-1[0-9]T00:00:00Z"
                .prop_map(|joined_before| EligibilityRequirement::JoinedBefore { joined_before }),
            "[0-9a-f]{24}".prop_map(|id| EligibilityRequirement::ParticipantGroup { id: id.into() }),
        ]
    }
}

// ── Fixtures ────────────────────────────────────────────────────────────

/// Unwrap a JSON object into a descriptor; anything else yields an empty one.
pub fn descriptor(value: Value) -> Descriptor {
    match value {
        Value::Object(map) => map,
        _ => Descriptor::new(),
    }
}

pub const EXTERNAL_STUDY_URL: &str = "https://example.com?\
participant_id={{%PROLIFIC_PID%}}&\
study_id={{%STUDY_ID%}}&\
submission_id={{%SESSION_ID%}}";

/// Task-run config on a local architect with one age-range requirement.
pub fn task_run_config() -> TaskRunConfig {
    TaskRunConfig {
        architect: ArchitectConfig { architect_type: "local".to_string() },
        task: TaskConfig {
            name: None,
            title: "title".to_string(),
            description: "This is a description".to_string(),
            reward: 0.3,
            tags: vec!["1".to_string(), "2".to_string(), "3".to_string()],
            lifetime_seconds: 1,
        },
        provider: ProviderConfig {
            external_study_url: EXTERNAL_STUDY_URL.to_string(),
            id_option: IdOption::UrlParameters,
            workspace_name: "My Workspace".to_string(),
            project_name: "Project".to_string(),
            allow_list_group_name: Some("Allow list".to_string()),
            block_list_group_name: Some("Block list".to_string()),
            estimated_completion_minutes: 60,
            total_available_places: 1,
            eligibility_requirements: vec![
                EligibilityRequirement::AgeRange { min_age: 18, max_age: 100 }.to_descriptor()
            ],
        },
    }
}

/// Same as [`task_run_config`] but on the publicly routable architect.
pub fn ec2_task_run_config() -> TaskRunConfig {
    let mut config = task_run_config();
    config.architect.architect_type = crate::config::EC2_ARCHITECT.to_string();
    config
}
