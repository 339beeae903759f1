// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task-run config loading specs
//!
//! Configs written to disk drive the study payload sent to the provider.

use crate::prelude::*;
use cw_core::ConfigError;
use serde_json::json;

#[test]
fn loads_all_sections() {
    let config = config();

    assert_eq!(config.architect.architect_type, "local");
    assert_eq!(config.task.name.as_deref(), Some("my-task"));
    assert_eq!(config.task.reward_cents(), 30);
    assert_eq!(config.provider.workspace_name, "My Workspace");
    assert_eq!(config.provider.total_available_places, 3);
    assert_eq!(config.provider.eligibility_requirements.len(), 3);
}

#[test]
fn missing_file_reports_path() {
    let file = ConfigFile::new("");
    let missing = file.path().with_file_name("absent.toml");

    let err = TaskRunConfig::load(&missing).unwrap_err();

    assert!(matches!(err, ConfigError::Io { .. }));
    assert!(err.to_string().contains("absent.toml"));
}

#[test]
fn malformed_file_is_a_parse_error() {
    let file = ConfigFile::new("[architect]\narchitect_type = 3\n");
    let err = TaskRunConfig::load(&file.path()).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[tokio::test]
async fn requirements_reach_the_wire_in_document_order() {
    init_tracing();
    let client = FakeProviderClient::new();

    cw_engine::provision_study(&client, &resolver(), &config()).await.unwrap();

    let wire = serde_json::to_value(created_study(&client).eligibility_requirements).unwrap();
    similar_asserts::assert_eq!(
        wire,
        json!([
            {
                "_cls": "web.eligibility.models.AgeRangeEligibilityRequirement",
                "attributes": [{"name": "min_age", "value": 18}, {"name": "max_age", "value": 100}],
                "query": {"id": "54ac6ea9fdf99b2204feb893"},
            },
            {
                "_cls": "web.eligibility.models.ApprovalRateEligibilityRequirement",
                "attributes": [
                    {"name": "minimum_approval_rate", "value": 95},
                    {"name": "maximum_approval_rate", "value": 100},
                ],
            },
            {
                "_cls": "web.eligibility.models.ParticipantGroupEligibilityRequirement",
                "attributes": [{"id": "64b7f1c2a3d4e5f6a7b8c9d0", "value": true}],
            },
        ])
    );
}

#[tokio::test]
async fn unknown_requirement_in_file_fails_before_creating_study() {
    init_tracing();
    let toml = TASK_RUN_TOML.replace("ApprovalRateEligibilityRequirement", "KarmaRequirement");
    let client = FakeProviderClient::new();

    let err = cw_engine::provision_study(&client, &resolver(), &ConfigFile::new(&toml).load())
        .await
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "invalid eligibility requirements: unknown eligibility requirement #1: KarmaRequirement"
    );
    assert_eq!(client.count(ProviderOp::CreateStudy), 0);
}
