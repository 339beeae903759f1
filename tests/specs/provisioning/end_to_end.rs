// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end provisioning specs
//!
//! A task run provisions workspace, project and study in one call.

use crate::prelude::*;
use cw_engine::{provision_study, ProvisionError};
use serde_json::json;

#[tokio::test]
async fn provisions_study_on_empty_account() {
    init_tracing();
    let client = FakeProviderClient::new();

    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();

    assert_eq!(provisioned.workspace.title, "My Workspace");
    assert_eq!(provisioned.project.workspace_id, provisioned.workspace.id);
    assert_eq!(provisioned.study.project_id, provisioned.project.id);
    assert_eq!(provisioned.study.status, StudyStatus::Unpublished);
    assert_eq!(provisioned.study.total_available_places, 3);
}

#[tokio::test]
async fn study_payload_matches_config() {
    init_tracing();
    let client = FakeProviderClient::new();

    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();

    let mut payload = serde_json::to_value(created_study(&client)).unwrap();
    let internal_name = payload["internal_name"].take();
    let placeholder = payload["completion_codes"][0]["code"].take();
    payload["eligibility_requirements"].take();

    assert!(internal_name.as_str().unwrap().starts_with("my-task_"));
    assert_eq!(placeholder.as_str().unwrap().len(), 5);
    similar_asserts::assert_eq!(
        payload,
        json!({
            "project": provisioned.project.id.as_str(),
            "name": "title",
            "internal_name": null,
            "description": "This is a description",
            "external_study_url": "https://example.com?participant_id={{%PROLIFIC_PID%}}&study_id={{%STUDY_ID%}}&submission_id={{%SESSION_ID%}}",
            "prolific_id_option": "url_parameters",
            "completion_codes": [
                {"code": null, "code_type": "COMPLETED", "actions": [{"action": "MANUALLY_REVIEW"}]},
            ],
            "estimated_completion_time": 60,
            "reward": 30,
            "total_available_places": 3,
            "eligibility_requirements": null,
        })
    );
}

#[tokio::test]
async fn ec2_architect_points_study_at_public_domain() {
    init_tracing();
    let client = FakeProviderClient::new();
    let toml = TASK_RUN_TOML.replace(r#"architect_type = "local""#, r#"architect_type = "ec2""#);

    provision_study(&client, &resolver(), &ConfigFile::new(&toml).load()).await.unwrap();

    assert_eq!(
        created_study(&client).external_study_url,
        "http://test.com?participant_id={{%PROLIFIC_PID%}}&study_id={{%STUDY_ID%}}&submission_id={{%SESSION_ID%}}"
    );
}

#[tokio::test]
async fn second_run_reuses_workspace_and_project() {
    init_tracing();
    let client = FakeProviderClient::new();

    let first = provision_study(&client, &resolver(), &config()).await.unwrap();
    let second = provision_study(&client, &resolver(), &config()).await.unwrap();

    assert_eq!(first.workspace, second.workspace);
    assert_eq!(first.project, second.project);
    assert_ne!(first.study.id, second.study.id);
    assert_eq!(client.count(ProviderOp::CreateWorkspace), 1);
    assert_eq!(client.count(ProviderOp::CreateProject), 1);
}

#[tokio::test]
async fn rejected_credentials_abort_provisioning() {
    init_tracing();
    let client = FakeProviderClient::new();
    client.fail(ProviderOp::Me, "Invalid token");

    let err = provision_study(&client, &resolver(), &config()).await.unwrap_err();

    assert_eq!(err, ProvisionError::InvalidCredentials);
    assert!(client.workspaces().is_empty());
}
