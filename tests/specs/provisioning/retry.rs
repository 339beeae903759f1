// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Provisioning retry specs
//!
//! A failed run leaves its resources behind; the next run picks them up.

use crate::prelude::*;
use cw_engine::provision_study;

#[tokio::test]
async fn project_failure_leaves_workspace_for_retry() {
    init_tracing();
    let client = FakeProviderClient::new();
    client.fail(ProviderOp::CreateProject, "Service Unavailable");

    let err = provision_study(&client, &resolver(), &config()).await.unwrap_err();
    assert_eq!(err.to_string(), "Service Unavailable");
    assert_eq!(client.workspaces().len(), 1);
    assert!(client.projects().is_empty());

    client.clear_failures();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();

    assert_eq!(client.workspaces(), vec![provisioned.workspace]);
    assert_eq!(client.count(ProviderOp::CreateWorkspace), 1);
}

#[tokio::test]
async fn completion_code_failure_leaves_study_behind() {
    init_tracing();
    let client = FakeProviderClient::new();
    client.fail(ProviderOp::UpdateStudy, "Error");

    let err = provision_study(&client, &resolver(), &config()).await.unwrap_err();

    assert_eq!(err.to_string(), "Error");
    assert_eq!(client.count(ProviderOp::CreateStudy), 1);
}
