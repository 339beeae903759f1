// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use cw_adapters::{FakeProviderClient, ProviderOp};
use cw_core::workspace::WorkspaceBuilder;

fn client() -> FakeProviderClient {
    FakeProviderClient::new()
        .with_workspace(WorkspaceBuilder::default().id("w1").title("My Workspace").build())
        .with_balance("w1", 12.5)
}

#[tokio::test]
async fn no_workspace_name_issues_no_calls() {
    let client = client();
    assert_eq!(check_balance(&client, None).await.unwrap(), None);
    assert!(client.calls().is_empty());
}

#[tokio::test]
async fn unknown_workspace_skips_balance_call() {
    let client = client();

    assert_eq!(check_balance(&client, Some("Missing")).await.unwrap(), None);

    assert_eq!(client.count(ProviderOp::WorkspaceBalance), 0);
}

#[tokio::test]
async fn returns_available_balance() {
    let client = client();
    assert_eq!(check_balance(&client, Some("My Workspace")).await.unwrap(), Some(12.5));
}

#[tokio::test]
async fn balance_error_propagates() {
    let client = client();
    client.fail(ProviderOp::WorkspaceBalance, "Error");

    let err = check_balance(&client, Some("My Workspace")).await.unwrap_err();

    assert_eq!(err.message, "Error");
}

#[tokio::test]
async fn lookup_error_propagates() {
    let client = client();
    client.fail(ProviderOp::ListWorkspaces, "Error");

    let err = check_balance(&client, Some("My Workspace")).await.unwrap_err();

    assert_eq!(err.message, "Error");
}
