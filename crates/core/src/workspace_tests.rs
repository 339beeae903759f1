// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn workspace_deserializes_without_description() {
    let json = r#"{"id": "64a0c0ffee", "title": "My Workspace"}"#;
    let ws: Workspace = serde_json::from_str(json).unwrap();
    assert_eq!(ws.id, "64a0c0ffee");
    assert_eq!(ws.title, "My Workspace");
    assert!(ws.description.is_none());
}

#[test]
fn workspace_serializes_without_absent_description() {
    let ws = Workspace::builder().id("w1").title("Lab").build();
    let json = serde_json::to_value(&ws).unwrap();
    assert_eq!(json, serde_json::json!({"id": "w1", "title": "Lab"}));
}

#[test]
fn balance_total_defaults_to_zero() {
    let balance: WorkspaceBalance =
        serde_json::from_str(r#"{"available_balance": 9999}"#).unwrap();
    assert_eq!(balance.available_balance, 9999.0);
    assert_eq!(balance.total_balance, 0.0);
}
