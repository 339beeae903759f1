// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Study expiry specs
//!
//! Expiry is a local marker on a completed study, never a provider status.

use crate::prelude::*;
use cw_engine::{expire_study, is_expired, provision_study, publish_study, stop_study};

#[tokio::test]
async fn expired_study_is_completed_and_marked() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let id = publish_study(&client, &provisioned.study.id).await.unwrap();

    let study = expire_study(&client, &id).await.unwrap();

    assert!(is_expired(&study));
    assert_eq!(study.status, StudyStatus::Completed);
    assert_eq!(study.internal_name, format!("{}_EXPIRED", provisioned.study.internal_name));
}

#[tokio::test]
async fn stopped_study_is_not_expired() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let id = publish_study(&client, &provisioned.study.id).await.unwrap();

    let study = stop_study(&client, &id).await.unwrap();

    assert_eq!(study.status, StudyStatus::Completed);
    assert!(!is_expired(&study));
}

#[tokio::test]
async fn marked_study_awaiting_review_is_not_expired() {
    init_tracing();
    let client = FakeProviderClient::new().with_stopped_status(StudyStatus::AwaitingReview);
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let id = publish_study(&client, &provisioned.study.id).await.unwrap();

    let study = expire_study(&client, &id).await.unwrap();

    assert!(study.internal_name.ends_with("_EXPIRED"));
    assert_eq!(study.status, StudyStatus::AwaitingReview);
    assert!(!is_expired(&study));
}

#[tokio::test]
async fn republishing_is_rejected_by_provider() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let id = publish_study(&client, &provisioned.study.id).await.unwrap();

    let err = publish_study(&client, &id).await.unwrap_err();

    assert_eq!(err.status, Some(400));
}
