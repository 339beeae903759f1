// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Study capacity specs

use crate::prelude::*;
use cw_engine::{increase_total_available_places, provision_study, publish_study};

#[tokio::test]
async fn published_study_grows_from_current_capacity() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let id = publish_study(&client, &provisioned.study.id).await.unwrap();

    let study = increase_total_available_places(&client, &id, 5).await.unwrap();

    assert_eq!(study.total_available_places, 8);
    assert_eq!(study.status, StudyStatus::Active);
}

#[tokio::test]
async fn increase_reads_capacity_changed_elsewhere() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    client.set_total_available_places(&provisioned.study.id, 0);

    let study = increase_total_available_places(&client, &provisioned.study.id, 5).await.unwrap();

    assert_eq!(study.total_available_places, 5);
    assert_eq!(client.study(&provisioned.study.id).unwrap().total_available_places, 5);
}

#[tokio::test]
async fn missing_study_surfaces_provider_error() {
    init_tracing();
    let client = FakeProviderClient::new();

    let err = increase_total_available_places(&client, &StudyId::new("gone"), 1).await.unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(client.count(ProviderOp::UpdateStudy), 0);
}
