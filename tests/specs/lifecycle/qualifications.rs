// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Allow/block list qualification specs

use crate::prelude::*;
use cw_engine::{
    delete_qualification, find_or_create_qualification, find_qualification, provision_study,
};

#[tokio::test]
async fn allow_and_block_lists_live_under_the_project() {
    init_tracing();
    let client = FakeProviderClient::new();
    let config = config();
    let provisioned = provision_study(&client, &resolver(), &config).await.unwrap();
    let project_id = &provisioned.project.id;

    for name in [&config.provider.allow_list_group_name, &config.provider.block_list_group_name] {
        let name = name.as_deref().unwrap();
        let group = find_or_create_qualification(&client, project_id, name, Some("task run"))
            .await
            .unwrap();
        assert_eq!(&group.project_id, project_id);
    }

    // Second pass finds both
    for name in ["Allow list", "Block list"] {
        find_or_create_qualification(&client, project_id, name, None).await.unwrap();
    }
    assert_eq!(client.count(ProviderOp::CreateParticipantGroup), 2);
}

#[tokio::test]
async fn deleted_qualification_is_no_longer_found() {
    init_tracing();
    let client = FakeProviderClient::new();
    let provisioned = provision_study(&client, &resolver(), &config()).await.unwrap();
    let project_id = &provisioned.project.id;
    let group = find_or_create_qualification(&client, project_id, "Allow list", None).await.unwrap();

    assert!(delete_qualification(&client, &group.id).await.unwrap());

    let by_id = find_qualification(&client, project_id, Some(&group.id), None).await.unwrap();
    let by_name = find_qualification(&client, project_id, None, Some("Allow list")).await.unwrap();
    assert!(by_id.is_none());
    assert!(by_name.is_none());
}
