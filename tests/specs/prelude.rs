// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared helpers for specs.

use std::path::PathBuf;

pub use cw_adapters::{FakeProviderClient, FixedDomainResolver, ProviderCall, ProviderOp};
pub use cw_core::{NewStudy, StudyId, StudyStatus, TaskRunConfig};

pub const PUBLIC_DOMAIN: &str = "http://test.com";

/// A complete task-run config as an operator would write it.
pub const TASK_RUN_TOML: &str = r#"
[architect]
architect_type = "local"

[task]
name = "my-task"
title = "title"
description = "This is a description"
reward = 0.3
tags = ["1", "2", "3"]
lifetime_seconds = 1

[provider]
external_study_url = "https://example.com?participant_id={{%PROLIFIC_PID%}}&study_id={{%STUDY_ID%}}&submission_id={{%SESSION_ID%}}"
id_option = "url_parameters"
workspace_name = "My Workspace"
project_name = "Project"
allow_list_group_name = "Allow list"
block_list_group_name = "Block list"
estimated_completion_minutes = 60
total_available_places = 3
eligibility_requirements = [
    { name = "AgeRangeEligibilityRequirement", min_age = 18, max_age = 100 },
    { name = "ApprovalRateEligibilityRequirement", minimum_approval_rate = 95, maximum_approval_rate = 100 },
    { name = "ParticipantGroupEligibilityRequirement", id = "64b7f1c2a3d4e5f6a7b8c9d0" },
]
"#;

/// Install a fmt subscriber honoring `RUST_LOG`. Safe to call from every spec.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Task-run config file in a scratch directory.
pub struct ConfigFile {
    dir: tempfile::TempDir,
}

impl ConfigFile {
    pub fn new(content: &str) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("task_run.toml"), content).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("task_run.toml")
    }

    pub fn load(&self) -> TaskRunConfig {
        TaskRunConfig::load(&self.path()).unwrap()
    }
}

pub fn config() -> TaskRunConfig {
    ConfigFile::new(TASK_RUN_TOML).load()
}

pub fn resolver() -> FixedDomainResolver {
    FixedDomainResolver::new(PUBLIC_DOMAIN)
}

/// Payload of the first study-create call.
pub fn created_study(client: &FakeProviderClient) -> NewStudy {
    client
        .calls()
        .into_iter()
        .find_map(|call| match call {
            ProviderCall::CreateStudy { study } => Some(*study),
            _ => None,
        })
        .unwrap()
}
