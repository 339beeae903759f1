// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Task-run configuration consumed by provisioning.
//!
//! Loaded from TOML with three tables: `[architect]`, `[task]` and
//! `[provider]`. Eligibility requirement descriptors keep their document key
//! order, which the translator preserves on the wire.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::eligibility::Descriptor;

/// Architect type whose servers are publicly routable.
pub const EC2_ARCHITECT: &str = "ec2";

/// Errors from loading a task-run config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid task-run config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRunConfig {
    pub architect: ArchitectConfig,
    pub task: TaskConfig,
    pub provider: ProviderConfig,
}

impl TaskRunConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.display().to_string(), source })?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchitectConfig {
    /// e.g. "local", "heroku", "ec2"
    pub architect_type: String,
}

impl ArchitectConfig {
    pub fn is_ec2(&self) -> bool {
        self.architect_type == EC2_ARCHITECT
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskConfig {
    /// Prefix for the study's internal name; falls back to `title`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub title: String,
    pub description: String,
    /// Currency units per participant (e.g. 0.3).
    pub reward: f64,
    #[serde(default)]
    pub tags: Vec<String>,
    pub lifetime_seconds: u64,
}

impl TaskConfig {
    /// Reward in whole cents, rounded to the nearest cent.
    pub fn reward_cents(&self) -> u32 {
        (self.reward * 100.0).round().max(0.0) as u32
    }
}

/// How the provider passes participant identity to the external study.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdOption {
    #[default]
    UrlParameters,
    Question,
    NotRequired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Study URL; may contain `{{%PROLIFIC_PID%}}`, `{{%STUDY_ID%}}` and
    /// `{{%SESSION_ID%}}` placeholders which the provider fills in.
    pub external_study_url: String,
    #[serde(default)]
    pub id_option: IdOption,
    pub workspace_name: String,
    pub project_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allow_list_group_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block_list_group_name: Option<String>,
    pub estimated_completion_minutes: u32,
    #[serde(default = "default_total_available_places")]
    pub total_available_places: u32,
    #[serde(default)]
    pub eligibility_requirements: Vec<Descriptor>,
}

fn default_total_available_places() -> u32 {
    1
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
