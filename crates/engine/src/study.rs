// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Study lifecycle: create, publish, stop, grow capacity and expire.
//!
//! Operations after creation are keyed by study id and re-read the study
//! from the provider where they depend on its current state.
//!
//! Capacity increase and expiry are fetch-then-update sequences. The
//! provider offers no compare-and-swap, so a concurrent change landing
//! between the fetch and the update is lost.

use cw_adapters::{ExternalUrlResolver, ProviderClient, RemoteRequestError};
use cw_core::{
    translate, CompletionCode, NewStudy, ProjectId, Study, StudyId, StudyUpdate, TaskRunConfig,
};

use crate::error::ProvisionError;
use crate::external_url::resolve_external_study_url;

/// Places added by a capacity increase when the caller has no better number.
pub const DEFAULT_PLACES_INCREMENT: u32 = 1;

const PLACEHOLDER_CODE_LEN: usize = 5;
const COMPLETION_CODE_LEN: usize = 8;

/// Create a study under `project_id` from the task-run config.
///
/// The study is created with a throwaway completion code, then updated with
/// its real code, derived from the id the provider assigned.
pub async fn create_study(
    client: &dyn ProviderClient,
    resolver: &dyn ExternalUrlResolver,
    config: &TaskRunConfig,
    project_id: &ProjectId,
) -> Result<Study, ProvisionError> {
    let new_study = new_study(config, resolver, project_id)?;

    let study = client.create_study(&new_study).await?;
    tracing::info!(
        study_id = %study.id,
        %project_id,
        internal_name = %study.internal_name,
        "created study"
    );

    let update = StudyUpdate::new()
        .completion_codes(vec![CompletionCode::manual_review(completion_code(&study.id))]);
    let study = client.update_study(&study.id, &update).await?;
    tracing::info!(study_id = %study.id, "attached completion codes");

    Ok(study)
}

fn new_study(
    config: &TaskRunConfig,
    resolver: &dyn ExternalUrlResolver,
    project_id: &ProjectId,
) -> Result<NewStudy, ProvisionError> {
    let task = &config.task;
    let provider = &config.provider;
    let prefix = task.name.as_deref().unwrap_or(&task.title);

    Ok(NewStudy {
        project_id: project_id.clone(),
        name: task.title.clone(),
        internal_name: format!("{}_{}", prefix, uuid::Uuid::new_v4().simple()),
        description: task.description.clone(),
        external_study_url: resolve_external_study_url(config, resolver),
        prolific_id_option: provider.id_option,
        completion_codes: vec![CompletionCode::manual_review(placeholder_code())],
        estimated_completion_time: provider.estimated_completion_minutes,
        reward: task.reward_cents(),
        total_available_places: provider.total_available_places,
        eligibility_requirements: translate(&provider.eligibility_requirements)?,
    })
}

fn placeholder_code() -> String {
    let mut code = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    code.truncate(PLACEHOLDER_CODE_LEN);
    code
}

/// Completion code participants submit for `study_id`.
pub fn completion_code(study_id: &StudyId) -> String {
    study_id.chars().take(COMPLETION_CODE_LEN).collect::<String>().to_uppercase()
}

pub async fn get_study(client: &dyn ProviderClient, id: &StudyId) -> Result<Study, RemoteRequestError> {
    client.retrieve_study(id).await
}

/// Publish a study. Returns only its id; callers key everything by id.
pub async fn publish_study(
    client: &dyn ProviderClient,
    id: &StudyId,
) -> Result<StudyId, RemoteRequestError> {
    let study = client.publish_study(id).await?;
    tracing::info!(study_id = %study.id, status = %study.status, "published study");
    Ok(study.id)
}

pub async fn stop_study(client: &dyn ProviderClient, id: &StudyId) -> Result<Study, RemoteRequestError> {
    let study = client.stop_study(id).await?;
    tracing::info!(study_id = %study.id, status = %study.status, "stopped study");
    Ok(study)
}

/// Add `delta` places to a study's capacity.
pub async fn increase_total_available_places(
    client: &dyn ProviderClient,
    id: &StudyId,
    delta: u32,
) -> Result<Study, RemoteRequestError> {
    let current = get_study(client, id).await?;
    let places = current.total_available_places.saturating_add(delta);

    let study = client
        .update_study(id, &StudyUpdate::new().total_available_places(places))
        .await?;
    tracing::info!(
        study_id = %id,
        from = current.total_available_places,
        to = study.total_available_places,
        "increased study capacity"
    );
    Ok(study)
}

/// Stop a study and mark it expired in its internal name.
///
/// Nothing is stopped or renamed if the study cannot be read first.
pub async fn expire_study(client: &dyn ProviderClient, id: &StudyId) -> Result<Study, RemoteRequestError> {
    let current = get_study(client, id).await?;
    stop_study(client, id).await?;

    let internal_name = current.expired_internal_name();
    let study = client
        .update_study(id, &StudyUpdate::new().internal_name(internal_name))
        .await?;
    tracing::info!(study_id = %id, internal_name = %study.internal_name, "expired study");
    Ok(study)
}

pub fn is_expired(study: &Study) -> bool {
    study.is_expired()
}

#[cfg(test)]
#[path = "study_tests.rs"]
mod tests;
