// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-engine: reconciliation and study lifecycle on top of a provider client.
//!
//! Every operation is a short sequence of awaited provider calls. Nothing is
//! cached between calls and nothing here retries; provider failures surface
//! unchanged as [`RemoteRequestError`](cw_adapters::RemoteRequestError).

pub mod balance;
pub mod credentials;
pub mod error;
pub mod external_url;
pub mod locator;
pub mod provision;
pub mod reconcile;
pub mod study;

pub use balance::check_balance;
pub use credentials::check_credentials;
pub use error::ProvisionError;
pub use external_url::{ec2_external_url, is_ec2_architect, resolve_external_study_url};
pub use locator::{find_project, find_qualification, find_workspace, locate, Locatable};
pub use provision::{provision_study, ProvisionedStudy};
pub use reconcile::{
    create_qualification, delete_qualification, find_or_create_project,
    find_or_create_qualification, find_or_create_workspace,
};
pub use study::{
    create_study, expire_study, get_study, increase_total_available_places, is_expired,
    publish_study, stop_study, DEFAULT_PLACES_INCREMENT,
};
