// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use cw_adapters::RemoteRequestError;
use cw_core::TranslationError;
use thiserror::Error;

/// Errors from building or provisioning a study
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProvisionError {
    /// Provider call failed; the message is the provider's, verbatim.
    #[error(transparent)]
    Remote(#[from] RemoteRequestError),
    #[error("invalid eligibility requirements: {0}")]
    Translation(#[from] TranslationError),
    #[error("provider credentials were rejected")]
    InvalidCredentials,
}
