// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// Any transport or HTTP-level failure talking to the provider.
///
/// The message is preserved verbatim from the underlying response. The status
/// is kept only so callers can tell "does not exist" apart from "could not
/// talk to the provider".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteRequestError {
    pub message: String,
    pub status: Option<u16>,
}

impl RemoteRequestError {
    pub const NOT_FOUND: u16 = 404;

    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), status: None }
    }

    pub fn with_status(status: u16, message: impl Into<String>) -> Self {
        Self { message: message.into(), status: Some(status) }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::with_status(Self::NOT_FOUND, message)
    }

    pub fn is_not_found(&self) -> bool {
        self.status == Some(Self::NOT_FOUND)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
