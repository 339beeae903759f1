// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! cw-adapters: the provider client seam and external URL resolution.

pub mod client;
mod env;
pub mod error;
pub mod resolver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;

pub use client::ProviderClient;
pub use error::RemoteRequestError;
pub use resolver::{EnvDomainResolver, ExternalUrlResolver, FixedDomainResolver};

#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeProviderClient, ProviderCall, ProviderOp};
