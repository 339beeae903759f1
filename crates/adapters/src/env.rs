// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the adapters crate.

/// Public domain of the task server (e.g. `https://tasks.example.com`),
/// used when the architect is publicly routable.
pub fn public_domain() -> Option<String> {
    std::env::var("CW_PUBLIC_DOMAIN").ok().filter(|s| !s.is_empty())
}
