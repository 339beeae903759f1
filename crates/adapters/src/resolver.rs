// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of the publicly reachable domain for externally hosted studies.

use cw_core::TaskRunConfig;

/// Resolves the public base domain of the task server.
///
/// Only consulted when the configured architect is publicly routable.
pub trait ExternalUrlResolver: Send + Sync {
    /// Base domain including scheme, e.g. `https://tasks.example.com`.
    /// `None` when the domain cannot be determined.
    fn full_domain(&self, config: &TaskRunConfig) -> Option<String>;
}

/// Resolver with a domain known up front.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDomainResolver {
    domain: String,
}

impl FixedDomainResolver {
    pub fn new(domain: impl Into<String>) -> Self {
        Self { domain: domain.into() }
    }
}

impl ExternalUrlResolver for FixedDomainResolver {
    fn full_domain(&self, _config: &TaskRunConfig) -> Option<String> {
        Some(self.domain.clone())
    }
}

/// Resolver reading `CW_PUBLIC_DOMAIN` at resolution time.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvDomainResolver;

impl ExternalUrlResolver for EnvDomainResolver {
    fn full_domain(&self, config: &TaskRunConfig) -> Option<String> {
        let domain = crate::env::public_domain();
        if domain.is_none() {
            tracing::debug!(
                architect_type = %config.architect.architect_type,
                "CW_PUBLIC_DOMAIN is not set"
            );
        }
        domain
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
