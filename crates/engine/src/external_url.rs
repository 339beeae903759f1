// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where participants are sent when they start a study.
//!
//! On a publicly routable architect the configured URL's base is replaced by
//! the resolved public domain; the query string, placeholders included, is
//! kept byte-for-byte:
//!
//! ```text
//! https://example.com?participant_id={{%PROLIFIC_PID%}}&...
//!   ──▶ http://test.com?participant_id={{%PROLIFIC_PID%}}&...
//! ```

use cw_adapters::ExternalUrlResolver;
use cw_core::TaskRunConfig;

pub fn is_ec2_architect(config: &TaskRunConfig) -> bool {
    config.architect.is_ec2()
}

/// Configured study URL rebased onto `domain`.
///
/// A URL without a query string becomes the bare domain.
pub fn ec2_external_url(config: &TaskRunConfig, domain: &str) -> String {
    let template = &config.provider.external_study_url;
    match template.find('?') {
        Some(pos) => format!("{}{}", domain, &template[pos..]),
        None => domain.to_string(),
    }
}

/// Study URL for the configured architect.
///
/// Falls back to the static URL if the public domain cannot be resolved.
pub fn resolve_external_study_url(
    config: &TaskRunConfig,
    resolver: &dyn ExternalUrlResolver,
) -> String {
    if !is_ec2_architect(config) {
        return config.provider.external_study_url.clone();
    }

    match resolver.full_domain(config) {
        Some(domain) => ec2_external_url(config, &domain),
        None => {
            tracing::warn!(
                architect_type = %config.architect.architect_type,
                "public domain unavailable, using configured study URL"
            );
            config.provider.external_study_url.clone()
        }
    }
}

#[cfg(test)]
#[path = "external_url_tests.rs"]
mod tests;
