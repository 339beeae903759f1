// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eligibility requirements and their translation to the provider wire schema.
//!
//! Requirements arrive as descriptor maps (`{"name": "<Variant>", ...}`),
//! usually straight from the task-run config. Translation resolves `name`
//! against the closed set of [`RequirementKind`]s and emits one
//! [`WireRequirement`] per descriptor, in order:
//!
//! ```text
//! {"name": "ApprovalRateEligibilityRequirement", "minimum_approval_rate": 1, "maximum_approval_rate": 100}
//!   ──▶ {"_cls": "web.eligibility.models.ApprovalRateEligibilityRequirement",
//!        "attributes": [{"name": "minimum_approval_rate", "value": 1},
//!                       {"name": "maximum_approval_rate", "value": 100}]}
//! ```
//!
//! Two variants deviate from the generic shape: participant-group requirements
//! emit `{"id": <id>, "value": true}`, and age-range requirements carry a
//! `query` pointing at the provider's age question.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::participant_group::ParticipantGroupId;

/// Raw requirement descriptor. Key order is significant.
pub type Descriptor = Map<String, Value>;

/// Namespace prefix of the `_cls` discriminator.
pub const CLS_NAMESPACE: &str = "web.eligibility.models";

/// Provider question id that age-range requirements are evaluated against.
pub const AGE_RANGE_QUERY_ID: &str = "54ac6ea9fdf99b2204feb893";

const NAME_KEY: &str = "name";

/// Errors from translating eligibility requirement descriptors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslationError {
    #[error("eligibility requirement #{index} has no name")]
    MissingName { index: usize },
    #[error("unknown eligibility requirement #{index}: {name}")]
    UnknownRequirement { index: usize, name: String },
    #[error("eligibility requirement #{index} ({kind}) is missing `{field}`")]
    MissingField { index: usize, kind: RequirementKind, field: &'static str },
}

/// The closed set of requirement variants the provider understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequirementKind {
    AgeRange,
    ApprovalNumbers,
    ApprovalRate,
    CustomBlacklist,
    CustomWhitelist,
    JoinedBefore,
    ParticipantGroup,
}

crate::simple_display! {
    RequirementKind {
        AgeRange => "AgeRangeEligibilityRequirement",
        ApprovalNumbers => "ApprovalNumbersEligibilityRequirement",
        ApprovalRate => "ApprovalRateEligibilityRequirement",
        CustomBlacklist => "CustomBlacklistEligibilityRequirement",
        CustomWhitelist => "CustomWhitelistEligibilityRequirement",
        JoinedBefore => "JoinedBeforeEligibilityRequirement",
        ParticipantGroup => "ParticipantGroupEligibilityRequirement",
    }
}

impl RequirementKind {
    pub const ALL: [RequirementKind; 7] = [
        RequirementKind::AgeRange,
        RequirementKind::ApprovalNumbers,
        RequirementKind::ApprovalRate,
        RequirementKind::CustomBlacklist,
        RequirementKind::CustomWhitelist,
        RequirementKind::JoinedBefore,
        RequirementKind::ParticipantGroup,
    ];

    /// Resolve a descriptor `name`. Exact match only.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.to_string() == name)
    }

    /// Fully-qualified `_cls` value for this variant.
    pub fn cls(self) -> String {
        format!("{}.{}", CLS_NAMESPACE, self)
    }

    fn query(self) -> Option<WireQuery> {
        match self {
            RequirementKind::AgeRange => Some(WireQuery { id: AGE_RANGE_QUERY_ID.to_string() }),
            RequirementKind::ApprovalNumbers
            | RequirementKind::ApprovalRate
            | RequirementKind::CustomBlacklist
            | RequirementKind::CustomWhitelist
            | RequirementKind::JoinedBefore
            | RequirementKind::ParticipantGroup => None,
        }
    }

    fn attributes(
        self,
        index: usize,
        descriptor: &Descriptor,
    ) -> Result<Vec<WireAttribute>, TranslationError> {
        match self {
            RequirementKind::ParticipantGroup => {
                let id = descriptor.get("id").ok_or(TranslationError::MissingField {
                    index,
                    kind: self,
                    field: "id",
                })?;
                let id = match id {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                Ok(vec![WireAttribute::Membership { id, value: true }])
            }
            RequirementKind::AgeRange
            | RequirementKind::ApprovalNumbers
            | RequirementKind::ApprovalRate
            | RequirementKind::CustomBlacklist
            | RequirementKind::CustomWhitelist
            | RequirementKind::JoinedBefore => Ok(descriptor
                .iter()
                .filter(|(key, _)| key.as_str() != NAME_KEY)
                .map(|(key, value)| WireAttribute::Named { name: key.clone(), value: value.clone() })
                .collect()),
        }
    }
}

/// One attribute of a wire requirement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireAttribute {
    Named { name: String, value: Value },
    /// Participant-group membership; `value` is always `true` when emitted.
    Membership { id: String, value: bool },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireQuery {
    pub id: String,
}

/// A requirement in the provider's wire schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireRequirement {
    #[serde(rename = "_cls")]
    pub cls: String,
    pub attributes: Vec<WireAttribute>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<WireQuery>,
}

/// Translate descriptors into wire requirements.
///
/// Pure and order-preserving. Any unrecognized descriptor fails the whole
/// batch; nothing is returned for the descriptors that did translate.
pub fn translate(descriptors: &[Descriptor]) -> Result<Vec<WireRequirement>, TranslationError> {
    descriptors
        .iter()
        .enumerate()
        .map(|(index, descriptor)| translate_one(index, descriptor))
        .collect()
}

fn translate_one(index: usize, descriptor: &Descriptor) -> Result<WireRequirement, TranslationError> {
    let name = descriptor
        .get(NAME_KEY)
        .and_then(Value::as_str)
        .ok_or(TranslationError::MissingName { index })?;
    let kind = RequirementKind::from_name(name)
        .ok_or_else(|| TranslationError::UnknownRequirement { index, name: name.to_string() })?;

    Ok(WireRequirement { cls: kind.cls(), attributes: kind.attributes(index, descriptor)?, query: kind.query() })
}

/// Typed form of a requirement, for building descriptors from code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name")]
pub enum EligibilityRequirement {
    #[serde(rename = "AgeRangeEligibilityRequirement")]
    AgeRange { min_age: u32, max_age: u32 },
    #[serde(rename = "ApprovalNumbersEligibilityRequirement")]
    ApprovalNumbers { minimum_approvals: u32, maximum_approvals: u32 },
    #[serde(rename = "ApprovalRateEligibilityRequirement")]
    ApprovalRate { minimum_approval_rate: u32, maximum_approval_rate: u32 },
    #[serde(rename = "CustomBlacklistEligibilityRequirement")]
    CustomBlacklist { black_list: Vec<String> },
    #[serde(rename = "CustomWhitelistEligibilityRequirement")]
    CustomWhitelist { white_list: Vec<String> },
    #[serde(rename = "JoinedBeforeEligibilityRequirement")]
    JoinedBefore { joined_before: String },
    #[serde(rename = "ParticipantGroupEligibilityRequirement")]
    ParticipantGroup { id: ParticipantGroupId },
}

impl EligibilityRequirement {
    pub fn kind(&self) -> RequirementKind {
        match self {
            EligibilityRequirement::AgeRange { .. } => RequirementKind::AgeRange,
            EligibilityRequirement::ApprovalNumbers { .. } => RequirementKind::ApprovalNumbers,
            EligibilityRequirement::ApprovalRate { .. } => RequirementKind::ApprovalRate,
            EligibilityRequirement::CustomBlacklist { .. } => RequirementKind::CustomBlacklist,
            EligibilityRequirement::CustomWhitelist { .. } => RequirementKind::CustomWhitelist,
            EligibilityRequirement::JoinedBefore { .. } => RequirementKind::JoinedBefore,
            EligibilityRequirement::ParticipantGroup { .. } => RequirementKind::ParticipantGroup,
        }
    }

    /// Descriptor map with `name` first, then fields in declaration order.
    pub fn to_descriptor(&self) -> Descriptor {
        let mut map = Descriptor::new();
        map.insert(NAME_KEY.to_string(), Value::from(self.kind().to_string()));
        let mut put = |key: &str, value: Value| {
            map.insert(key.to_string(), value);
        };
        match self {
            EligibilityRequirement::AgeRange { min_age, max_age } => {
                put("min_age", Value::from(*min_age));
                put("max_age", Value::from(*max_age));
            }
            EligibilityRequirement::ApprovalNumbers { minimum_approvals, maximum_approvals } => {
                put("minimum_approvals", Value::from(*minimum_approvals));
                put("maximum_approvals", Value::from(*maximum_approvals));
            }
            EligibilityRequirement::ApprovalRate { minimum_approval_rate, maximum_approval_rate } => {
                put("minimum_approval_rate", Value::from(*minimum_approval_rate));
                put("maximum_approval_rate", Value::from(*maximum_approval_rate));
            }
            EligibilityRequirement::CustomBlacklist { black_list } => {
                put("black_list", Value::from(black_list.clone()));
            }
            EligibilityRequirement::CustomWhitelist { white_list } => {
                put("white_list", Value::from(white_list.clone()));
            }
            EligibilityRequirement::JoinedBefore { joined_before } => {
                put("joined_before", Value::from(joined_before.clone()));
            }
            EligibilityRequirement::ParticipantGroup { id } => {
                put("id", Value::from(id.as_str()));
            }
        }
        map
    }
}

#[cfg(test)]
#[path = "eligibility_tests.rs"]
mod tests;
