use serde::{Deserialize, Serialize};

use super::VerificationMethod;

/// Entry of a verification relationship: either an embedded method or a reference to one.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum VerificationMethodKind {
    Resolved(VerificationMethod),
    Resolvable(String),
}

impl VerificationMethodKind {
    pub fn id(&self) -> &str {
        match self {
            VerificationMethodKind::Resolved(verification_method) => verification_method.id(),
            VerificationMethodKind::Resolvable(reference) => reference,
        }
    }
}
