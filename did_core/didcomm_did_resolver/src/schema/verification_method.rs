use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DidCommVerificationMethod {
    pub id: String,
    #[serde(rename = "type")]
    pub verification_method_type: String,
    pub controller: String,
    pub verification_material: VerificationMaterial,
}

/// Key material of a verification method, serialized as `{"format": ..., "value": ...}`.
///
/// `Other` covers every encoding without a dedicated format. It carries no value when the
/// source method had no material at all.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "format", content = "value")]
pub enum VerificationMaterial {
    Base58(String),
    Multibase(String),
    Hex(String),
    #[serde(rename = "JWK")]
    Jwk(Value),
    Other(Option<String>),
}
