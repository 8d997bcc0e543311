mod verification_method_kind;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use typed_builder::TypedBuilder;
pub use verification_method_kind::VerificationMethodKind;

/// A verification method as published by a resolver.
///
/// DID core allows exactly one material property per method, but documents in the wild
/// occasionally carry several. All of them are kept here; consumers decide which one wins.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMethod {
    #[builder(setter(into))]
    id: String,
    #[serde(rename = "type")]
    #[builder(setter(into))]
    verification_method_type: String,
    #[builder(setter(into))]
    controller: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    public_key_base58: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    public_key_multibase: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    public_key_hex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    public_key_jwk: Option<Map<String, Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    public_key_pem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    public_key_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    blockchain_account_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(into, strip_option))]
    ethereum_address: Option<String>,
}

impl VerificationMethod {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn verification_method_type(&self) -> &str {
        &self.verification_method_type
    }

    pub fn controller(&self) -> &str {
        &self.controller
    }

    pub fn public_key_base58(&self) -> Option<&str> {
        self.public_key_base58.as_deref()
    }

    pub fn public_key_multibase(&self) -> Option<&str> {
        self.public_key_multibase.as_deref()
    }

    pub fn public_key_hex(&self) -> Option<&str> {
        self.public_key_hex.as_deref()
    }

    pub fn public_key_jwk(&self) -> Option<&Map<String, Value>> {
        self.public_key_jwk.as_ref()
    }

    pub fn public_key_pem(&self) -> Option<&str> {
        self.public_key_pem.as_deref()
    }

    pub fn public_key_base64(&self) -> Option<&str> {
        self.public_key_base64.as_deref()
    }

    pub fn blockchain_account_id(&self) -> Option<&str> {
        self.blockchain_account_id.as_deref()
    }

    pub fn ethereum_address(&self) -> Option<&str> {
        self.ethereum_address.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;

    fn create_valid_verification_method_value() -> Value {
        json!({
            "id": "did:example:123456789abcdefghi#key-1",
            "type": "Ed25519VerificationKey2018",
            "controller": "did:example:123456789abcdefghi",
            "publicKeyMultibase": "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e"
        })
    }

    fn create_verification_method_multiple_keys() -> Value {
        json!({
            "id": "did:example:123456789abcdefghi#key-1",
            "type": "Ed25519VerificationKey2018",
            "controller": "did:example:123456789abcdefghi",
            "publicKeyMultibase": "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e",
            "publicKeyJwk": {
                "kty": "OKP",
                "crv": "Ed25519",
                "x": "zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e"
            }
        })
    }

    #[test]
    fn test_verification_method_builder() {
        let vm = VerificationMethod::builder()
            .id("did:example:123456789abcdefghi#key-1")
            .controller("did:example:123456789abcdefghi")
            .verification_method_type("Ed25519VerificationKey2018")
            .public_key_base58("8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K")
            .build();

        assert_eq!(vm.id(), "did:example:123456789abcdefghi#key-1");
        assert_eq!(vm.controller(), "did:example:123456789abcdefghi");
        assert_eq!(vm.verification_method_type(), "Ed25519VerificationKey2018");
        assert_eq!(
            vm.public_key_base58(),
            Some("8HH5gYEeNc3z7PYXmd54d4x6qAfCNrqQqEB3nS7Zfu7K")
        );
        assert_eq!(vm.public_key_multibase(), None);
        assert_eq!(vm.public_key_jwk(), None);
    }

    #[test]
    fn test_verification_method_deserialization() {
        let vm: VerificationMethod =
            serde_json::from_value(create_valid_verification_method_value()).unwrap();
        assert_eq!(
            vm.public_key_multibase(),
            Some("zQmWvQxTqbG2Z9HPJgG57jjwR154cKhbtJenbyYTWkjgF3e")
        );
        assert_eq!(vm.public_key_base58(), None);
    }

    #[test]
    fn test_verification_method_deserialization_keeps_multiple_keys() {
        let vm: VerificationMethod =
            serde_json::from_value(create_verification_method_multiple_keys()).unwrap();
        assert!(vm.public_key_multibase().is_some());
        assert_eq!(
            vm.public_key_jwk().unwrap().get("crv").unwrap(),
            &json!("Ed25519")
        );
    }

    #[test]
    fn test_verification_method_deserialization_without_key_material() {
        let vm: VerificationMethod = serde_json::from_value(json!({
            "id": "did:example:123#key-1",
            "type": "EcdsaSecp256k1RecoveryMethod2020",
            "controller": "did:example:123",
            "blockchainAccountId": "eip155:1:0x89a932207c485f85226d86f7cd486a89a24fcc12"
        }))
        .unwrap();
        assert_eq!(
            vm.blockchain_account_id(),
            Some("eip155:1:0x89a932207c485f85226d86f7cd486a89a24fcc12")
        );
        assert_eq!(vm.ethereum_address(), None);
    }

    #[test]
    fn test_verification_method_serialization_skips_absent_material() {
        let vm = VerificationMethod::builder()
            .id("#key-1")
            .controller("did:example:123")
            .verification_method_type("X25519KeyAgreementKey2019")
            .public_key_hex("ff00")
            .build();

        assert_eq!(
            serde_json::to_value(&vm).unwrap(),
            json!({
                "id": "#key-1",
                "type": "X25519KeyAgreementKey2019",
                "controller": "did:example:123",
                "publicKeyHex": "ff00"
            })
        );
    }
}
