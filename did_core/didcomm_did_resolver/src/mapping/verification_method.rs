use did_resolver::did_doc::schema::verification_method::VerificationMethod;
use serde_json::Value;

use crate::schema::verification_method::{DidCommVerificationMethod, VerificationMaterial};

type MaterialExtractor = fn(&VerificationMethod) -> Option<VerificationMaterial>;

// First populated encoding wins.
const MATERIAL_PRIORITY: [MaterialExtractor; 5] = [base58, multibase, hex, jwk, other];

fn populated(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.is_empty())
}

fn base58(method: &VerificationMethod) -> Option<VerificationMaterial> {
    populated(method.public_key_base58()).map(|key| VerificationMaterial::Base58(key.to_owned()))
}

fn multibase(method: &VerificationMethod) -> Option<VerificationMaterial> {
    populated(method.public_key_multibase())
        .map(|key| VerificationMaterial::Multibase(key.to_owned()))
}

fn hex(method: &VerificationMethod) -> Option<VerificationMaterial> {
    populated(method.public_key_hex()).map(|key| VerificationMaterial::Hex(key.to_owned()))
}

fn jwk(method: &VerificationMethod) -> Option<VerificationMaterial> {
    method
        .public_key_jwk()
        .map(|jwk| VerificationMaterial::Jwk(Value::Object(jwk.clone())))
}

fn other(method: &VerificationMethod) -> Option<VerificationMaterial> {
    [
        method.public_key_pem(),
        method.public_key_base64(),
        method.blockchain_account_id(),
        method.ethereum_address(),
    ]
    .into_iter()
    .find_map(populated)
    .map(|value| VerificationMaterial::Other(Some(value.to_owned())))
}

fn verification_material(method: &VerificationMethod) -> VerificationMaterial {
    MATERIAL_PRIORITY
        .iter()
        .find_map(|extract| extract(method))
        .unwrap_or(VerificationMaterial::Other(None))
}

impl From<&VerificationMethod> for DidCommVerificationMethod {
    fn from(method: &VerificationMethod) -> Self {
        DidCommVerificationMethod {
            id: method.id().to_owned(),
            verification_method_type: method.verification_method_type().to_owned(),
            controller: method.controller().to_owned(),
            verification_material: verification_material(method),
        }
    }
}
