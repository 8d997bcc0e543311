use did_resolver::did_doc::schema::utils::fragment;
use serde::{Deserialize, Serialize};

use super::{service::DidCommService, verification_method::DidCommVerificationMethod};

/// DID document in the shape a DIDComm messaging runtime consumes.
///
/// Every id listed in `key_agreements` and `authentications` is expected to name an entry of
/// `verification_methods`, unless the source document itself referenced a key it did not define.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DidCommDidDocument {
    pub did: String,
    pub verification_methods: Vec<DidCommVerificationMethod>,
    pub services: Vec<DidCommService>,
    pub key_agreements: Vec<String>,
    pub authentications: Vec<String>,
}

impl DidCommDidDocument {
    /// Finds a verification method by full id, falling back to a fragment match for relative
    /// references such as `#key-1`.
    pub fn verification_method(&self, id: &str) -> Option<&DidCommVerificationMethod> {
        self.verification_methods
            .iter()
            .find(|vm| vm.id == id)
            .or_else(|| {
                let wanted = fragment(id)?;
                self.verification_methods
                    .iter()
                    .find(|vm| fragment(&vm.id) == Some(wanted))
            })
    }

    pub fn service(&self, id: &str) -> Option<&DidCommService> {
        self.services.iter().find(|service| service.id == id)
    }
}
