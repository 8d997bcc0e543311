use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    service::Service,
    utils::{fragment, null_as_default, OneOrList},
    verification_method::{VerificationMethod, VerificationMethodKind},
};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
#[serde(rename_all = "camelCase")]
pub struct DidDocument {
    id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    also_known_as: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    controller: Option<OneOrList<String>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    verification_method: Vec<VerificationMethod>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    authentication: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    assertion_method: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    key_agreement: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    capability_invocation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    capability_delegation: Vec<VerificationMethodKind>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    #[serde(deserialize_with = "null_as_default")]
    service: Vec<Service>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl DidDocument {
    pub fn builder(id: impl Into<String>) -> DidDocumentBuilder {
        DidDocumentBuilder::new(id)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn also_known_as(&self) -> &[String] {
        self.also_known_as.as_ref()
    }

    pub fn controller(&self) -> Option<&OneOrList<String>> {
        self.controller.as_ref()
    }

    pub fn verification_method(&self) -> &[VerificationMethod] {
        self.verification_method.as_ref()
    }

    pub fn authentication(&self) -> &[VerificationMethodKind] {
        self.authentication.as_ref()
    }

    pub fn assertion_method(&self) -> &[VerificationMethodKind] {
        self.assertion_method.as_ref()
    }

    pub fn key_agreement(&self) -> &[VerificationMethodKind] {
        self.key_agreement.as_ref()
    }

    pub fn capability_invocation(&self) -> &[VerificationMethodKind] {
        self.capability_invocation.as_ref()
    }

    pub fn capability_delegation(&self) -> &[VerificationMethodKind] {
        self.capability_delegation.as_ref()
    }

    pub fn service(&self) -> &[Service] {
        self.service.as_ref()
    }

    pub fn extra_field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// Looks up a method of the primary `verificationMethod` list, first by full id and then by
    /// fragment, so `#key-1` and `did:example:123#key-1` find the same entry.
    pub fn dereference_key(&self, reference: &str) -> Option<&VerificationMethod> {
        self.verification_method
            .iter()
            .find(|vm| vm.id() == reference)
            .or_else(|| {
                let wanted = fragment(reference)?;
                self.verification_method
                    .iter()
                    .find(|vm| fragment(vm.id()) == Some(wanted))
            })
    }
}

#[derive(Default, Debug)]
pub struct DidDocumentBuilder {
    id: String,
    also_known_as: Vec<String>,
    controller: Vec<String>,
    verification_method: Vec<VerificationMethod>,
    authentication: Vec<VerificationMethodKind>,
    assertion_method: Vec<VerificationMethodKind>,
    key_agreement: Vec<VerificationMethodKind>,
    capability_invocation: Vec<VerificationMethodKind>,
    capability_delegation: Vec<VerificationMethodKind>,
    service: Vec<Service>,
    extra: HashMap<String, Value>,
}

impl DidDocumentBuilder {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn add_also_known_as(mut self, also_known_as: impl Into<String>) -> Self {
        self.also_known_as.push(also_known_as.into());
        self
    }

    pub fn add_controller(mut self, controller: impl Into<String>) -> Self {
        self.controller.push(controller.into());
        self
    }

    pub fn add_verification_method(mut self, verification_method: VerificationMethod) -> Self {
        self.verification_method.push(verification_method);
        self
    }

    pub fn add_authentication_method(mut self, method: VerificationMethod) -> Self {
        self.authentication
            .push(VerificationMethodKind::Resolved(method));
        self
    }

    pub fn add_authentication_reference(mut self, reference: impl Into<String>) -> Self {
        self.authentication
            .push(VerificationMethodKind::Resolvable(reference.into()));
        self
    }

    pub fn add_assertion_method(mut self, method: VerificationMethod) -> Self {
        self.assertion_method
            .push(VerificationMethodKind::Resolved(method));
        self
    }

    pub fn add_assertion_method_reference(mut self, reference: impl Into<String>) -> Self {
        self.assertion_method
            .push(VerificationMethodKind::Resolvable(reference.into()));
        self
    }

    pub fn add_key_agreement(mut self, key_agreement: VerificationMethod) -> Self {
        self.key_agreement
            .push(VerificationMethodKind::Resolved(key_agreement));
        self
    }

    pub fn add_key_agreement_reference(mut self, reference: impl Into<String>) -> Self {
        self.key_agreement
            .push(VerificationMethodKind::Resolvable(reference.into()));
        self
    }

    pub fn add_capability_invocation(mut self, capability_invocation: VerificationMethod) -> Self {
        self.capability_invocation
            .push(VerificationMethodKind::Resolved(capability_invocation));
        self
    }

    pub fn add_capability_invocation_reference(mut self, reference: impl Into<String>) -> Self {
        self.capability_invocation
            .push(VerificationMethodKind::Resolvable(reference.into()));
        self
    }

    pub fn add_capability_delegation(mut self, capability_delegation: VerificationMethod) -> Self {
        self.capability_delegation
            .push(VerificationMethodKind::Resolved(capability_delegation));
        self
    }

    pub fn add_capability_delegation_reference(mut self, reference: impl Into<String>) -> Self {
        self.capability_delegation
            .push(VerificationMethodKind::Resolvable(reference.into()));
        self
    }

    pub fn add_service(mut self, service: impl Into<Service>) -> Self {
        self.service.push(service.into());
        self
    }

    pub fn add_extra_field(mut self, key: impl Into<String>, value: Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    pub fn build(self) -> DidDocument {
        let controller = if self.controller.is_empty() {
            None
        } else {
            Some(OneOrList::from(self.controller))
        };
        DidDocument {
            id: self.id,
            also_known_as: self.also_known_as,
            controller,
            verification_method: self.verification_method,
            authentication: self.authentication,
            assertion_method: self.assertion_method,
            key_agreement: self.key_agreement,
            capability_invocation: self.capability_invocation,
            capability_delegation: self.capability_delegation,
            service: self.service,
            extra: self.extra,
        }
    }
}
