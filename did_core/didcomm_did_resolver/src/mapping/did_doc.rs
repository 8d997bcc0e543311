use did_resolver::did_doc::schema::{
    did_doc::DidDocument, verification_method::VerificationMethodKind,
};
use log::{trace, warn};

use crate::schema::{
    did_doc::DidCommDidDocument, service::DidCommService,
    verification_method::DidCommVerificationMethod,
};

impl From<&DidDocument> for DidCommDidDocument {
    fn from(document: &DidDocument) -> Self {
        let mut adapted = DidCommDidDocument {
            did: document.id().to_owned(),
            verification_methods: document
                .verification_method()
                .iter()
                .map(DidCommVerificationMethod::from)
                .collect(),
            services: document
                .service()
                .iter()
                .map(DidCommService::from)
                .collect(),
            key_agreements: Vec::new(),
            authentications: Vec::new(),
        };

        adapted.key_agreements =
            adapted.fold_relationship("keyAgreement", document.key_agreement());
        adapted.authentications =
            adapted.fold_relationship("authentication", document.authentication());

        trace!(
            "Adapted {}: {} verification methods, {} services",
            adapted.did,
            adapted.verification_methods.len(),
            adapted.services.len()
        );
        adapted
    }
}

impl DidCommDidDocument {
    // Embedded methods join `verification_methods` in the order they are met.
    fn fold_relationship(
        &mut self,
        relationship: &str,
        entries: &[VerificationMethodKind],
    ) -> Vec<String> {
        entries
            .iter()
            .map(|entry| match entry {
                VerificationMethodKind::Resolvable(reference) => {
                    if self.verification_method(reference).is_none() {
                        warn!(
                            "{} of {} references {}, which is not a verification method of the \
                             document",
                            relationship, self.did, reference
                        );
                    }
                    reference.clone()
                }
                VerificationMethodKind::Resolved(method) => {
                    trace!("Embedded {} method {} of {}", relationship, method.id(), self.did);
                    self.verification_methods.push(method.into());
                    method.id().to_owned()
                }
            })
            .collect()
    }
}
