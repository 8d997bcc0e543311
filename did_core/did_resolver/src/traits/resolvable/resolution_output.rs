use did_doc::schema::did_doc::DidDocument;
use serde::{Deserialize, Serialize};

use super::{resolution_error::DidResolutionError, resolution_metadata::DidResolutionMetadata};
use crate::shared_types::did_document_metadata::DidDocumentMetadata;

// A resolver that ran successfully but found nothing leaves `did_document` empty and reports
// the reason in the resolution metadata. Failures of the resolver itself are returned as errors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did_document: Option<DidDocument>,
    #[serde(default)]
    pub did_resolution_metadata: DidResolutionMetadata,
    #[serde(default)]
    pub did_document_metadata: DidDocumentMetadata,
}

impl DidResolutionOutput {
    pub fn builder(did_document: DidDocument) -> DidResolutionOutputBuilder {
        DidResolutionOutputBuilder {
            did_document: Some(did_document),
            did_resolution_metadata: None,
            did_document_metadata: None,
        }
    }

    pub fn not_found() -> Self {
        Self {
            did_document: None,
            did_resolution_metadata: DidResolutionMetadata::builder()
                .error(DidResolutionError::NotFound)
                .build(),
            did_document_metadata: DidDocumentMetadata::default(),
        }
    }

    pub fn did_document(&self) -> Option<&DidDocument> {
        self.did_document.as_ref()
    }

    pub fn did_resolution_metadata(&self) -> &DidResolutionMetadata {
        &self.did_resolution_metadata
    }

    pub fn did_document_metadata(&self) -> &DidDocumentMetadata {
        &self.did_document_metadata
    }
}

#[derive(Debug)]
pub struct DidResolutionOutputBuilder {
    did_document: Option<DidDocument>,
    did_resolution_metadata: Option<DidResolutionMetadata>,
    did_document_metadata: Option<DidDocumentMetadata>,
}

impl DidResolutionOutputBuilder {
    pub fn did_resolution_metadata(
        mut self,
        did_resolution_metadata: DidResolutionMetadata,
    ) -> Self {
        self.did_resolution_metadata = Some(did_resolution_metadata);
        self
    }

    pub fn did_document_metadata(mut self, did_document_metadata: DidDocumentMetadata) -> Self {
        self.did_document_metadata = Some(did_document_metadata);
        self
    }

    pub fn build(self) -> DidResolutionOutput {
        DidResolutionOutput {
            did_document: self.did_document,
            did_resolution_metadata: self.did_resolution_metadata.unwrap_or_default(),
            did_document_metadata: self.did_document_metadata.unwrap_or_default(),
        }
    }
}
