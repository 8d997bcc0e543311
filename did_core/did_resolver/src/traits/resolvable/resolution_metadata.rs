use serde::{Deserialize, Serialize};

use super::resolution_error::DidResolutionError;
use crate::shared_types::media_type::MediaType;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct DidResolutionMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_type: Option<MediaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    error: Option<DidResolutionError>,
}

impl DidResolutionMetadata {
    pub fn builder() -> DidResolutionMetadataBuilder {
        DidResolutionMetadataBuilder::default()
    }

    /// Representation the document was produced in, if the resolver reports one.
    pub fn content_type(&self) -> Option<&MediaType> {
        self.content_type.as_ref()
    }

    pub fn error(&self) -> Option<&DidResolutionError> {
        self.error.as_ref()
    }
}

#[derive(Default, Debug)]
pub struct DidResolutionMetadataBuilder {
    metadata: DidResolutionMetadata,
}

impl DidResolutionMetadataBuilder {
    pub fn content_type(mut self, content_type: MediaType) -> Self {
        self.metadata.content_type = Some(content_type);
        self
    }

    pub fn error(mut self, error: DidResolutionError) -> Self {
        self.metadata.error = Some(error);
        self
    }

    pub fn build(self) -> DidResolutionMetadata {
        self.metadata
    }
}
