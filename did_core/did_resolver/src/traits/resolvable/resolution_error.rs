use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error codes a resolver reports in its
/// [`DidResolutionMetadata`](super::resolution_metadata::DidResolutionMetadata).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Error)]
#[serde(rename_all = "camelCase")]
pub enum DidResolutionError {
    #[error("invalidDid")]
    InvalidDid,
    #[error("invalidDidUrl")]
    InvalidDidUrl,
    #[error("notFound")]
    NotFound,
    #[error("representationNotSupported")]
    RepresentationNotSupported,
    #[error("methodNotSupported")]
    MethodNotSupported,
    #[error("invalidOptions")]
    InvalidOptions,
    #[error("internalError")]
    InternalError,
}
