use thiserror::Error;

use crate::schema::service::typed::ServiceType;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DidDocumentError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid field {field}: {reason}")]
    InvalidField {
        field: &'static str,
        reason: String,
    },
    #[error("Service type mismatch: expected {expected}, found {found}")]
    ServiceTypeMismatch { expected: ServiceType, found: String },
}
