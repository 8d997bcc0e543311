use thiserror::Error;

#[derive(Debug, Error)]
pub enum DidResolverRegistryError {
    #[error("Invalid DID: {0}")]
    InvalidDid(String),
    #[error("Unsupported DID method: {0}")]
    UnsupportedMethod(String),
}
