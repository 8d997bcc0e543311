use async_trait::async_trait;
use did_resolver::error::GenericError;

use crate::schema::did_doc::DidCommDidDocument;

/// Resolution backend of a DIDComm messaging runtime.
///
/// `Ok(None)` means the DID has no document; it is an expected outcome, not a failure.
#[async_trait]
pub trait DidCommResolver: Send + Sync {
    async fn resolve(&self, did: &str) -> Result<Option<DidCommDidDocument>, GenericError>;
}
