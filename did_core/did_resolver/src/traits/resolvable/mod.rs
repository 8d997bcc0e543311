pub mod resolution_error;
pub mod resolution_metadata;
pub mod resolution_options;
pub mod resolution_output;

use std::sync::Arc;

use async_trait::async_trait;

use self::resolution_output::DidResolutionOutput;
use crate::error::GenericError;

/// Resolves a DID into its document.
///
/// `ResolutionContext` is handed through untouched by callers; it is up to each implementation
/// what it scopes (options, wallet handles, credentials).
///
/// A DID that resolves to nothing is reported with `did_document: None` in the output, not as an
/// error. Errors are reserved for failures of the resolution itself.
#[async_trait]
pub trait DidResolvable: Send + Sync {
    type ResolutionContext: Send + Sync;

    async fn resolve(
        &self,
        context: &Self::ResolutionContext,
        did: &str,
    ) -> Result<DidResolutionOutput, GenericError>;
}

#[async_trait]
impl<T> DidResolvable for Arc<T>
where
    T: DidResolvable + ?Sized,
{
    type ResolutionContext = T::ResolutionContext;

    async fn resolve(
        &self,
        context: &Self::ResolutionContext,
        did: &str,
    ) -> Result<DidResolutionOutput, GenericError> {
        self.as_ref().resolve(context, did).await
    }
}
