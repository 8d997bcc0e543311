use std::fmt;

use async_trait::async_trait;
use did_resolver::{error::GenericError, traits::resolvable::DidResolvable};
use log::debug;

use crate::{schema::did_doc::DidCommDidDocument, traits::DidCommResolver};

/// Resolves DIDs through a generic resolver and adapts the documents for DIDComm.
///
/// The context is handed to the underlying resolver on every call and is never inspected here.
/// Resolver errors are returned as they are; a DID without a document yields `Ok(None)`.
pub struct DidCommDidResolver<R: DidResolvable> {
    context: R::ResolutionContext,
    resolver: R,
}

impl<R: DidResolvable> DidCommDidResolver<R> {
    pub fn new(context: R::ResolutionContext, resolver: R) -> Self {
        Self { context, resolver }
    }

    pub fn context(&self) -> &R::ResolutionContext {
        &self.context
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub async fn resolve(&self, did: &str) -> Result<Option<DidCommDidDocument>, GenericError> {
        debug!("Resolving DIDComm document of {}", did);
        let output = self.resolver.resolve(&self.context, did).await?;
        let Some(document) = output.did_document() else {
            debug!(
                "No DID document for {}, resolution error: {:?}",
                did,
                output.did_resolution_metadata().error()
            );
            return Ok(None);
        };
        Ok(Some(DidCommDidDocument::from(document)))
    }
}

impl<R> fmt::Debug for DidCommDidResolver<R>
where
    R: DidResolvable,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DidCommDidResolver").finish_non_exhaustive()
    }
}

#[async_trait]
impl<R: DidResolvable> DidCommResolver for DidCommDidResolver<R> {
    async fn resolve(&self, did: &str) -> Result<Option<DidCommDidDocument>, GenericError> {
        DidCommDidResolver::resolve(self, did).await
    }
}
