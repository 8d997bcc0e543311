pub mod error;

use std::{collections::HashMap, fmt};

use async_trait::async_trait;
use did_resolver::{
    error::GenericError,
    traits::resolvable::{
        resolution_options::DidResolutionOptions, resolution_output::DidResolutionOutput,
        DidResolvable,
    },
};
use error::DidResolverRegistryError;
use log::{debug, warn};

pub type GenericResolver = dyn DidResolvable<ResolutionContext = DidResolutionOptions>;

/// Dispatches resolution to the resolver registered for the DID's method.
#[derive(Default)]
pub struct ResolverRegistry {
    resolvers: HashMap<String, Box<GenericResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        ResolverRegistry {
            resolvers: HashMap::new(),
        }
    }

    pub fn register_resolver<T>(mut self, method: impl Into<String>, resolver: T) -> Self
    where
        T: DidResolvable<ResolutionContext = DidResolutionOptions> + 'static,
    {
        self.resolvers.insert(method.into(), Box::new(resolver));
        self
    }

    pub fn unregister_resolver(mut self, method: &str) -> Self {
        self.resolvers.remove(method);
        self
    }

    pub fn supports_method(&self, method: &str) -> bool {
        self.resolvers.contains_key(method)
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut methods: Vec<&String> = self.resolvers.keys().collect();
        methods.sort();
        f.debug_struct("ResolverRegistry")
            .field("methods", &methods)
            .finish()
    }
}

fn parse_method(did: &str) -> Result<&str, DidResolverRegistryError> {
    match did.strip_prefix("did:").and_then(|rest| rest.split_once(':')) {
        Some((method, id)) if !method.is_empty() && !id.is_empty() => Ok(method),
        _ => Err(DidResolverRegistryError::InvalidDid(did.to_string())),
    }
}

#[async_trait]
impl DidResolvable for ResolverRegistry {
    type ResolutionContext = DidResolutionOptions;

    async fn resolve(
        &self,
        options: &DidResolutionOptions,
        did: &str,
    ) -> Result<DidResolutionOutput, GenericError> {
        let method = parse_method(did)?;
        match self.resolvers.get(method) {
            Some(resolver) => {
                debug!("Resolving {} with the did:{} resolver", did, method);
                resolver.resolve(options, did).await
            }
            None => {
                warn!("No resolver registered for did:{}, cannot resolve {}", method, did);
                Err(Box::new(DidResolverRegistryError::UnsupportedMethod(
                    method.to_string(),
                )))
            }
        }
    }
}
