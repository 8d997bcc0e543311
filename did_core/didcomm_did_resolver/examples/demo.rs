use async_trait::async_trait;
use did_resolver_registry::ResolverRegistry;
use didcomm_did_resolver::{
    did_resolver::{
        did_doc::schema::{
            did_doc::DidDocument, service::typed::didcommv2::ServiceDidCommV2,
            verification_method::VerificationMethod,
        },
        error::GenericError,
        traits::resolvable::{
            resolution_options::DidResolutionOptions, resolution_output::DidResolutionOutput,
            DidResolvable,
        },
    },
    DidCommDidResolver,
};

const DID: &str = "did:example:alice";

struct StaticResolver {
    document: DidDocument,
}

#[async_trait]
impl DidResolvable for StaticResolver {
    type ResolutionContext = DidResolutionOptions;

    async fn resolve(
        &self,
        _options: &DidResolutionOptions,
        did: &str,
    ) -> Result<DidResolutionOutput, GenericError> {
        if did == self.document.id() {
            Ok(DidResolutionOutput::builder(self.document.clone()).build())
        } else {
            Ok(DidResolutionOutput::not_found())
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), GenericError> {
    env_logger::init();
    demo().await
}

async fn demo() -> Result<(), GenericError> {
    let document = DidDocument::builder(DID)
        .add_verification_method(
            VerificationMethod::builder()
                .id(format!("{DID}#key-1"))
                .verification_method_type("Ed25519VerificationKey2018")
                .controller(DID)
                .public_key_base58("ByHnpUCFb1vAfh9CFZ8ZkmUZguURW8nSw889hy6rD8L7")
                .build(),
        )
        .add_authentication_reference(format!("{DID}#key-1"))
        .add_key_agreement(
            VerificationMethod::builder()
                .id(format!("{DID}#key-x25519"))
                .verification_method_type("X25519KeyAgreementKey2019")
                .controller(DID)
                .public_key_base58("JhNWeSVLMYccCk7iopQW4guaSJTojqpMEELgSLhKwRr")
                .build(),
        )
        .add_service(
            ServiceDidCommV2::builder()
                .id(format!("{DID}#didcomm-1"))
                .service_endpoint("https://example.com/didcomm")
                .accept(vec!["didcomm/v2".to_string()])
                .build(),
        )
        .build();
    println!("Did document: \n{}", serde_json::to_string_pretty(&document)?);

    let key = document.dereference_key("#key-1").map(VerificationMethod::id);
    println!("Authentication key: {:?}", key);

    let registry =
        ResolverRegistry::new().register_resolver("example", StaticResolver { document });
    let resolver = DidCommDidResolver::new(DidResolutionOptions::default(), registry);

    match resolver.resolve(DID).await? {
        Some(adapted) => println!(
            "DIDComm did document: \n{}",
            serde_json::to_string_pretty(&adapted)?
        ),
        None => println!("{} has no did document", DID),
    }

    let unknown = resolver.resolve("did:example:bob").await?;
    println!("did:example:bob resolved to {:?}", unknown);

    Ok(())
}
