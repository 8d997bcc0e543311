use serde::{Deserialize, Serialize};
use serde_json::Value;
use typed_builder::TypedBuilder;

use super::ServiceType;
use crate::{error::DidDocumentError, schema::service::generic::GenericService};

#[derive(Serialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDidCommV2 {
    #[builder(setter(into))]
    id: String,
    #[serde(rename = "type")]
    #[builder(default = ServiceType::DIDCommV2, setter(skip))]
    service_type: ServiceType,
    #[builder(setter(into))]
    service_endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    accept: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    routing_keys: Option<Vec<String>>,
}

impl ServiceDidCommV2 {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }

    pub fn service_endpoint(&self) -> &str {
        &self.service_endpoint
    }

    pub fn accept(&self) -> &[String] {
        self.accept.as_deref().unwrap_or_default()
    }

    pub fn routing_keys(&self) -> &[String] {
        self.routing_keys.as_deref().unwrap_or_default()
    }
}

/// Object form of a DIDComm v2 endpoint.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct EndpointObject {
    uri: String,
    #[serde(default)]
    accept: Option<Vec<String>>,
    #[serde(default)]
    routing_keys: Option<Vec<String>>,
}

impl TryFrom<&GenericService> for ServiceDidCommV2 {
    type Error = DidDocumentError;

    fn try_from(service: &GenericService) -> Result<Self, Self::Error> {
        service.expect_service_type(ServiceType::DIDCommV2)?;
        let endpoint = match service.service_endpoint() {
            Value::Object(_) => serde_json::from_value(service.service_endpoint().clone())
                .map_err(|err| DidDocumentError::InvalidField {
                    field: "serviceEndpoint",
                    reason: err.to_string(),
                })?,
            _ => EndpointObject {
                uri: service.service_endpoint_str()?.to_owned(),
                accept: None,
                routing_keys: None,
            },
        };
        // Top-level members take precedence over the ones nested in the endpoint
        Ok(Self {
            id: service.id().to_owned(),
            service_type: ServiceType::DIDCommV2,
            service_endpoint: endpoint.uri,
            accept: service.extra_field_as("accept")?.or(endpoint.accept),
            routing_keys: service
                .extra_field_as("routingKeys")?
                .or(endpoint.routing_keys),
        })
    }
}
