use serde::Serialize;
use typed_builder::TypedBuilder;

use super::ServiceType;
use crate::{error::DidDocumentError, schema::service::generic::GenericService};

#[derive(Serialize, Clone, Debug, PartialEq, TypedBuilder)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDidCommV1 {
    #[builder(setter(into))]
    id: String,
    #[serde(rename = "type")]
    #[builder(default = ServiceType::DIDCommV1, setter(skip))]
    service_type: ServiceType,
    #[builder(setter(into))]
    service_endpoint: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    recipient_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    routing_keys: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[builder(default, setter(strip_option))]
    accept: Option<Vec<String>>,
    #[builder(default)]
    priority: u32,
}

impl ServiceDidCommV1 {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_type(&self) -> &ServiceType {
        &self.service_type
    }

    pub fn service_endpoint(&self) -> &str {
        &self.service_endpoint
    }

    pub fn recipient_keys(&self) -> &[String] {
        self.recipient_keys.as_deref().unwrap_or_default()
    }

    pub fn routing_keys(&self) -> &[String] {
        self.routing_keys.as_deref().unwrap_or_default()
    }

    pub fn accept(&self) -> &[String] {
        self.accept.as_deref().unwrap_or_default()
    }

    pub fn priority(&self) -> u32 {
        self.priority
    }
}

impl TryFrom<&GenericService> for ServiceDidCommV1 {
    type Error = DidDocumentError;

    fn try_from(service: &GenericService) -> Result<Self, Self::Error> {
        service.expect_service_type(ServiceType::DIDCommV1)?;
        Ok(Self {
            id: service.id().to_owned(),
            service_type: ServiceType::DIDCommV1,
            service_endpoint: service.service_endpoint_str()?.to_owned(),
            recipient_keys: service.extra_field_as("recipientKeys")?,
            routing_keys: service.extra_field_as("routingKeys")?,
            accept: service.extra_field_as("accept")?,
            priority: service.extra_field_as("priority")?.unwrap_or_default(),
        })
    }
}
