pub mod generic;
pub mod typed;

use generic::GenericService;
use serde::{Deserialize, Deserializer, Serialize};
use typed::{
    didcommv1::ServiceDidCommV1, didcommv2::ServiceDidCommV2, indy_agent::ServiceIndyAgent,
    ServiceType,
};

use crate::schema::utils::OneOrList;

/// Service entry of a DID document, tagged with its variant when it is constructed.
///
/// Deserialization picks the variant from the `type` member. A service whose type is known but
/// whose members don't fit the typed shape is kept as [`Service::Generic`] rather than rejected.
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Service {
    DidCommV2(ServiceDidCommV2),
    DidCommV1(ServiceDidCommV1),
    IndyAgent(ServiceIndyAgent),
    Generic(GenericService),
}

impl Service {
    pub fn id(&self) -> &str {
        match self {
            Service::DidCommV2(service) => service.id(),
            Service::DidCommV1(service) => service.id(),
            Service::IndyAgent(service) => service.id(),
            Service::Generic(service) => service.id(),
        }
    }
}

impl From<GenericService> for Service {
    fn from(service: GenericService) -> Self {
        let Some(OneOrList::One(service_type)) = service.service_type() else {
            return Service::Generic(service);
        };
        let typed = match service_type {
            ServiceType::DIDCommV2 => ServiceDidCommV2::try_from(&service).map(Service::DidCommV2),
            ServiceType::DIDCommV1 => ServiceDidCommV1::try_from(&service).map(Service::DidCommV1),
            ServiceType::IndyAgent => ServiceIndyAgent::try_from(&service).map(Service::IndyAgent),
            ServiceType::Other(_) => return Service::Generic(service),
        };
        match typed {
            Ok(typed) => typed,
            Err(err) => {
                log::debug!(
                    "Service {} of type {} kept as generic service: {}",
                    service.id(),
                    service_type,
                    err
                );
                Service::Generic(service)
            }
        }
    }
}

impl From<ServiceDidCommV2> for Service {
    fn from(service: ServiceDidCommV2) -> Self {
        Service::DidCommV2(service)
    }
}

impl From<ServiceDidCommV1> for Service {
    fn from(service: ServiceDidCommV1) -> Self {
        Service::DidCommV1(service)
    }
}

impl From<ServiceIndyAgent> for Service {
    fn from(service: ServiceIndyAgent) -> Self {
        Service::IndyAgent(service)
    }
}

impl<'de> Deserialize<'de> for Service {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        GenericService::deserialize(deserializer).map(Service::from)
    }
}
