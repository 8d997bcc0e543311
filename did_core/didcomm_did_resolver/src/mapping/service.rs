use did_resolver::did_doc::schema::service::Service;
use serde_json::json;

use crate::schema::service::{DidCommMessagingService, DidCommService, ServiceKind};

impl From<&Service> for DidCommService {
    fn from(service: &Service) -> Self {
        let kind = match service {
            Service::DidCommV2(service) => ServiceKind::DIDCommMessaging(DidCommMessagingService {
                service_endpoint: service.service_endpoint().to_owned(),
                accept: service.accept().to_vec(),
                routing_keys: service.routing_keys().to_vec(),
            }),
            Service::DidCommV1(service) => ServiceKind::Other(json!({
                "type": service.service_type(),
                "serviceEndpoint": service.service_endpoint(),
                "recipientKeys": service.recipient_keys(),
                "routingKeys": service.routing_keys(),
                "accept": service.accept(),
                "priority": service.priority(),
            })),
            Service::IndyAgent(service) => ServiceKind::Other(json!({
                "type": service.service_type(),
                "serviceEndpoint": service.service_endpoint(),
                "recipientKeys": service.recipient_keys(),
                "routingKeys": service.routing_keys(),
                "priority": service.priority(),
            })),
            Service::Generic(service) => {
                let mut other = json!({ "serviceEndpoint": service.service_endpoint() });
                if let Some(service_type) = service.service_type() {
                    other["type"] = json!(service_type);
                }
                ServiceKind::Other(other)
            }
        };
        DidCommService {
            id: service.id().to_owned(),
            kind,
        }
    }
}
