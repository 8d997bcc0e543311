use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DidCommService {
    pub id: String,
    pub kind: ServiceKind,
}

/// Either a DIDComm v2 messaging endpoint, or any other service kept as its JSON members.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub enum ServiceKind {
    DIDCommMessaging(DidCommMessagingService),
    Other(Value),
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct DidCommMessagingService {
    pub service_endpoint: String,
    #[serde(default)]
    pub accept: Vec<String>,
    #[serde(default)]
    pub routing_keys: Vec<String>,
}
