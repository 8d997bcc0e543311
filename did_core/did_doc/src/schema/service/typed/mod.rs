pub mod didcommv1;
pub mod didcommv2;
pub mod indy_agent;

use std::{fmt::Display, str::FromStr};

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::DidDocumentError;

const SERVICE_TYPE_DIDCOMMV1: &str = "did-communication";
const SERVICE_TYPE_DIDCOMMV2: &str = "DIDCommMessaging";
const SERVICE_TYPE_DIDCOMMV2_LEGACY: &str = "DIDComm";
const SERVICE_TYPE_INDY_AGENT: &str = "IndyAgent";

#[derive(Clone, Debug, PartialEq)]
pub enum ServiceType {
    DIDCommV1,
    DIDCommV2,
    IndyAgent,
    Other(String),
}

impl FromStr for ServiceType {
    type Err = DidDocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SERVICE_TYPE_DIDCOMMV1 => Ok(ServiceType::DIDCommV1),
            // Both spellings are published for DIDComm v2 endpoints
            SERVICE_TYPE_DIDCOMMV2 | SERVICE_TYPE_DIDCOMMV2_LEGACY => Ok(ServiceType::DIDCommV2),
            SERVICE_TYPE_INDY_AGENT => Ok(ServiceType::IndyAgent),
            _ => Ok(ServiceType::Other(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for ServiceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}

impl Display for ServiceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServiceType::DIDCommV1 => write!(f, "{}", SERVICE_TYPE_DIDCOMMV1),
            ServiceType::DIDCommV2 => write!(f, "{}", SERVICE_TYPE_DIDCOMMV2),
            ServiceType::IndyAgent => write!(f, "{}", SERVICE_TYPE_INDY_AGENT),
            ServiceType::Other(other) => write!(f, "{}", other),
        }
    }
}

impl Serialize for ServiceType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            ServiceType::DIDCommV1 => serializer.serialize_str(SERVICE_TYPE_DIDCOMMV1),
            ServiceType::DIDCommV2 => serializer.serialize_str(SERVICE_TYPE_DIDCOMMV2),
            ServiceType::IndyAgent => serializer.serialize_str(SERVICE_TYPE_INDY_AGENT),
            ServiceType::Other(ref value) => serializer.serialize_str(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_type_serialize() {
        let serialized = serde_json::to_string(&ServiceType::DIDCommV1).unwrap();
        assert_eq!(serialized, "\"did-communication\"");

        let serialized = serde_json::to_string(&ServiceType::DIDCommV2).unwrap();
        assert_eq!(serialized, "\"DIDCommMessaging\"");

        let serialized = serde_json::to_string(&ServiceType::IndyAgent).unwrap();
        assert_eq!(serialized, "\"IndyAgent\"");

        let serialized =
            serde_json::to_string(&ServiceType::Other("LinkedDomains".to_string())).unwrap();
        assert_eq!(serialized, "\"LinkedDomains\"");
    }

    #[test]
    fn test_service_type_deserialize() {
        let deserialized: ServiceType = serde_json::from_str("\"did-communication\"").unwrap();
        assert_eq!(deserialized, ServiceType::DIDCommV1);

        let deserialized: ServiceType = serde_json::from_str("\"DIDCommMessaging\"").unwrap();
        assert_eq!(deserialized, ServiceType::DIDCommV2);

        let deserialized: ServiceType = serde_json::from_str("\"DIDComm\"").unwrap();
        assert_eq!(deserialized, ServiceType::DIDCommV2);

        let deserialized: ServiceType = serde_json::from_str("\"IndyAgent\"").unwrap();
        assert_eq!(deserialized, ServiceType::IndyAgent);

        let deserialized: ServiceType = serde_json::from_str("\"endpoint\"").unwrap();
        assert_eq!(deserialized, ServiceType::Other("endpoint".to_string()));
    }
}
