use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use super::typed::ServiceType;
use crate::{error::DidDocumentError, schema::utils::OneOrList};

/// Untyped service entry. Every service deserializes through this shape first.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GenericService {
    id: String,
    #[serde(rename = "type")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    service_type: Option<OneOrList<ServiceType>>,
    #[serde(default)]
    service_endpoint: Value,
    #[serde(flatten)]
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    extra: HashMap<String, Value>,
}

impl GenericService {
    pub fn new(
        id: String,
        service_type: Option<OneOrList<ServiceType>>,
        service_endpoint: Value,
        extra: HashMap<String, Value>,
    ) -> Self {
        Self {
            id,
            service_type,
            service_endpoint,
            extra,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn service_type(&self) -> Option<&OneOrList<ServiceType>> {
        self.service_type.as_ref()
    }

    pub fn service_endpoint(&self) -> &Value {
        &self.service_endpoint
    }

    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }

    /// Reads an extra field as `T`. Absent and `null` fields both yield `Ok(None)`.
    pub fn extra_field_as<T: DeserializeOwned>(
        &self,
        key: &'static str,
    ) -> Result<Option<T>, DidDocumentError> {
        match self.extra.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(|err| DidDocumentError::InvalidField {
                    field: key,
                    reason: err.to_string(),
                }),
        }
    }

    pub(crate) fn expect_service_type(
        &self,
        expected: ServiceType,
    ) -> Result<(), DidDocumentError> {
        match &self.service_type {
            Some(OneOrList::One(service_type)) if service_type == &expected => Ok(()),
            Some(other) => Err(DidDocumentError::ServiceTypeMismatch {
                expected,
                found: other.to_string(),
            }),
            None => Err(DidDocumentError::MissingField("type")),
        }
    }

    pub(crate) fn service_endpoint_str(&self) -> Result<&str, DidDocumentError> {
        match &self.service_endpoint {
            Value::String(endpoint) => Ok(endpoint),
            Value::Null => Err(DidDocumentError::MissingField("serviceEndpoint")),
            other => Err(DidDocumentError::InvalidField {
                field: "serviceEndpoint",
                reason: format!("expected a string, found {}", other),
            }),
        }
    }
}
