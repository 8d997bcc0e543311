use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::shared_types::media_type::MediaType;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct DidResolutionOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    accept: Option<MediaType>,
    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

impl DidResolutionOptions {
    pub fn new(extra: HashMap<String, Value>) -> Self {
        Self {
            accept: None,
            extra,
        }
    }

    pub fn set_accept(mut self, accept: MediaType) -> Self {
        self.accept = Some(accept);
        self
    }

    pub fn accept(&self) -> Option<&MediaType> {
        self.accept.as_ref()
    }

    pub fn extra(&self) -> &HashMap<String, Value> {
        &self.extra
    }
}
