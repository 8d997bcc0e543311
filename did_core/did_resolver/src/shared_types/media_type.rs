use std::fmt::Display;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum MediaType {
    #[serde(rename = "application/did+json")]
    DidJson,
    #[serde(rename = "application/did+ld+json")]
    DidJsonLd,
    #[serde(rename = "application/ld+json")]
    JsonLd,
}

impl Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaType::DidJson => write!(f, "application/did+json"),
            MediaType::DidJsonLd => write!(f, "application/did+ld+json"),
            MediaType::JsonLd => write!(f, "application/ld+json"),
        }
    }
}
