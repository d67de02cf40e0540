use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::messaging::EventKind;

/// The unit of data delivered over the realtime transport: a type tag, an
/// opaque payload, and a timestamp. The payload shape is not validated here;
/// schema decisions live in [`crate::types::payloads`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventEnvelope {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub data: serde_json::Value,
    pub timestamp: String,
}

impl EventEnvelope {
    /// Build an outbound envelope stamped with the current time (RFC 3339).
    pub fn new(kind: EventKind, data: serde_json::Value) -> Self {
        Self {
            kind,
            data,
            timestamp: Utc::now().to_rfc3339(),
        }
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = timestamp.into();
        self
    }
}
