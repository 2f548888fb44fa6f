// Copyright (c) 2025 - Cowboy AI, Inc.
//! Wire envelope for events exchanged with the event bus
//!
//! The bus speaks `{ "type": "...", "data": { ... } }` both on the
//! history endpoint and when pushing live events.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Untyped event as delivered by the event bus
///
/// Both fields default when absent: an envelope without a `type` decodes to
/// an unknown event, one without `data` fails payload decoding for any
/// recognized type. A `type` that is not a string is kept in its JSON form
/// (`7`, `true`) and can never name a recognized event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventEnvelope {
    /// Declared event type, e.g. `PostCreated`
    #[serde(rename = "type", default, deserialize_with = "lenient_type")]
    pub event_type: String,

    /// Event payload, shape depends on `event_type`
    #[serde(default)]
    pub data: Value,
}

impl EventEnvelope {
    /// Create an envelope from a type name and payload
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Read one raw bus event
    ///
    /// Any JSON object is an envelope. Fails only when `value` is a scalar
    /// (or an array that does not look like `[type, data]`).
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

impl From<EventEnvelope> for Value {
    fn from(envelope: EventEnvelope) -> Self {
        serde_json::json!({ "type": envelope.event_type, "data": envelope.data })
    }
}

fn lenient_type<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}
