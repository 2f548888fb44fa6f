// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post and comment events
//!
//! Typed view over [`EventEnvelope`]. Decoding is the only place that knows
//! which `type` strings exist and what their payloads look like.

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

use super::envelope::EventEnvelope;
use crate::domain::CommentStatus;

/// A post was published
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCreated {
    pub id: String,
    pub title: String,
}

/// A comment was written on a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentCreated {
    pub id: String,
    pub content: String,
    pub post_id: String,
    pub status: CommentStatus,
}

/// A comment's content or moderation status changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentUpdated {
    pub id: String,
    pub content: String,
    pub post_id: String,
    pub status: CommentStatus,
}

/// Events this service understands, plus a catch-all
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostEvent {
    PostCreated(PostCreated),
    CommentCreated(CommentCreated),
    CommentUpdated(CommentUpdated),
    /// Any other event type on the bus (e.g. `CommentModerated`)
    Unknown { event_type: String },
}

/// Payload of a recognized event type did not match its schema
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed {event_type} payload: {reason}")]
pub struct EventDecodeError {
    pub event_type: String,
    pub reason: String,
}

impl PostEvent {
    pub const POST_CREATED: &'static str = "PostCreated";
    pub const COMMENT_CREATED: &'static str = "CommentCreated";
    pub const COMMENT_UPDATED: &'static str = "CommentUpdated";

    /// Decode an envelope into a typed event
    ///
    /// Unrecognized types are not an error; they decode to
    /// [`PostEvent::Unknown`].
    pub fn decode(envelope: &EventEnvelope) -> Result<Self, EventDecodeError> {
        match envelope.event_type.as_str() {
            Self::POST_CREATED => decode_payload(envelope).map(PostEvent::PostCreated),
            Self::COMMENT_CREATED => decode_payload(envelope).map(PostEvent::CommentCreated),
            Self::COMMENT_UPDATED => decode_payload(envelope).map(PostEvent::CommentUpdated),
            other => Ok(PostEvent::Unknown {
                event_type: other.to_string(),
            }),
        }
    }
}

fn decode_payload<T: DeserializeOwned>(envelope: &EventEnvelope) -> Result<T, EventDecodeError> {
    T::deserialize(&envelope.data).map_err(|e| EventDecodeError {
        event_type: envelope.event_type.clone(),
        reason: e.to_string(),
    })
}
