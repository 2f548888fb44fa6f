// Copyright (c) 2025 - Cowboy AI, Inc.

//! Post Projection - Functor F: Events → Posts
//!
//! Folds the post and comment event stream into an in-memory read model.
//!
//! # Functoriality Properties
//!
//! 1. **Identity**: an empty event stream yields an empty projection
//! 2. **Composition**: applying `e1` then `e2` equals folding `[e1, e2]`
//!
//! # Architecture
//!
//! ```text
//! EventStream ────F──────> Posts
//!    │                       │
//!    │ Envelopes             │ Snapshots
//!    ▼                       ▼
//! [e1, e2, e3]  ──>  ProjectionStore ──> readers
//! ```
//!
//! - [`model`] - `Post`, `Comment` and the `Posts` map
//! - [`pure`] - side-effect free application and replay
//! - [`store`] - shared, lock-guarded projection used by the service
//!
//! # Idempotency
//!
//! Re-applying `PostCreated` or `CommentUpdated` leaves the projection as it
//! was. Re-applying `CommentCreated` appends a second comment with the same
//! id; there is no dedup key on comment creation.

pub mod model;
pub mod pure;
pub mod store;

use thiserror::Error;

use crate::events::EventDecodeError;

pub use model::{Comment, Post, Posts};
pub use pure::{apply, apply_envelope, apply_value, fold_events, replay, ApplyOutcome};
pub use store::{ProjectionStore, StoreStats};

/// Reason an event was skipped without changing the projection
///
/// Anomalies are expected under at-least-once, loosely ordered delivery. They
/// are logged and counted, never surfaced to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Anomaly {
    /// Comment event references a post that does not exist
    #[error("post {post_id} not found for comment {comment_id}")]
    UnknownPost { post_id: String, comment_id: String },

    /// Comment update references a comment that does not exist
    #[error("comment {comment_id} not found in post {post_id}")]
    UnknownComment { post_id: String, comment_id: String },

    /// Recognized event type with a payload that does not decode
    #[error("malformed {event_type} payload: {reason}")]
    Malformed { event_type: String, reason: String },

    /// Raw bus event that is not a `{type, data}` object
    #[error("not an event envelope: {reason}")]
    InvalidEnvelope { reason: String },
}

impl From<EventDecodeError> for Anomaly {
    fn from(err: EventDecodeError) -> Self {
        Anomaly::Malformed {
            event_type: err.event_type,
            reason: err.reason,
        }
    }
}
