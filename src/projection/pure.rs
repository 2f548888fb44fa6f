// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pure Event Application
//!
//! Applying an event is a plain function over [`Posts`]:
//! - `apply(&mut Posts, &PostEvent) → ApplyOutcome`
//! - anomalies are returned as data, never logged or raised here
//! - replay is a fold of `apply` over the event history
//!
//! # Architecture
//!
//! ```text
//! JSON value ──read──> EventEnvelope ──decode──> PostEvent ──apply──> Posts
//!     │                      │                      │                 │
//!     ▼                      ▼                      ▼                 ▼
//! InvalidEnvelope        Malformed             Unknown type       UnknownPost /
//!   (Anomaly)            (Anomaly)             (Ignored)          UnknownComment
//! ```
//!
//! The bootstrap replay and live ingestion both go through [`apply_value`],
//! which hands every readable envelope to [`apply_envelope`], so the same
//! history yields the same projection no matter which path delivered it.

use serde_json::Value;
use std::borrow::Borrow;

use super::model::{Comment, Posts};
use super::Anomaly;
use crate::events::{EventEnvelope, PostEvent};

/// Result of applying one event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Projection changed
    Applied,
    /// Event type is not handled by this projection; nothing changed
    Ignored { event_type: String },
    /// Event was skipped; nothing changed
    Anomaly(Anomaly),
}

impl ApplyOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, ApplyOutcome::Applied)
    }

    pub fn anomaly(&self) -> Option<&Anomaly> {
        match self {
            ApplyOutcome::Anomaly(anomaly) => Some(anomaly),
            _ => None,
        }
    }
}

/// Apply a typed event to the projection
///
/// `PostCreated` for an existing id replaces the post (comments included).
/// `CommentCreated` always appends, so a redelivered comment shows up twice.
/// `CommentUpdated` touches the first comment carrying that id.
pub fn apply(posts: &mut Posts, event: &PostEvent) -> ApplyOutcome {
    let result = match event {
        PostEvent::PostCreated(e) => {
            posts.upsert_post(&e.id, &e.title);
            Ok(())
        }
        PostEvent::CommentCreated(e) => posts.append_comment(
            &e.post_id,
            Comment {
                id: e.id.clone(),
                content: e.content.clone(),
                status: e.status.clone(),
            },
        ),
        PostEvent::CommentUpdated(e) => {
            posts.update_comment(&e.post_id, &e.id, &e.content, &e.status)
        }
        PostEvent::Unknown { event_type } => {
            return ApplyOutcome::Ignored {
                event_type: event_type.clone(),
            }
        }
    };

    match result {
        Ok(()) => ApplyOutcome::Applied,
        Err(anomaly) => ApplyOutcome::Anomaly(anomaly),
    }
}

/// Decode and apply a wire envelope
pub fn apply_envelope(posts: &mut Posts, envelope: &EventEnvelope) -> ApplyOutcome {
    match PostEvent::decode(envelope) {
        Ok(event) => apply(posts, &event),
        Err(err) => ApplyOutcome::Anomaly(err.into()),
    }
}

/// Read, decode and apply one raw bus event
///
/// A value that is not an envelope at all is an anomaly like any other bad
/// event; it never stops the caller from applying the next one.
pub fn apply_value(posts: &mut Posts, value: Value) -> ApplyOutcome {
    match EventEnvelope::from_value(value) {
        Ok(envelope) => apply_envelope(posts, &envelope),
        Err(err) => ApplyOutcome::Anomaly(Anomaly::InvalidEnvelope {
            reason: err.to_string(),
        }),
    }
}

/// Fold a sequence of envelopes into a projection
///
/// Returns the final projection and every anomaly hit on the way, in order.
pub fn fold_events<I, E>(initial: Posts, events: I) -> (Posts, Vec<Anomaly>)
where
    I: IntoIterator<Item = E>,
    E: Borrow<EventEnvelope>,
{
    events
        .into_iter()
        .fold((initial, Vec::new()), |(mut posts, mut anomalies), envelope| {
            if let ApplyOutcome::Anomaly(anomaly) = apply_envelope(&mut posts, envelope.borrow()) {
                anomalies.push(anomaly);
            }
            (posts, anomalies)
        })
}

/// Rebuild a projection from nothing
pub fn replay<I, E>(events: I) -> (Posts, Vec<Anomaly>)
where
    I: IntoIterator<Item = E>,
    E: Borrow<EventEnvelope>,
{
    fold_events(Posts::new(), events)
}
