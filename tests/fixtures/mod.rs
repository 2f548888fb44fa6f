// Copyright (c) 2025 - Cowboy AI, Inc.
//! Test Fixtures for posts-query
//!
//! Deterministic envelopes in the exact wire shape the event bus emits.
//! Tests build events through these helpers, never by hand-written JSON.
#![allow(dead_code)]

use posts_query::EventEnvelope;
use serde_json::{json, Value};

pub const POST_ID_1: &str = "p1";
pub const POST_ID_2: &str = "p2";
pub const GHOST_POST_ID: &str = "ghost";

pub fn post_created(id: &str, title: &str) -> EventEnvelope {
    EventEnvelope::new("PostCreated", json!({ "id": id, "title": title }))
}

pub fn comment_created(id: &str, post_id: &str, content: &str, status: &str) -> EventEnvelope {
    EventEnvelope::new(
        "CommentCreated",
        json!({ "id": id, "postId": post_id, "content": content, "status": status }),
    )
}

pub fn comment_updated(id: &str, post_id: &str, content: &str, status: &str) -> EventEnvelope {
    EventEnvelope::new(
        "CommentUpdated",
        json!({ "id": id, "postId": post_id, "content": content, "status": status }),
    )
}

/// Event type emitted by the moderation service that this projection skips
pub fn comment_moderated(id: &str, post_id: &str, status: &str) -> EventEnvelope {
    EventEnvelope::new(
        "CommentModerated",
        json!({ "id": id, "postId": post_id, "status": status }),
    )
}

/// The Hello / nice / nice! history
pub fn hello_history() -> Vec<EventEnvelope> {
    vec![
        post_created(POST_ID_1, "Hello"),
        comment_created("c1", POST_ID_1, "nice", "pending"),
        comment_updated("c1", POST_ID_1, "nice!", "approved"),
    ]
}

/// Expected `/posts` body after [`hello_history`]
pub fn hello_projection_json() -> serde_json::Value {
    json!({
        "p1": {
            "id": "p1",
            "title": "Hello",
            "comments": [{ "id": "c1", "content": "nice!", "status": "approved" }]
        }
    })
}

/// A longer history with two posts, moderation noise and a late comment
pub fn mixed_history() -> Vec<EventEnvelope> {
    vec![
        post_created(POST_ID_1, "Hello"),
        post_created(POST_ID_2, "Second"),
        comment_created("c1", POST_ID_1, "first!", "pending"),
        comment_moderated("c1", POST_ID_1, "approved"),
        comment_updated("c1", POST_ID_1, "first!", "approved"),
        comment_created("c2", POST_ID_2, "orange", "pending"),
        comment_moderated("c2", POST_ID_2, "rejected"),
        comment_updated("c2", POST_ID_2, "orange", "rejected"),
        comment_created("c3", POST_ID_1, "second", "pending"),
    ]
}

/// Envelopes as the raw JSON values the event bus sends
pub fn raw(events: Vec<EventEnvelope>) -> Vec<Value> {
    events.into_iter().map(Value::from).collect()
}

/// [`hello_history`] with bad entries mixed in
///
/// Replaying it gives [`hello_projection_json`]: 3 applied, 2 ignored
/// (`null` and numeric type), 2 anomalies (bare number, malformed payload).
pub fn poisoned_history() -> Vec<Value> {
    vec![
        post_created(POST_ID_1, "Hello").into(),
        json!({ "type": null, "data": {} }),
        comment_created("c1", POST_ID_1, "nice", "pending").into(),
        json!(42),
        json!({ "type": 7, "data": { "id": "p9", "title": "numeric type" } }),
        json!({ "type": "CommentCreated", "data": { "postId": POST_ID_1 } }),
        comment_updated("c1", POST_ID_1, "nice!", "approved").into(),
    ]
}
