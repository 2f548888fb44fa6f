// Copyright (c) 2025 - Cowboy AI, Inc.
//! Post Domain Events
//!
//! Events are immutable facts published by the posts and comments services
//! and relayed by the event bus. This service only consumes them.
//!
//! # Event Flow
//!
//! ```text
//! posts / comments services → event bus → EventEnvelope → PostEvent → Projection
//!                                  │
//!                                  └─ GET /events (history, replayed at startup)
//! ```
//!
//! # Module Organization
//!
//! - [`envelope`] - untyped `{type, data}` wire envelope
//! - [`post`] - typed post and comment events

pub mod envelope;
pub mod post;

// Re-export commonly used types
pub use envelope::EventEnvelope;
pub use post::{CommentCreated, CommentUpdated, EventDecodeError, PostCreated, PostEvent};
