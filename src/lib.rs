// Copyright (c) 2025 - Cowboy AI, Inc.
//! Query-side read model for posts and comments
//!
//! Consumes post and comment events from the event bus and maintains an
//! in-memory projection that readers can fetch at any time.
//!
//! - [`bootstrap`] replays the event bus history at startup, with retries
//! - [`projection`] applies events and guards the shared projection
//! - [`service`] is the ingest/read surface the HTTP layer calls into
//!
//! The projection is rebuilt from nothing on every start; nothing is persisted.

pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod errors;
pub mod events;
pub mod http;
pub mod projection;
pub mod service;
pub mod upstream;

// Re-export commonly used types
pub use bootstrap::{BootstrapLoader, BootstrapOutcome, RetryPolicy};
pub use config::QueryConfig;
pub use errors::{QueryError, QueryResult};
pub use events::{EventEnvelope, PostEvent};
pub use projection::{Anomaly, ApplyOutcome, Comment, Post, Posts, ProjectionStore};
pub use service::QueryService;
pub use upstream::{EventSource, HttpEventSource};
