// Copyright (c) 2025 - Cowboy AI, Inc.
//! Upstream Event Log
//!
//! The event bus keeps every event it has relayed and hands the full, ordered
//! history out on request. The bootstrap loader reads it through
//! [`EventSource`] so retry behaviour can be exercised against fakes.

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::QueryResult;

pub mod http;

pub use http::HttpEventSource;

/// Source of the historical event list
#[async_trait]
pub trait EventSource: Send + Sync {
    /// Fetch the complete event history, oldest first
    ///
    /// A single call is one attempt; retrying is the caller's concern.
    /// Elements are returned as raw JSON: a list holding one unreadable
    /// event is still a successful fetch, and that event is skipped when it
    /// is applied.
    async fn fetch_events(&self) -> QueryResult<Vec<Value>>;

    /// Get the name of this source for logging
    fn name(&self) -> &str;
}
