// Copyright (c) 2025 - Cowboy AI, Inc.

//! HTTP Event Source
//!
//! Reads the event history from the event bus REST API:
//!
//! ```text
//! GET {base_url}/events  →  [{ "type": "...", "data": { ... } }, ...]
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

use super::EventSource;
use crate::errors::{QueryError, QueryResult};

/// Event bus client
#[derive(Debug, Clone)]
pub struct HttpEventSource {
    client: Client,
    events_url: String,
}

impl HttpEventSource {
    /// Create a client for the event bus at `base_url`
    ///
    /// `timeout` bounds every request made by this client.
    pub fn new(base_url: &str, timeout: Duration) -> QueryResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Configuration(format!("Invalid HTTP client: {}", e)))?;

        Ok(Self {
            client,
            events_url: format!("{}/events", base_url.trim_end_matches('/')),
        })
    }

    /// Full URL of the history endpoint
    pub fn events_url(&self) -> &str {
        &self.events_url
    }
}

#[async_trait]
impl EventSource for HttpEventSource {
    async fn fetch_events(&self) -> QueryResult<Vec<Value>> {
        debug!("GET {}", self.events_url);

        let events = self
            .client
            .get(&self.events_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<Value>>()
            .await?;

        debug!("Fetched {} events from {}", events.len(), self.events_url);
        Ok(events)
    }

    fn name(&self) -> &str {
        "event-bus"
    }
}
