// Copyright (c) 2025 - Cowboy AI, Inc.
//! Query Service
//!
//! Entry points the transport layer calls into:
//! - [`QueryService::ingest`] for events pushed by the event bus
//! - [`QueryService::read`] for the current projection
//! - [`QueryService::bootstrap`] once at startup

use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::bootstrap::{BootstrapLoader, BootstrapOutcome};
use crate::projection::{ApplyOutcome, Posts, ProjectionStore, StoreStats};
use crate::upstream::EventSource;

/// Service health as reported on `/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: &'static str,
    /// Bootstrap replay has finished, successfully or not
    pub warm: bool,
    pub posts: usize,
    pub comments: usize,
    #[serde(flatten)]
    pub stats: StoreStats,
}

/// Live ingest and read surface over one [`ProjectionStore`]
#[derive(Debug, Clone)]
pub struct QueryService {
    store: ProjectionStore,
    warm: Arc<AtomicBool>,
}

impl QueryService {
    pub fn new(store: ProjectionStore) -> Self {
        Self {
            store,
            warm: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Apply a pushed event
    ///
    /// Takes any JSON value the bus sent. Never fails: unknown, malformed and
    /// non-envelope events are skipped by the store.
    pub async fn ingest(&self, event: impl Into<Value>) -> ApplyOutcome {
        let event = event.into();
        debug!("Received event: {}", event.get("type").unwrap_or(&serde_json::Value::Null));
        self.store.apply(event).await
    }

    /// All posts, unfiltered
    pub async fn read(&self) -> Arc<Posts> {
        self.store.snapshot().await
    }

    /// Run the bootstrap replay and mark the service warm afterwards
    pub async fn bootstrap<S: EventSource>(&self, loader: &BootstrapLoader<S>) -> BootstrapOutcome {
        let outcome = loader.run(&self.store).await;
        self.warm.store(true, Ordering::Release);
        info!("Query service warm: {:?}", outcome);
        outcome
    }

    pub fn is_warm(&self) -> bool {
        self.warm.load(Ordering::Acquire)
    }

    pub async fn health(&self) -> HealthReport {
        let posts = self.read().await;
        HealthReport {
            status: "ok",
            warm: self.is_warm(),
            posts: posts.len(),
            comments: posts.iter().map(|post| post.comments.len()).sum(),
            stats: self.store.stats(),
        }
    }
}

impl Default for QueryService {
    fn default() -> Self {
        Self::new(ProjectionStore::new())
    }
}
