// Copyright (c) 2025 - Cowboy AI, Inc.
//! Shared Projection Store
//!
//! Owns the live [`Posts`] projection for the lifetime of the process and
//! serializes every mutation behind one lock.
//!
//! # Concurrency
//!
//! The projection lives in an `Arc<Posts>` behind a `tokio::sync::RwLock`.
//! Writers apply one event at a time under the write lock with
//! `Arc::make_mut`; readers clone the `Arc` under the read lock. A snapshot is
//! therefore immutable and always reflects a whole number of applied events,
//! and a writer only copies the map when a reader still holds the previous
//! snapshot.

use serde::Serialize;
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::model::Posts;
use super::pure::{self, ApplyOutcome};

/// Running totals of apply outcomes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub applied: u64,
    pub ignored: u64,
    pub anomalies: u64,
}

#[derive(Debug, Default)]
struct Counters {
    applied: AtomicU64,
    ignored: AtomicU64,
    anomalies: AtomicU64,
}

/// Cloneable handle to the process-wide projection
#[derive(Debug, Clone, Default)]
pub struct ProjectionStore {
    posts: Arc<RwLock<Arc<Posts>>>,
    counters: Arc<Counters>,
}

impl ProjectionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one raw bus event and log what happened to it
    ///
    /// Accepts anything that converts into a JSON value, so both raw bus
    /// events and typed [`EventEnvelope`](crate::events::EventEnvelope)s go
    /// through [`pure::apply_value`]. The change is visible to
    /// [`ProjectionStore::snapshot`] once this returns. Anomalies are logged
    /// and counted, never propagated.
    pub async fn apply(&self, event: impl Into<Value>) -> ApplyOutcome {
        let event = event.into();
        let outcome = {
            let mut guard = self.posts.write().await;
            pure::apply_value(Arc::make_mut(&mut guard), event)
        };

        self.record(&outcome);
        outcome
    }

    /// Current projection as an immutable view
    pub async fn snapshot(&self) -> Arc<Posts> {
        Arc::clone(&*self.posts.read().await)
    }

    pub fn stats(&self) -> StoreStats {
        StoreStats {
            applied: self.counters.applied.load(Ordering::Relaxed),
            ignored: self.counters.ignored.load(Ordering::Relaxed),
            anomalies: self.counters.anomalies.load(Ordering::Relaxed),
        }
    }

    fn record(&self, outcome: &ApplyOutcome) {
        match outcome {
            ApplyOutcome::Applied => {
                self.counters.applied.fetch_add(1, Ordering::Relaxed);
            }
            ApplyOutcome::Ignored { event_type } => {
                self.counters.ignored.fetch_add(1, Ordering::Relaxed);
                debug!("Ignoring unhandled event type: {:?}", event_type);
            }
            ApplyOutcome::Anomaly(anomaly) => {
                self.counters.anomalies.fetch_add(1, Ordering::Relaxed);
                warn!("Skipping event: {}", anomaly);
            }
        }
    }
}
