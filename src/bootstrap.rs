// Copyright (c) 2025 - Cowboy AI, Inc.
//! Bootstrap Replay
//!
//! Rebuilds the projection at startup by replaying the event bus history.
//!
//! # Retry Policy
//!
//! ```text
//! attempt 1 ──fail──> sleep(delay) ──> attempt 2 ──fail──> ... ──> attempt N ──fail──> Exhausted
//!     │                                    │                           │
//!     └──ok──> replay ────────────────────┴───────────────────────────┴──> Replayed
//! ```
//!
//! - Fixed delay between attempts, none after the last one
//! - Every attempt is bounded by `attempt_timeout`; a timeout is a failure
//! - Exhaustion is not fatal: the store is left as it was and live events
//!   keep flowing

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::errors::{QueryError, QueryResult};
use crate::projection::ProjectionStore;
use crate::upstream::EventSource;

/// Bounded, fixed-delay retry policy for fetching history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Total number of fetch attempts, including the first
    pub max_attempts: u32,
    /// Wait between a failed attempt and the next one
    pub delay: Duration,
    /// Upper bound on a single attempt
    pub attempt_timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay: Duration::from_secs(5),
            attempt_timeout: Duration::from_secs(10),
        }
    }
}

impl RetryPolicy {
    /// Policy with the given attempt count and delay, default timeout
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
            ..Self::default()
        }
    }

    /// Set the per-attempt timeout
    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    /// Number of attempts actually made; at least one
    pub fn attempts(&self) -> u32 {
        self.max_attempts.max(1)
    }
}

/// How a bootstrap run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum BootstrapOutcome {
    /// History fetched on attempt `attempts`; `events` were handed to the
    /// store, skipped ones included
    Replayed { attempts: u32, events: usize },
    /// Every attempt failed; nothing was applied
    Exhausted { attempts: u32 },
}

impl BootstrapOutcome {
    /// Attempts made, including the successful one
    pub fn attempts(&self) -> u32 {
        match self {
            BootstrapOutcome::Replayed { attempts, .. } => *attempts,
            BootstrapOutcome::Exhausted { attempts } => *attempts,
        }
    }

    /// Number of retry delays that elapsed
    pub fn retries(&self) -> u32 {
        self.attempts().saturating_sub(1)
    }

    pub fn is_replayed(&self) -> bool {
        matches!(self, BootstrapOutcome::Replayed { .. })
    }
}

/// Fetches the event history with retries and replays it into a store
pub struct BootstrapLoader<S: EventSource> {
    source: S,
    policy: RetryPolicy,
}

impl<S: EventSource> BootstrapLoader<S> {
    pub fn new(source: S, policy: RetryPolicy) -> Self {
        Self { source, policy }
    }

    /// Fetch the history and apply it, in order, to `store`
    ///
    /// Events go through [`ProjectionStore::apply`] one by one, the same entry
    /// point live ingestion uses, so a bad event in the history is skipped
    /// and the rest are still applied. Readers may observe the projection
    /// while it is being rebuilt.
    pub async fn run(&self, store: &ProjectionStore) -> BootstrapOutcome {
        match self.fetch_with_retry().await {
            Ok((events, attempts)) => {
                info!(
                    "Replaying {} events from {} (attempt {})",
                    events.len(),
                    self.source.name(),
                    attempts
                );
                let count = events.len();
                for event in events {
                    store.apply(event).await;
                }
                info!("Bootstrap replay complete: {:?}", store.stats());
                BootstrapOutcome::Replayed {
                    attempts,
                    events: count,
                }
            }
            Err(attempts) => {
                error!(
                    "Failed to fetch events from {} after {} attempts. Starting with empty state.",
                    self.source.name(),
                    attempts
                );
                BootstrapOutcome::Exhausted { attempts }
            }
        }
    }

    /// Fetch the history, retrying per policy
    ///
    /// Returns the events and the attempt that produced them, or the number of
    /// failed attempts.
    pub async fn fetch_with_retry(&self) -> Result<(Vec<Value>, u32), u32> {
        let max_attempts = self.policy.attempts();

        for attempt in 1..=max_attempts {
            info!(
                "Fetching events from {} (attempt {}/{})",
                self.source.name(),
                attempt,
                max_attempts
            );

            match self.fetch_once().await {
                Ok(events) => return Ok((events, attempt)),
                Err(e) => {
                    warn!(
                        "Failed to fetch events (attempt {}/{}): {}",
                        attempt, max_attempts, e
                    );
                    if attempt < max_attempts {
                        info!("Waiting {:?} before retrying", self.policy.delay);
                        tokio::time::sleep(self.policy.delay).await;
                    }
                }
            }
        }

        Err(max_attempts)
    }

    async fn fetch_once(&self) -> QueryResult<Vec<Value>> {
        tokio::time::timeout(self.policy.attempt_timeout, self.source.fetch_events())
            .await
            .map_err(|_| {
                QueryError::Timeout(format!(
                    "fetch from {} exceeded {:?}",
                    self.source.name(),
                    self.policy.attempt_timeout
                ))
            })?
    }
}
