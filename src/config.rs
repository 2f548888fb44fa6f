// Copyright (c) 2025 - Cowboy AI, Inc.

//! Query service configuration

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use crate::bootstrap::RetryPolicy;
use crate::errors::{QueryError, QueryResult};

/// Query service configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryConfig {
    /// Listen address (e.g., "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Event bus base URL (e.g., "http://event-bus:4005")
    #[serde(default = "default_event_bus_url")]
    pub event_bus_url: String,

    /// Attempts at fetching history before starting empty
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Seconds between history fetch attempts
    #[serde(default = "default_retry_delay_secs")]
    pub retry_delay_secs: u64,

    /// Timeout for one history fetch, in seconds
    #[serde(default = "default_fetch_timeout_secs")]
    pub fetch_timeout_secs: u64,

    /// Browser origins allowed by CORS
    #[serde(default = "default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    4002
}

fn default_event_bus_url() -> String {
    "http://event-bus:4005".to_string()
}

fn default_max_retries() -> u32 {
    5
}

fn default_retry_delay_secs() -> u64 {
    5
}

fn default_fetch_timeout_secs() -> u64 {
    10
}

fn default_cors_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "http://client:3000".to_string(),
    ]
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            event_bus_url: default_event_bus_url(),
            max_retries: default_max_retries(),
            retry_delay_secs: default_retry_delay_secs(),
            fetch_timeout_secs: default_fetch_timeout_secs(),
            cors_allowed_origins: default_cors_allowed_origins(),
        }
    }
}

impl QueryConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> QueryResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    ///
    /// Missing keys fall back to defaults; present but unparseable values are
    /// an error.
    pub fn from_lookup<F>(lookup: F) -> QueryResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let cors_allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => defaults.cors_allowed_origins,
        };

        Ok(Self {
            host: lookup("QUERY_HOST").unwrap_or(defaults.host),
            port: parse_var(&lookup, "QUERY_PORT", defaults.port)?,
            event_bus_url: lookup("EVENT_BUS_URL").unwrap_or(defaults.event_bus_url),
            max_retries: parse_var(&lookup, "BOOTSTRAP_MAX_RETRIES", defaults.max_retries)?,
            retry_delay_secs: parse_var(
                &lookup,
                "BOOTSTRAP_RETRY_DELAY_SECS",
                defaults.retry_delay_secs,
            )?,
            fetch_timeout_secs: parse_var(
                &lookup,
                "BOOTSTRAP_FETCH_TIMEOUT_SECS",
                defaults.fetch_timeout_secs,
            )?,
            cors_allowed_origins,
        })
    }

    /// Socket address string to bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Retry policy for the bootstrap loader
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(self.max_retries, Duration::from_secs(self.retry_delay_secs))
            .with_attempt_timeout(self.fetch_timeout())
    }
}

fn parse_var<F, T>(lookup: &F, key: &str, default: T) -> QueryResult<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e| QueryError::Configuration(format!("{}={:?}: {}", key, raw, e))),
        None => Ok(default),
    }
}
