// Copyright (c) 2025 - Cowboy AI, Inc.
//! Comment moderation status
//!
//! The set of statuses is owned by the upstream moderation service. The three
//! known values get their own variants; anything else is carried verbatim so
//! a new upstream status never turns an otherwise valid event into garbage.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Moderation state of a comment
///
/// Serializes as the plain upstream string (`"pending"`, `"approved"`,
/// `"rejected"`, or whatever unknown value was received).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommentStatus {
    /// Awaiting moderation
    Pending,
    /// Accepted by moderation
    Approved,
    /// Refused by moderation
    Rejected,
    /// Status value this service does not know about
    Other(String),
}

impl CommentStatus {
    /// Wire representation of the status
    pub fn as_str(&self) -> &str {
        match self {
            CommentStatus::Pending => "pending",
            CommentStatus::Approved => "approved",
            CommentStatus::Rejected => "rejected",
            CommentStatus::Other(value) => value,
        }
    }
}

impl From<String> for CommentStatus {
    fn from(value: String) -> Self {
        match value.as_str() {
            "pending" => CommentStatus::Pending,
            "approved" => CommentStatus::Approved,
            "rejected" => CommentStatus::Rejected,
            _ => CommentStatus::Other(value),
        }
    }
}

impl From<&str> for CommentStatus {
    fn from(value: &str) -> Self {
        CommentStatus::from(value.to_string())
    }
}

impl From<CommentStatus> for String {
    fn from(status: CommentStatus) -> Self {
        match status {
            CommentStatus::Other(value) => value,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for CommentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
