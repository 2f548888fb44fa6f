// Copyright (c) 2025 - Cowboy AI, Inc.
//! Domain value objects shared by events and the projection
//!
//! - [`CommentStatus`] - moderation state of a comment, open-ended

pub mod comment_status;

pub use comment_status::CommentStatus;
