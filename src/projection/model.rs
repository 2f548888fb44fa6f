// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read model for posts and their comments

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::Anomaly;
use crate::domain::CommentStatus;

/// A comment as served to readers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    pub content: String,
    pub status: CommentStatus,
}

/// A post with its comments in arrival order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub comments: Vec<Comment>,
}

impl Post {
    /// Create a post with no comments
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            comments: Vec::new(),
        }
    }

    /// First comment with the given id
    pub fn comment(&self, comment_id: &str) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == comment_id)
    }

    fn comment_mut(&mut self, comment_id: &str) -> Option<&mut Comment> {
        self.comments.iter_mut().find(|c| c.id == comment_id)
    }
}

/// All posts keyed by post id
///
/// Serializes as a plain JSON object `{ "<postId>": Post }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Posts {
    posts: BTreeMap<String, Post>,
}

impl Posts {
    /// Create an empty projection
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a post, replacing any existing post with the same id
    ///
    /// The replacement starts with no comments.
    pub fn upsert_post(&mut self, id: &str, title: &str) {
        self.posts.insert(id.to_string(), Post::new(id, title));
    }

    /// Append a comment to the end of a post's comment list
    pub fn append_comment(&mut self, post_id: &str, comment: Comment) -> Result<(), Anomaly> {
        let post = self.posts.get_mut(post_id).ok_or_else(|| Anomaly::UnknownPost {
            post_id: post_id.to_string(),
            comment_id: comment.id.clone(),
        })?;
        post.comments.push(comment);
        Ok(())
    }

    /// Overwrite content and status of an existing comment
    pub fn update_comment(
        &mut self,
        post_id: &str,
        comment_id: &str,
        content: &str,
        status: &CommentStatus,
    ) -> Result<(), Anomaly> {
        let post = self.posts.get_mut(post_id).ok_or_else(|| Anomaly::UnknownPost {
            post_id: post_id.to_string(),
            comment_id: comment_id.to_string(),
        })?;
        let comment = post
            .comment_mut(comment_id)
            .ok_or_else(|| Anomaly::UnknownComment {
                post_id: post_id.to_string(),
                comment_id: comment_id.to_string(),
            })?;
        comment.content = content.to_string();
        comment.status = status.clone();
        Ok(())
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.get(post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Posts ordered by id
    pub fn iter(&self) -> impl Iterator<Item = &Post> {
        self.posts.values()
    }
}
