// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Projection Replay
//!
//! Histories are generated from a small id pool so that duplicates, replaced
//! posts and references to missing posts all show up regularly.

use posts_query::projection::{fold_events, replay};
use posts_query::EventEnvelope;
use proptest::prelude::*;
use serde_json::json;
use std::collections::{HashMap, HashSet};

// ============================================================================
// Generated Operations
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    CreatePost {
        post: u8,
        title: String,
    },
    CreateComment {
        post: u8,
        comment: u8,
        content: String,
        status: &'static str,
    },
    UpdateComment {
        post: u8,
        comment: u8,
        content: String,
        status: &'static str,
    },
    Unrelated,
}

impl Op {
    fn to_envelope(&self) -> EventEnvelope {
        match self {
            Op::CreatePost { post, title } => EventEnvelope::new(
                "PostCreated",
                json!({ "id": post_id(*post), "title": title }),
            ),
            Op::CreateComment {
                post,
                comment,
                content,
                status,
            } => EventEnvelope::new(
                "CommentCreated",
                json!({
                    "id": comment_id(*comment),
                    "postId": post_id(*post),
                    "content": content,
                    "status": status
                }),
            ),
            Op::UpdateComment {
                post,
                comment,
                content,
                status,
            } => EventEnvelope::new(
                "CommentUpdated",
                json!({
                    "id": comment_id(*comment),
                    "postId": post_id(*post),
                    "content": content,
                    "status": status
                }),
            ),
            Op::Unrelated => EventEnvelope::new("CommentModerated", json!({ "id": "c0" })),
        }
    }
}

fn post_id(n: u8) -> String {
    format!("p{}", n)
}

fn comment_id(n: u8) -> String {
    format!("c{}", n)
}

// ============================================================================
// Property Test Strategies
// ============================================================================

fn status() -> impl Strategy<Value = &'static str> {
    prop_oneof![Just("pending"), Just("approved"), Just("rejected"), Just("flagged")]
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..4, "[a-z]{1,8}").prop_map(|(post, title)| Op::CreatePost { post, title }),
        (0u8..4, 0u8..6, "[a-z ]{0,12}", status()).prop_map(|(post, comment, content, status)| {
            Op::CreateComment {
                post,
                comment,
                content,
                status,
            }
        }),
        (0u8..4, 0u8..6, "[a-z ]{0,12}", status()).prop_map(|(post, comment, content, status)| {
            Op::UpdateComment {
                post,
                comment,
                content,
                status,
            }
        }),
        Just(Op::Unrelated),
    ]
}

/// Arbitrary histories, causal order not guaranteed
fn history() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op(), 0..60)
}

/// Drop every op whose post or comment does not exist yet
fn causal(ops: Vec<Op>) -> Vec<Op> {
    let mut comments: HashMap<u8, HashSet<u8>> = HashMap::new();
    ops.into_iter()
        .filter(|op| match op {
            Op::CreatePost { post, .. } => {
                comments.insert(*post, HashSet::new());
                true
            }
            Op::CreateComment { post, comment, .. } => match comments.get_mut(post) {
                Some(existing) => {
                    existing.insert(*comment);
                    true
                }
                None => false,
            },
            Op::UpdateComment { post, comment, .. } => comments
                .get(post)
                .map_or(false, |existing| existing.contains(comment)),
            Op::Unrelated => false,
        })
        .collect()
}

fn envelopes(ops: &[Op]) -> Vec<EventEnvelope> {
    ops.iter().map(Op::to_envelope).collect()
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Property: Replay is deterministic
    ///
    /// The same history always rebuilds the same projection.
    #[test]
    fn prop_replay_is_deterministic(ops in history()) {
        let events = envelopes(&ops);
        let (first, anomalies1) = replay(&events);
        let (second, anomalies2) = replay(&events);

        prop_assert_eq!(first, second);
        prop_assert_eq!(anomalies1, anomalies2);
    }

    /// Property: No orphan posts
    ///
    /// Every post in the projection was named by a PostCreated event.
    #[test]
    fn prop_no_orphan_posts(ops in history()) {
        let created: HashSet<String> = ops
            .iter()
            .filter_map(|op| match op {
                Op::CreatePost { post, .. } => Some(post_id(*post)),
                _ => None,
            })
            .collect();

        let (posts, _) = replay(envelopes(&ops));

        for post in posts.iter() {
            prop_assert!(created.contains(&post.id), "orphan post {}", post.id);
        }
    }

    /// Property: Unrecognized events are invisible
    #[test]
    fn prop_unknown_events_change_nothing(ops in history()) {
        let known: Vec<Op> = ops.iter().filter(|op| !matches!(op, Op::Unrelated)).cloned().collect();

        let (with_noise, _) = replay(envelopes(&ops));
        let (without_noise, _) = replay(envelopes(&known));

        prop_assert_eq!(with_noise, without_noise);
    }

    /// Property: Folding in two steps equals folding once
    #[test]
    fn prop_fold_composes(ops in history(), split in 0usize..60) {
        let events = envelopes(&ops);
        let split = split.min(events.len());

        let (head, _) = replay(&events[..split]);
        let (composed, _) = fold_events(head, &events[split..]);
        let (whole, _) = replay(&events);

        prop_assert_eq!(composed, whole);
    }

    /// Property: Causally ordered histories apply cleanly
    ///
    /// One post per distinct id with the last title, one comment entry per
    /// CommentCreated since the post's last PostCreated, latest
    /// content/status on the first entry for each comment id.
    #[test]
    fn prop_causal_history_has_no_anomalies(ops in history()) {
        let ops = causal(ops);
        let (posts, anomalies) = replay(envelopes(&ops));

        prop_assert!(anomalies.is_empty(), "anomalies: {:?}", anomalies);

        let mut titles: HashMap<String, String> = HashMap::new();
        let mut comment_counts: HashMap<String, usize> = HashMap::new();
        let mut latest: HashMap<(String, String), (String, String)> = HashMap::new();
        for op in &ops {
            match op {
                Op::CreatePost { post, title } => {
                    titles.insert(post_id(*post), title.clone());
                    comment_counts.insert(post_id(*post), 0);
                    latest.retain(|(p, _), _| *p != post_id(*post));
                }
                Op::CreateComment { post, comment, content, status } => {
                    *comment_counts.entry(post_id(*post)).or_default() += 1;
                    latest
                        .entry((post_id(*post), comment_id(*comment)))
                        .or_insert_with(|| (content.clone(), status.to_string()));
                }
                Op::UpdateComment { post, comment, content, status } => {
                    latest.insert(
                        (post_id(*post), comment_id(*comment)),
                        (content.clone(), status.to_string()),
                    );
                }
                Op::Unrelated => {}
            }
        }

        prop_assert_eq!(posts.len(), titles.len());
        for (id, title) in &titles {
            let post = posts.get(id).unwrap();
            prop_assert_eq!(&post.title, title);
            prop_assert_eq!(post.comments.len(), comment_counts[id]);
        }
        for ((post, comment), (content, status)) in &latest {
            let found = posts.get(post).and_then(|p| p.comment(comment)).unwrap();
            prop_assert_eq!(&found.content, content);
            prop_assert_eq!(found.status.as_str(), status.as_str());
        }
    }
}
