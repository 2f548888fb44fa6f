// Copyright (c) 2025 - Cowboy AI, Inc.
//! HTTP Surface
//!
//! Thin axum adapter over [`QueryService`]:
//!
//! ```text
//! GET  /posts   → { "<postId>": { id, title, comments: [...] } }
//! POST /events  ← { type, data }   → {}
//! GET  /health  → { status, warm, posts, comments, applied, ignored, anomalies }
//! ```
//!
//! `POST /events` acknowledges every JSON body, envelope or not. Only a body
//! that does not parse as JSON gets the generic 500.

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderValue, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::errors::{QueryError, QueryResult};
use crate::projection::Posts;
use crate::service::{HealthReport, QueryService};

/// Build the router for `service`
///
/// Origins that are not valid header values are logged and left out.
pub fn router(service: QueryService, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/posts", get(list_posts))
        .route("/events", post(receive_event))
        .route("/health", get(health))
        .with_state(service)
        .layer(cors_layer(allowed_origins))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %request.uri().path(),
                )
            }),
        )
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                warn!("Ignoring invalid CORS origin {:?}: {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

/// Bind the listener the router will be served on
pub async fn bind(addr: &str) -> QueryResult<TcpListener> {
    TcpListener::bind(addr).await.map_err(|e| QueryError::Bind {
        addr: addr.to_string(),
        reason: e.to_string(),
    })
}

async fn list_posts(State(service): State<QueryService>) -> Json<Arc<Posts>> {
    Json(service.read().await)
}

async fn receive_event(State(service): State<QueryService>, body: Bytes) -> QueryResult<Json<Value>> {
    let event: Value = serde_json::from_slice(&body)?;
    service.ingest(event).await;
    Ok(Json(json!({})))
}

async fn health(State(service): State<QueryService>) -> Json<HealthReport> {
    Json(service.health().await)
}
