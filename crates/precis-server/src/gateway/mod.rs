//! HTTP gateway (Axum) for summary scoring.
//!
//! This module is primarily used by the `precis` server binary.

#![allow(missing_docs)]

pub mod adapter;
pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use adapter::GenAiSummarizer;
pub use handler::score_summary_handler;
pub use state::HandlerState;

/// Response header carrying the outcome of every request.
pub const PRECIS_STATUS_HEADER: &str = "x-precis-status";
/// Response header carrying the id assigned to a scored request.
pub const PRECIS_REQUEST_ID_HEADER: &str = "x-precis-request-id";

pub const PRECIS_STATUS_OK: &str = "ok";
pub const PRECIS_STATUS_READY: &str = "ready";
pub const PRECIS_STATUS_SCORED: &str = "scored";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/score/summary", post(score_summary_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
pub struct ComponentStatus {
    pub http: &'static str,
    pub embedder: &'static str,
    pub summarizer: &'static str,
    pub grammar: &'static str,
    pub embedding_dim: usize,
}

fn status_headers(status: &'static str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(PRECIS_STATUS_HEADER, HeaderValue::from_static(status));
    headers
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    (
        StatusCode::OK,
        status_headers(PRECIS_STATUS_OK),
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

/// Collaborators are built before the listener binds, so a running server is ready.
#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let pipeline = &state.pipeline;
    let components = ComponentStatus {
        http: PRECIS_STATUS_READY,
        embedder: pipeline.embedder_mode(),
        summarizer: pipeline.summarizer_mode(),
        grammar: pipeline.grammar_mode(),
        embedding_dim: pipeline.embedding_dim(),
    };

    (
        StatusCode::OK,
        status_headers(PRECIS_STATUS_READY),
        Json(ReadyResponse {
            status: "ok",
            components,
        }),
    )
        .into_response()
}
