//! API Routes
//!
//! This module organizes all HTTP endpoints for the application:
//! - `/api/upload` - File upload and text extraction
//! - `/api/theme` - Theme detection
//! - `/api/narrate` - Storytelling-style summary
//! - `/api/query` - Multi-document question answering
//! - `/api/models` - Available generation models
//! - `/api/health` - Health checks

pub mod health;
pub mod models;
pub mod narrate;
pub mod query;
pub mod theme;
pub mod upload;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};

use crate::middleware::cors_layer;
use crate::models::AppState;

/// Create the main application router
///
/// All routes live under `/api/`. CORS is restricted to the configured
/// front-end origin and every request/response pair is traced. Request
/// bodies are not size-capped: scanned-PDF uploads routinely exceed the
/// 2 MB default that buffering extractors would otherwise apply.
pub fn create_router(state: AppState) -> Router {
    info!("Creating application router");

    let cors = cors_layer(&state.config.server);
    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .merge(upload::router(state.clone()))
        .merge(theme::router(state.clone()))
        .merge(narrate::router(state.clone()))
        .merge(query::router(state.clone()))
        .merge(models::router(state))
        .merge(health::router())
        .layer(DefaultBodyLimit::disable())
        .layer(trace)
        .layer(cors)
}
