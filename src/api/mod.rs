//! HTTP API module
//!
//! This module contains all HTTP endpoint handlers and response structures.

pub mod handlers;
pub mod responses;

use std::{path::Path, sync::Arc};
use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    with_layers(routes(), state)
}

/// Create the router and additionally serve `static_dir` under `/static`
pub fn create_router_with_static(state: Arc<AppState>, static_dir: &Path) -> Router {
    with_layers(
        routes().nest_service("/static", ServeDir::new(static_dir)),
        state,
    )
}

fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/start", get(start_handler))
        .route("/reset", get(reset_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
}

fn with_layers(router: Router<Arc<AppState>>, state: Arc<AppState>) -> Router {
    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
