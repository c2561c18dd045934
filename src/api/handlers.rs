//! HTTP endpoint handlers

use std::sync::Arc;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tracing::{error, info};

use crate::state::AppState;
use super::responses::{HealthResponse, StatusResponse};

/// Handle GET /start - Start the timer and redirect to the status view
pub async fn start_handler(State(state): State<Arc<AppState>>) -> Result<impl IntoResponse, StatusCode> {
    match state.start_timer().await {
        Ok(_) => {
            info!("Start endpoint called - timer started");
            // Plain 302; axum's Redirect helpers only emit 303/307/308
            Ok((StatusCode::FOUND, [(header::LOCATION, "/status")]))
        }
        Err(e) => {
            error!("Failed to start timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /reset - Stop the timer
pub async fn reset_handler(State(state): State<Arc<AppState>>) -> Result<&'static str, StatusCode> {
    match state.reset_timer().await {
        Ok(_) => {
            info!("Reset endpoint called - timer cleared");
            Ok("reset done")
        }
        Err(e) => {
            error!("Failed to reset timer: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// Handle GET /status - Report every padlock
pub async fn status_handler(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    Json(StatusResponse::from_padlocks(state.padlocks().await))
}

/// Handle GET /health - Health check endpoint
pub async fn health_handler(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse::ok(
        state.get_uptime(),
        state.port,
        state.host.clone(),
    ))
}
