//! Health HTTP Routes

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use super::client_routes::ClientState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub store: String,
}

/// Health check route
pub fn health_routes(state: Arc<ClientState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Reports liveness and which store backs the API. Does not touch the store.
async fn health_handler(State(state): State<Arc<ClientState>>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        store: state.store.kind().to_string(),
    };

    (StatusCode::OK, Json(response))
}
