//! Client HTTP Routes
//!
//! `GET /clients` lists every record in store order. `POST /clients`
//! validates the name and appends through the store.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use super::errors::{ApiError, ApiResult};
use crate::clients::{ClientRecord, CreateClientRequest};
use crate::store::ClientStore;

const LIST_FAILED: &str = "Failed to load clients";
const CREATE_FAILED: &str = "Failed to create client";

// ==================
// Shared State
// ==================

/// Client state shared across handlers
pub struct ClientState {
    pub store: Arc<dyn ClientStore>,
}

impl ClientState {
    pub fn new(store: Arc<dyn ClientStore>) -> Self {
        Self { store }
    }
}

// ==================
// Client Routes
// ==================

/// Create client routes
pub fn client_routes(state: Arc<ClientState>) -> Router {
    Router::new()
        .route("/clients", get(list_clients_handler).post(create_client_handler))
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_clients_handler(
    State(state): State<Arc<ClientState>>,
) -> ApiResult<Json<Vec<ClientRecord>>> {
    let clients = state.store.list().await.map_err(ApiError::store(LIST_FAILED))?;
    Ok(Json(clients))
}

async fn create_client_handler(
    State(state): State<Arc<ClientState>>,
    payload: Result<Json<CreateClientRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<ClientRecord>)> {
    let Json(request) = payload
        .map_err(|rejection| ApiError::validation(format!("Invalid request body: {}", rejection.body_text())))?;

    let input = request.validate().map_err(ApiError::validation)?;

    let created = state
        .store
        .append(input)
        .await
        .map_err(ApiError::store(CREATE_FAILED))?;

    tracing::info!(id = created.id, store = state.store.kind(), "client created");
    Ok((StatusCode::CREATED, Json(created)))
}
