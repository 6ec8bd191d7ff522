//! # Client API HTTP Server
//!
//! Combines the endpoint routers into one Axum server.
//!
//! # Endpoints
//!
//! - `GET /health` - Liveness and store kind
//! - `GET /clients` - All client records in store order
//! - `POST /clients` - Create a client (`name` required)

pub mod client_routes;
pub mod config;
pub mod errors;
pub mod health_routes;
pub mod server;

pub use client_routes::ClientState;
pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::HttpServer;
