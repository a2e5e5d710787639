//! API route definitions

use axum::{routing::get, Router};

use super::handlers;
use super::AppState;

/// Create all API routes
pub fn create_routes(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))

        // Token inspection
        .route("/get-token-info/:contract_address", get(handlers::get_token_info))
        .route("/get-token-holders/:contract_address", get(handlers::get_token_holders))
        .route("/deepScan/:contract_address", get(handlers::deep_scan))

        // Add state to all routes
        .with_state(state)
}
