//! Web API module for mintwatch
//!
//! This module provides the REST surface over the Helius gateway and the
//! analysis helpers: three token-inspection endpoints plus a health check.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;

use std::sync::Arc;

use crate::api::helius::HeliusClient;
use crate::config::Config;

/// Shared application state for all API handlers
#[derive(Clone)]
pub struct AppState {
    /// Gateway to the Helius JSON-RPC API
    pub helius_client: Arc<HeliusClient>,
    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(helius_client: Arc<HeliusClient>, config: Arc<Config>) -> Self {
        Self {
            helius_client,
            config,
        }
    }
}
