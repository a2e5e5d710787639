use anyhow::Result;
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

mod analysis;
mod api;
mod config;
mod error;
mod models;
mod web;

use crate::api::helius::HeliusClient;
use crate::config::Config;
use crate::web::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Load environment variables
    dotenv().ok();

    let config = Arc::new(Config::load()?);
    info!("Configuration loaded successfully");

    let helius_client = Arc::new(HeliusClient::new(&config.helius_api_key));
    info!("Helius client initialized");

    let state = AppState::new(helius_client, config);

    web::server::start_server(state).await
}
