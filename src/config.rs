use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Fallback used when HELIUS_API_KEY is not configured. Requests signed
/// with it are rejected upstream, so the service still needs a real key
/// from the environment to do useful work.
const PLACEHOLDER_API_KEY: &str = "your-helius-api-key";

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Config {
    pub helius_api_key: String,
    pub api_host: String,
    pub api_port: u16,
}

impl Config {
    pub fn load() -> Result<Self> {
        let helius_api_key = match env::var("HELIUS_API_KEY") {
            Ok(key) if !key.is_empty() => key,
            _ => {
                warn!("HELIUS_API_KEY not set, falling back to placeholder key");
                PLACEHOLDER_API_KEY.to_string()
            }
        };

        Ok(Self {
            helius_api_key,
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap_or(3000),
        })
    }
}
