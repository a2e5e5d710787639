use thiserror::Error;

#[derive(Debug, Error)]
pub enum MintwatchError {
    #[error("Helius RPC error: {0}")]
    Upstream(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Token not found: {0}")]
    NotFound(String),
}
