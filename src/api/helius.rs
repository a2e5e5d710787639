use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, error};

use crate::error::MintwatchError;

const HELIUS_RPC_URL: &str = "https://mainnet.helius-rpc.com";

/// SPL token program, the owner passed to getTokenAccountsByOwner.
pub const TOKEN_PROGRAM_ID: &str = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Clone)]
pub struct HeliusClient {
    api_key: String,
    base_url: String,
    client: Client,
}

/// JSON-RPC request wrapper for the Helius API
#[derive(Debug, Serialize)]
struct JsonRpcRequest<T> {
    jsonrpc: &'static str,
    id: &'static str,
    method: &'static str,
    params: T,
}

#[derive(Debug, Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[derive(Debug, Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}

impl HeliusClient {
    pub fn new(api_key: &str) -> Self {
        Self::with_base_url(api_key, HELIUS_RPC_URL)
    }

    /// Point the client at a different endpoint, used by tests.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("Failed to create HTTP client"),
        }
    }

    /// Send a single JSON-RPC call and return its `result` field.
    ///
    /// `Ok(None)` means the upstream answered without a result; callers
    /// decide whether that is "not found" or an empty data set.
    pub async fn call_rpc(
        &self,
        method: &'static str,
        params: Value,
    ) -> Result<Option<Value>, MintwatchError> {
        let url = format!("{}/?api-key={}", self.base_url, self.api_key);

        let rpc_request = JsonRpcRequest {
            jsonrpc: "2.0",
            id: "mintwatch",
            method,
            params,
        };

        debug!("Sending {} request to Helius", method);

        let response = self
            .client
            .post(&url)
            .json(&rpc_request)
            .send()
            .await
            .map_err(|e| MintwatchError::Network(format!("Failed to reach Helius: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Helius API error: {} - {}", status, error_text);
            return Err(MintwatchError::Network(format!(
                "Helius returned HTTP {}: {}",
                status, error_text
            )));
        }

        let envelope: JsonRpcResponse = response.json().await.map_err(|e| {
            MintwatchError::Network(format!("Failed to parse Helius response: {}", e))
        })?;

        if let Some(err) = envelope.error {
            error!("Helius RPC error {}: {}", err.code, err.message);
            return Err(MintwatchError::Upstream(err.message));
        }

        // A null result is "not found", not a transport failure.
        Ok(envelope.result.filter(|v| !v.is_null()))
    }

    /// Fetch DAS metadata for a mint.
    pub async fn get_asset(&self, mint: &str) -> Result<Option<Value>, MintwatchError> {
        self.call_rpc("getAsset", json!({ "id": mint })).await
    }

    /// List the token accounts holding a mint.
    pub async fn get_token_accounts(&self, mint: &str) -> Result<Option<Value>, MintwatchError> {
        self.call_rpc(
            "getTokenAccountsByOwner",
            json!([
                mint,
                { "programId": TOKEN_PROGRAM_ID },
                { "encoding": "jsonParsed" }
            ]),
        )
        .await
    }

    /// Fetch the raw program accounts for an address.
    pub async fn get_program_accounts(
        &self,
        address: &str,
    ) -> Result<Option<Value>, MintwatchError> {
        self.call_rpc(
            "getProgramAccounts",
            json!([address, { "encoding": "jsonParsed" }]),
        )
        .await
    }
}
