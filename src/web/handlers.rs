//! Request handlers for all API endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::Value;
use tracing::{error, info};

use super::models::{ErrorResponse, HealthResponse};
use super::AppState;
use crate::analysis::{holders, scanner, token_info};
use crate::error::MintwatchError;
use crate::models::scan::ScanResult;
use crate::models::token::{HoldersResult, TokenInfo};

// ============================================================================
// Health Check
// ============================================================================

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
    })
}

// ============================================================================
// Token Info
// ============================================================================

pub async fn get_token_info(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
) -> Result<Json<TokenInfo>, (StatusCode, Json<ErrorResponse>)> {
    info!("Fetching token info for {}", contract_address);

    let result = state
        .helius_client
        .get_asset(&contract_address)
        .await
        .map_err(error_response)?;

    let Some(raw) = result else {
        return Err(error_response(MintwatchError::NotFound(contract_address)));
    };

    Ok(Json(token_info::format_token_info(&contract_address, &raw)))
}

// ============================================================================
// Token Holders
// ============================================================================

pub async fn get_token_holders(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
) -> Result<Json<HoldersResult>, (StatusCode, Json<ErrorResponse>)> {
    info!("Counting holders for {}", contract_address);

    let result = state
        .helius_client
        .get_token_accounts(&contract_address)
        .await
        .map_err(error_response)?;

    // An absent holder list counts as zero, never a 404.
    Ok(Json(HoldersResult {
        contract: contract_address,
        holders_count: holders::count_holders(result.as_ref()),
    }))
}

// ============================================================================
// Deep Scan
// ============================================================================

pub async fn deep_scan(
    State(state): State<AppState>,
    Path(contract_address): Path<String>,
) -> Result<Json<ScanResult>, (StatusCode, Json<ErrorResponse>)> {
    info!("Running security scan for {}", contract_address);

    let result = state
        .helius_client
        .get_program_accounts(&contract_address)
        .await
        .map_err(error_response)?;

    let raw = result.unwrap_or(Value::Null);
    let findings = scanner::analyze(&raw);
    let security_score = scanner::score(&findings);

    info!(
        "Scan for {} produced {} findings, score {}",
        contract_address,
        findings.len(),
        security_score
    );

    Ok(Json(ScanResult {
        contract: contract_address,
        findings,
        security_score,
        scanned_at: Utc::now(),
    }))
}

// ============================================================================
// Error Mapping
// ============================================================================

/// Map the error taxonomy onto HTTP statuses and the wire error body.
fn error_response(err: MintwatchError) -> (StatusCode, Json<ErrorResponse>) {
    match err {
        MintwatchError::NotFound(contract) => {
            info!("No upstream result for {}", contract);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "not found".to_string(),
                }),
            )
        }
        err => {
            error!("Gateway call failed: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: err.to_string(),
                }),
            )
        }
    }
}
