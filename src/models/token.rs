use serde::{Deserialize, Serialize};

/// Shaped token metadata returned by the info endpoint.
///
/// Every field is derived from a single upstream `getAsset` response;
/// nothing here is persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenInfo {
    pub contract: String,
    pub name: String,
    pub symbol: String,
    pub supply: u64,
    pub decimals: u8,
    pub mint_enabled: bool,
    pub freeze_enabled: bool,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldersResult {
    pub contract: String,
    pub holders_count: u64,
}
