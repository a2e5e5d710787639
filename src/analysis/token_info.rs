use chrono::{LocalResult, TimeZone, Utc};
use serde_json::Value;

use crate::models::token::TokenInfo;

/// Placeholder for name/symbol fields the upstream response does not carry.
const UNKNOWN: &str = "unknown";

/// Sentinel returned for timestamps that cannot be formatted.
const UNAVAILABLE: &str = "unavailable";

/// Timestamps below this are seconds since the epoch; at or above it they
/// are already milliseconds.
const MILLIS_CUTOFF: f64 = 10_000_000_000.0;

/// Shape a raw `getAsset` result into a `TokenInfo`.
///
/// Extraction is permissive: the flat field layout is tried first, falling
/// back to the nested `content.metadata` / `token_info` layout Helius also
/// uses, and anything missing becomes a neutral default. Mint and freeze
/// status come from `mint.authority` and `freezeAuthority`; an authority
/// counts as enabled when the field is present and non-null.
pub fn format_token_info(contract: &str, raw: &Value) -> TokenInfo {
    TokenInfo {
        contract: contract.to_string(),
        name: string_field(raw, "name", &["content", "metadata", "name"]),
        symbol: string_field(raw, "symbol", &["content", "metadata", "symbol"]),
        supply: uint_field(raw, "supply", &["token_info", "supply"]),
        decimals: uint_field(raw, "decimals", &["token_info", "decimals"])
            .try_into()
            .unwrap_or(0),
        mint_enabled: authority_present(raw.pointer("/mint/authority")),
        freeze_enabled: authority_present(raw.get("freezeAuthority")),
        created_at: format_created_at(raw.get("createdAt")),
    }
}

/// Format a raw creation timestamp as an ISO-8601 string.
///
/// Accepts seconds or milliseconds since the epoch. Non-numeric,
/// non-finite, or out-of-range inputs yield the "unavailable" sentinel
/// instead of failing the request.
pub fn format_created_at(value: Option<&Value>) -> String {
    let Some(ts) = value.and_then(Value::as_f64) else {
        return UNAVAILABLE.to_string();
    };
    if !ts.is_finite() {
        return UNAVAILABLE.to_string();
    }

    let millis = if ts < MILLIS_CUTOFF { ts * 1000.0 } else { ts };
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return UNAVAILABLE.to_string();
    }

    match Utc.timestamp_millis_opt(millis as i64) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
        _ => UNAVAILABLE.to_string(),
    }
}

fn walk<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(raw, |value, key| value.get(key))
}

fn string_field(raw: &Value, key: &str, fallback: &[&str]) -> String {
    raw.get(key)
        .and_then(Value::as_str)
        .or_else(|| walk(raw, fallback).and_then(Value::as_str))
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn uint_field(raw: &Value, key: &str, fallback: &[&str]) -> u64 {
    raw.get(key)
        .or_else(|| walk(raw, fallback))
        .map(parse_uint)
        .unwrap_or(0)
}

/// Upstream sends numeric fields sometimes as numbers, sometimes as strings.
fn parse_uint(value: &Value) -> u64 {
    match value {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.parse().unwrap_or(0),
        _ => 0,
    }
}

fn authority_present(value: Option<&Value>) -> bool {
    value.map(|v| !v.is_null()).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_token_info_flat_layout() {
        let raw = json!({
            "name": "Foo",
            "symbol": "FOO",
            "supply": "1000",
            "decimals": 6,
            "mint": { "authority": null },
            "freezeAuthority": "Abc",
            "createdAt": 1_700_000_000
        });

        let info = format_token_info("So111", &raw);

        assert_eq!(info.contract, "So111");
        assert_eq!(info.name, "Foo");
        assert_eq!(info.symbol, "FOO");
        assert_eq!(info.supply, 1000);
        assert_eq!(info.decimals, 6);
        assert!(!info.mint_enabled);
        assert!(info.freeze_enabled);
        assert_eq!(info.created_at, "2023-11-14T22:13:20.000Z");
    }

    #[test]
    fn test_format_token_info_nested_layout() {
        let raw = json!({
            "content": { "metadata": { "name": "Bar Token", "symbol": "BAR" } },
            "token_info": { "supply": 500_000, "decimals": 9 },
            "mint": { "authority": "Mint111" }
        });

        let info = format_token_info("Bar111", &raw);

        assert_eq!(info.name, "Bar Token");
        assert_eq!(info.symbol, "BAR");
        assert_eq!(info.supply, 500_000);
        assert_eq!(info.decimals, 9);
        assert!(info.mint_enabled);
        assert!(!info.freeze_enabled);
        assert_eq!(info.created_at, "unavailable");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let info = format_token_info("Empty111", &json!({}));

        assert_eq!(info.name, "unknown");
        assert_eq!(info.symbol, "unknown");
        assert_eq!(info.supply, 0);
        assert_eq!(info.decimals, 0);
        assert!(!info.mint_enabled);
        assert!(!info.freeze_enabled);
        assert_eq!(info.created_at, "unavailable");
    }

    #[test]
    fn test_empty_strings_count_as_missing() {
        let raw = json!({ "name": "", "symbol": "" });
        let info = format_token_info("X", &raw);

        assert_eq!(info.name, "unknown");
        assert_eq!(info.symbol, "unknown");
    }

    #[test]
    fn test_unparseable_numbers_default_to_zero() {
        let raw = json!({ "supply": "lots", "decimals": { "nested": true } });
        let info = format_token_info("X", &raw);

        assert_eq!(info.supply, 0);
        assert_eq!(info.decimals, 0);
    }

    #[test]
    fn test_created_at_seconds_heuristic() {
        let value = json!(1_700_000_000);
        assert_eq!(
            format_created_at(Some(&value)),
            "2023-11-14T22:13:20.000Z"
        );
    }

    #[test]
    fn test_created_at_millis_passthrough() {
        let value = json!(1_700_000_000_000i64);
        assert_eq!(
            format_created_at(Some(&value)),
            "2023-11-14T22:13:20.000Z"
        );
    }

    #[test]
    fn test_created_at_rejects_non_numeric() {
        assert_eq!(format_created_at(None), "unavailable");
        assert_eq!(format_created_at(Some(&json!(null))), "unavailable");
        assert_eq!(format_created_at(Some(&json!("yesterday"))), "unavailable");
        assert_eq!(format_created_at(Some(&json!({ "ts": 1 }))), "unavailable");
        assert_eq!(format_created_at(Some(&json!([1_700_000_000]))), "unavailable");
    }

    #[test]
    fn test_created_at_rejects_out_of_range() {
        // Far beyond any representable date in milliseconds.
        assert_eq!(
            format_created_at(Some(&json!(1_000_000_000_000_000_000i64))),
            "unavailable"
        );
        assert_eq!(format_created_at(Some(&json!(f64::MAX))), "unavailable");
    }

    #[test]
    fn test_created_at_never_panics_on_negatives() {
        // Pre-epoch seconds still format; absurd negatives hit the sentinel.
        assert_eq!(format_created_at(Some(&json!(-1))), "1969-12-31T23:59:59.000Z");
        assert_eq!(
            format_created_at(Some(&json!(-1_000_000_000_000_000_000i64))),
            "unavailable"
        );
    }
}
