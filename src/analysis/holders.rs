use serde_json::Value;

/// Count the token accounts in a `getTokenAccountsByOwner` result.
///
/// The count is the length of `result.value`. A missing result, a missing
/// list, or a list of the wrong type counts as zero holders, never an error.
pub fn count_holders(raw: Option<&Value>) -> u64 {
    raw.and_then(|result| result.get("value"))
        .and_then(Value::as_array)
        .map(|accounts| accounts.len() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_counts_token_accounts() {
        let raw = json!({
            "context": { "slot": 12345 },
            "value": [
                { "pubkey": "Acct1" },
                { "pubkey": "Acct2" },
                { "pubkey": "Acct3" }
            ]
        });

        assert_eq!(count_holders(Some(&raw)), 3);
    }

    #[test]
    fn test_empty_list_counts_zero() {
        let raw = json!({ "value": [] });
        assert_eq!(count_holders(Some(&raw)), 0);
    }

    #[test]
    fn test_missing_result_counts_zero() {
        assert_eq!(count_holders(None), 0);
    }

    #[test]
    fn test_missing_value_counts_zero() {
        let raw = json!({ "context": { "slot": 12345 } });
        assert_eq!(count_holders(Some(&raw)), 0);
    }

    #[test]
    fn test_malformed_value_counts_zero() {
        assert_eq!(count_holders(Some(&json!({ "value": null }))), 0);
        assert_eq!(count_holders(Some(&json!({ "value": 42 }))), 0);
        assert_eq!(count_holders(Some(&json!("not an object"))), 0);
    }
}
