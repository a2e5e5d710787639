use serde_json::Value;

use crate::models::scan::{Finding, Severity};

/// Ordered keyword table driving the scan. Findings are emitted in table
/// order and callers rely on that order being stable.
const SECURITY_CHECKS: [(&str, &str, Severity); 4] = [
    ("Upgradeable", "Contract is upgradeable", Severity::High),
    ("Admin", "An admin holds full control", Severity::Medium),
    ("Freeze", "Contract can freeze funds", Severity::High),
    ("Mint", "New tokens can be minted", Severity::Medium),
];

const BASE_SCORE: i64 = 100;

/// Scan a raw program-accounts payload for risk markers.
///
/// This is a case-sensitive substring heuristic over the serialized JSON
/// text, not a static analyzer: it knows nothing about program structure
/// or instruction semantics. Each keyword contributes at most one finding.
pub fn analyze(raw: &Value) -> Vec<Finding> {
    let haystack = raw.to_string();

    SECURITY_CHECKS
        .iter()
        .filter(|(keyword, _, _)| haystack.contains(keyword))
        .map(|(_, issue, severity)| Finding {
            issue: (*issue).to_string(),
            severity: *severity,
        })
        .collect()
}

/// Reduce findings to a display score: 100 minus 20 per High and 10 per
/// Medium finding, clamped to [0, 100].
pub fn score(findings: &[Finding]) -> u8 {
    let total = findings.iter().fold(BASE_SCORE, |acc, finding| {
        acc - match finding.severity {
            Severity::High => 20,
            Severity::Medium => 10,
        }
    });

    total.clamp(0, BASE_SCORE) as u8
}
