// SPDX-License-Identifier: Apache-2.0

//! Findings summary for SARIF documents.
//!
//! Aggregates results per rule and per level into the audit-report shape
//! used by pipeline steps after a scan.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use serde_json::Value;

/// Key used for results that have no string `ruleId`.
pub const UNKNOWN_RULE: &str = "<none>";

/// SARIF's default `level` when a result omits it.
pub const DEFAULT_LEVEL: &str = "warning";

/// Number of findings reported by a single rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleCount {
    /// Rule identifier.
    pub rule_id: String,
    /// Number of results reported by the rule.
    pub total: usize,
}

/// Aggregated view of the findings in a SARIF document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FindingsSummary {
    /// Name of the tool that produced the first run.
    pub tool_name: String,
    /// Total number of results across all runs.
    pub total: usize,
    /// Results per rule, most frequent first.
    pub by_rule: Vec<RuleCount>,
    /// Results per SARIF level (`error`, `warning`, `note`, `none`).
    pub by_level: BTreeMap<String, usize>,
}

/// Summarizes the results of every run in `sarif`.
///
/// `default_tool_name` is used when the first run does not name its driver.
/// Runs and results with an unexpected shape are skipped.
#[must_use]
pub fn summarize(sarif: &Value, default_tool_name: &str) -> FindingsSummary {
    let runs = sarif
        .get("runs")
        .and_then(Value::as_array)
        .map_or(&[][..], Vec::as_slice);

    let tool_name = runs
        .first()
        .and_then(|run| run.pointer("/tool/driver/name"))
        .and_then(Value::as_str)
        .unwrap_or(default_tool_name)
        .to_string();

    let mut per_rule: HashMap<&str, usize> = HashMap::new();
    let mut by_level: BTreeMap<String, usize> = BTreeMap::new();
    let mut total = 0;

    let results = runs
        .iter()
        .filter_map(|run| run.get("results").and_then(Value::as_array))
        .flatten()
        .filter(|result| result.is_object());

    for result in results {
        total += 1;
        let rule_id = result
            .get("ruleId")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_RULE);
        *per_rule.entry(rule_id).or_default() += 1;

        let level = result
            .get("level")
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_LEVEL);
        *by_level.entry(level.to_string()).or_default() += 1;
    }

    let mut by_rule: Vec<RuleCount> = per_rule
        .into_iter()
        .map(|(rule_id, total)| RuleCount {
            rule_id: rule_id.to_string(),
            total,
        })
        .collect();
    by_rule.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.rule_id.cmp(&b.rule_id)));

    FindingsSummary {
        tool_name,
        total,
        by_rule,
        by_level,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_summarize_counts_rules_and_levels() {
        let sarif = json!({
            "runs": [
                {
                    "tool": { "driver": { "name": "CodeQL" } },
                    "results": [
                        { "ruleId": "java/xss", "level": "error" },
                        { "ruleId": "java/sql-injection", "level": "error" },
                        { "ruleId": "java/xss", "level": "warning" }
                    ]
                },
                {
                    "tool": { "driver": { "name": "other" } },
                    "results": [
                        { "ruleId": "java/xss" },
                        { "level": "note" }
                    ]
                }
            ]
        });

        let summary = summarize(&sarif, "unknown");

        assert_eq!(summary.tool_name, "CodeQL");
        assert_eq!(summary.total, 5);
        assert_eq!(
            summary.by_rule,
            vec![
                RuleCount {
                    rule_id: "java/xss".to_string(),
                    total: 3
                },
                RuleCount {
                    rule_id: "<none>".to_string(),
                    total: 1
                },
                RuleCount {
                    rule_id: "java/sql-injection".to_string(),
                    total: 1
                },
            ]
        );
        assert_eq!(summary.by_level.get("error"), Some(&2));
        assert_eq!(summary.by_level.get("warning"), Some(&2));
        assert_eq!(summary.by_level.get("note"), Some(&1));
    }

    #[test]
    fn test_summarize_uses_default_tool_name() {
        let sarif = json!({ "runs": [{ "results": [] }] });
        let summary = summarize(&sarif, "codeql");
        assert_eq!(summary.tool_name, "codeql");
        assert_eq!(summary.total, 0);
        assert!(summary.by_rule.is_empty());
    }

    #[test]
    fn test_summarize_skips_malformed_entries() {
        let sarif = json!({
            "runs": [
                "bad run",
                { "results": "bad results" },
                { "results": [42, { "ruleId": "R1", "level": "error" }] }
            ]
        });

        let summary = summarize(&sarif, "unknown");

        assert_eq!(summary.tool_name, "unknown");
        assert_eq!(summary.total, 1);
        assert_eq!(summary.by_rule[0].rule_id, "R1");
    }

    #[test]
    fn test_summarize_document_without_runs() {
        let summary = summarize(&json!({}), "unknown");
        assert_eq!(summary.total, 0);
        assert!(summary.by_level.is_empty());
    }

    #[test]
    fn test_summary_serialization() {
        let sarif = json!({ "runs": [{ "results": [{ "ruleId": "R1", "level": "error" }] }] });
        let json = serde_json::to_value(summarize(&sarif, "tool")).unwrap();
        assert_eq!(json["tool_name"], "tool");
        assert_eq!(json["by_rule"][0]["rule_id"], "R1");
        assert_eq!(json["by_level"]["error"], 1);
    }
}
