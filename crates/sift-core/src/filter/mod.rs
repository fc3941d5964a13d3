// SPDX-License-Identifier: Apache-2.0

//! SARIF finding suppression by file and rule patterns.
//!
//! A filter string such as `-**/test/** +**/test/**:java/sql-injection` is
//! compiled into an ordered list of [`Pattern`]s. Each SARIF location is then
//! checked against every pattern; the last pattern matching both the
//! location URI and the rule ID decides whether the location is kept.
//! Results left without locations are removed from their run.

pub mod glob;
pub mod pattern;
pub mod sarif;
pub mod summary;

pub use glob::{Glob, matches};
pub use pattern::{DEFAULT_RULE_PATTERN, Pattern, compile_patterns, split_expressions};
pub use sarif::{
    DEFAULT_INDENT, FilterStats, match_path_and_rule, process_sarif, read_sarif_file,
    write_json_file, write_sarif_file,
};
pub use summary::{FindingsSummary, RuleCount, summarize};
