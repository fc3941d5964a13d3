// SPDX-License-Identifier: Apache-2.0

//! Result types returned by command handlers.
//!
//! These types allow command handlers to return data instead of printing
//! directly, improving testability and separation of concerns.

use std::path::PathBuf;

use serde::Serialize;
use sift_core::{AppConfig, FilterStats, FindingsSummary, Pattern};

/// Result from the filter command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FilterResult {
    /// SARIF file that was read.
    pub input: PathBuf,
    /// SARIF file that was written.
    pub output: PathBuf,
    /// Filter expression that was applied.
    pub patterns: String,
    /// What the filtering pass did.
    pub stats: FilterStats,
}

/// Result from the summary command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SummaryResult {
    /// Aggregated findings.
    #[serde(flatten)]
    pub summary: FindingsSummary,
    /// Report file written alongside (if requested).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<PathBuf>,
}

/// Result from the patterns command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct PatternsResult {
    /// Filter expression as given.
    pub filter: String,
    /// Compiled patterns in evaluation order.
    pub patterns: Vec<Pattern>,
}

/// Result from the config path command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigPathResult {
    /// Location of the configuration file.
    pub path: PathBuf,
    /// Whether the file currently exists.
    pub exists: bool,
}

/// Result from the config show command.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct ConfigShowResult {
    /// Effective configuration after layering.
    #[serde(flatten)]
    pub config: AppConfig,
}
