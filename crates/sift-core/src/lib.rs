// SPDX-License-Identifier: Apache-2.0

#![warn(missing_docs)]

//! # Sift Core
//!
//! Core library for Sift - SARIF finding suppression by file and rule patterns.
//!
//! This crate provides reusable components for:
//! - Compiling filter expressions such as `-**/test/** +**/test/**:java/sql-injection`
//! - Matching paths and rule IDs against `**`-aware glob patterns
//! - Removing suppressed locations and results from SARIF documents
//! - Summarizing the findings left in a SARIF document
//! - Configuration management
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use sift_core::{FilterConfig, filter_sarif_file};
//!
//! # fn example() -> sift_core::Result<()> {
//! let config = FilterConfig {
//!     patterns: "-**/test/** +**/test/**:java/sql-injection".to_string(),
//!     ..FilterConfig::default()
//! };
//!
//! let stats = filter_sarif_file(
//!     Path::new("codeql.sarif"),
//!     Path::new("codeql-filtered.sarif"),
//!     &config,
//! )?;
//! println!("Removed {} results", stats.results_removed());
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and paths
//! - [`error`] - Error types
//! - [`facade`] - File-level entry points
//! - [`filter`] - Pattern compiler, glob matcher and SARIF filter

// ============================================================================
// Error Handling
// ============================================================================

pub use error::SiftError;

/// Convenience Result type for Sift operations.
///
/// This is equivalent to `std::result::Result<T, SiftError>`.
pub type Result<T> = std::result::Result<T, SiftError>;

// ============================================================================
// Configuration
// ============================================================================

pub use config::{
    AppConfig, DEFAULT_TOOL_NAME, FilterConfig, ReportConfig, config_dir, config_file_path,
    load_config, load_config_from,
};

// ============================================================================
// Filtering
// ============================================================================

pub use filter::{
    DEFAULT_INDENT, FilterStats, FindingsSummary, Glob, Pattern, RuleCount, compile_patterns,
    match_path_and_rule, process_sarif, summarize,
};

// ============================================================================
// Platform-Agnostic Facade
// ============================================================================

pub use facade::{filter_sarif_file, summarize_sarif_file, write_summary_report};

// ============================================================================
// Modules
// ============================================================================

pub mod config;
pub mod error;
pub mod facade;
pub mod filter;
