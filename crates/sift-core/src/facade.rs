// SPDX-License-Identifier: Apache-2.0

//! Platform-agnostic entry points.
//!
//! These functions tie pattern compilation, document I/O and filtering
//! together so that a CLI or a pipeline step only has to supply paths and
//! configuration.

use std::path::Path;

use tracing::{info, instrument};

use crate::config::{FilterConfig, ReportConfig};
use crate::error::SiftError;
use crate::filter::{
    FilterStats, FindingsSummary, compile_patterns, process_sarif, read_sarif_file, summarize,
    write_json_file, write_sarif_file,
};

/// Filters the SARIF file at `input` and writes the result to `output`.
///
/// Patterns are compiled before the input is read, so configuration
/// mistakes are reported without touching the file system.
///
/// # Errors
///
/// Returns a configuration error for malformed patterns and an I/O error
/// if either file cannot be read, decoded, encoded or written.
#[instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn filter_sarif_file(
    input: &Path,
    output: &Path,
    config: &FilterConfig,
) -> Result<FilterStats, SiftError> {
    let patterns = compile_patterns(&config.patterns)?;

    let mut sarif = read_sarif_file(input)?;
    let stats = process_sarif(&mut sarif, &patterns);
    write_sarif_file(output, &sarif, config.indent)?;

    info!(
        results_before = stats.results_before,
        results_after = stats.results_after,
        locations_removed = stats.locations_removed,
        malformed_entries = stats.malformed_entries,
        "Filtered sarif file"
    );

    Ok(stats)
}

/// Reads the SARIF file at `input` and summarizes its findings.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or decoded.
pub fn summarize_sarif_file(
    input: &Path,
    config: &ReportConfig,
) -> Result<FindingsSummary, SiftError> {
    let sarif = read_sarif_file(input)?;
    Ok(summarize(&sarif, config.tool_name_or_default()))
}

/// Writes a findings summary as a pretty-printed JSON report.
///
/// # Errors
///
/// Returns an I/O error if the report cannot be encoded or written.
pub fn write_summary_report(
    path: &Path,
    summary: &FindingsSummary,
    indent: usize,
) -> Result<(), SiftError> {
    write_json_file(path, summary, indent)?;
    info!("Wrote findings summary to {}", path.display());
    Ok(())
}
