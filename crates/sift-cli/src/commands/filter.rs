// SPDX-License-Identifier: Apache-2.0

//! Filter a SARIF file.

use std::path::PathBuf;

use anyhow::Result;
use sift_core::{AppConfig, filter_sarif_file};
use tracing::debug;

use super::types::FilterResult;

/// Filters `input` into `output`.
///
/// Command-line values take precedence over the `[filter]` section of the
/// configuration.
pub fn run(
    input: PathBuf,
    output: PathBuf,
    patterns: Option<String>,
    indent: Option<usize>,
    config: &AppConfig,
) -> Result<FilterResult> {
    let mut filter_config = config.filter.clone();
    if let Some(patterns) = patterns {
        debug!("Overriding filter patterns to: {patterns}");
        filter_config.patterns = patterns;
    }
    if let Some(indent) = indent {
        debug!("Overriding indent to: {indent}");
        filter_config.indent = indent;
    }

    let stats = filter_sarif_file(&input, &output, &filter_config)?;

    Ok(FilterResult {
        input,
        output,
        patterns: filter_config.patterns,
        stats,
    })
}
