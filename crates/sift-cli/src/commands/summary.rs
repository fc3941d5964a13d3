// SPDX-License-Identifier: Apache-2.0

//! Summarize the findings of a SARIF file.

use std::path::{Path, PathBuf};

use anyhow::Result;
use sift_core::{AppConfig, summarize_sarif_file, write_summary_report};

use super::types::SummaryResult;

/// Summarizes `input` and optionally writes the summary to `report`.
pub fn run(input: &Path, report: Option<PathBuf>, config: &AppConfig) -> Result<SummaryResult> {
    let summary = summarize_sarif_file(input, &config.report)?;

    if let Some(path) = &report {
        write_summary_report(path, &summary, config.filter.indent)?;
    }

    Ok(SummaryResult { summary, report })
}
