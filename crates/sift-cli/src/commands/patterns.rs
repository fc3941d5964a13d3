// SPDX-License-Identifier: Apache-2.0

//! Show how a filter expression is compiled.

use anyhow::Result;
use sift_core::compile_patterns;

use super::types::PatternsResult;

/// Compiles `filter` without touching any SARIF file.
pub fn run(filter: String) -> Result<PatternsResult> {
    let patterns = compile_patterns(&filter)?;
    Ok(PatternsResult { filter, patterns })
}
