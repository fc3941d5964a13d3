// SPDX-License-Identifier: Apache-2.0

//! SARIF result filtering.
//!
//! The document is handled as an untyped [`serde_json::Value`] tree so that
//! fields this crate does not know about survive a round trip untouched and
//! scanner schema drift does not break filtering. Only the path
//! `runs[].results[].locations[].physicalLocation.artifactLocation.uri` and
//! `runs[].results[].ruleId` are inspected.
//!
//! Entries that do not have the expected shape are kept as they are and
//! counted in [`FilterStats::malformed_entries`].

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::pattern::Pattern;
use crate::error::SiftError;

/// JSON pointer from a location to its file URI.
const LOCATION_URI_POINTER: &str = "/physicalLocation/artifactLocation/uri";

/// Indentation used for written reports unless configured otherwise.
pub const DEFAULT_INDENT: usize = 4;

/// Counters describing what a filtering pass did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Number of runs visited.
    pub runs: usize,
    /// Results present before filtering.
    pub results_before: usize,
    /// Results kept after filtering.
    pub results_after: usize,
    /// Locations evaluated against the patterns.
    pub locations_before: usize,
    /// Locations dropped by an exclude decision.
    pub locations_removed: usize,
    /// Runs, results or locations skipped because of an unexpected shape.
    pub malformed_entries: usize,
}

impl FilterStats {
    /// Number of results dropped because all their locations were removed.
    #[must_use]
    pub fn results_removed(&self) -> usize {
        self.results_before.saturating_sub(self.results_after)
    }
}

/// Decides whether a finding at `uri` reported by `rule_id` is kept.
///
/// Every pattern is evaluated in order and the last one matching both the
/// URI and the rule ID wins. Without a matching pattern the finding is kept.
#[must_use]
pub fn match_path_and_rule(uri: &str, rule_id: &str, patterns: &[Pattern]) -> bool {
    patterns
        .iter()
        .fold(true, |keep, pattern| {
            if pattern.matches(uri, rule_id) {
                pattern.sign
            } else {
                keep
            }
        })
}

/// Reads a SARIF document from disk.
///
/// # Errors
///
/// Returns `SiftError::ReadSarif` if the file cannot be opened and
/// `SiftError::ParseSarif` if it is not a JSON object.
pub fn read_sarif_file(path: &Path) -> Result<Value, SiftError> {
    let file = File::open(path).map_err(|source| SiftError::ReadSarif {
        path: path.to_path_buf(),
        source,
    })?;

    let document: Map<String, Value> =
        serde_json::from_reader(BufReader::new(file)).map_err(|source| {
            SiftError::ParseSarif {
                path: path.to_path_buf(),
                source,
            }
        })?;

    debug!("Read sarif document from {}", path.display());
    Ok(Value::Object(document))
}

/// Removes locations (and results left without locations) rejected by
/// `patterns`, in place.
pub fn process_sarif(sarif: &mut Value, patterns: &[Pattern]) -> FilterStats {
    let mut stats = FilterStats::default();

    let runs = match sarif.get_mut("runs") {
        Some(Value::Array(runs)) => runs,
        Some(_) => {
            warn!("Skipping sarif document: `runs` is not an array");
            stats.malformed_entries += 1;
            return stats;
        }
        None => {
            debug!("Sarif document has no runs");
            return stats;
        }
    };

    for run in runs {
        stats.runs += 1;
        let Some(run) = run.as_object_mut() else {
            warn!("Skipping run {}: not an object", stats.runs - 1);
            stats.malformed_entries += 1;
            continue;
        };

        let results = match run.get_mut("results") {
            Some(Value::Array(results)) => results,
            None => continue,
            Some(_) => {
                warn!("Skipping run {}: `results` is not an array", stats.runs - 1);
                stats.malformed_entries += 1;
                continue;
            }
        };

        stats.results_before += results.len();
        let mut index = 0;
        results.retain_mut(|result| {
            let keep = filter_result(result, patterns, &mut stats);
            if keep {
                debug!("Kept result {index}");
            } else {
                info!("Empty locations, removed result {index}");
            }
            index += 1;
            keep
        });
        stats.results_after += results.len();
        debug!("Run {} keeps {} results", stats.runs - 1, results.len());
    }

    stats
}

/// Filters the locations of one result. Returns false if the result must be
/// dropped.
fn filter_result(result: &mut Value, patterns: &[Pattern], stats: &mut FilterStats) -> bool {
    let Some(result) = result.as_object_mut() else {
        warn!("Keeping result that is not an object");
        stats.malformed_entries += 1;
        return true;
    };

    let rule_id = result
        .get("ruleId")
        .and_then(Value::as_str)
        .map(str::to_owned);

    let locations = match result.get_mut("locations") {
        Some(Value::Array(locations)) => locations,
        None => return true,
        Some(_) => {
            warn!("Keeping result with malformed `locations`");
            stats.malformed_entries += 1;
            return true;
        }
    };

    // No filter decision is possible without locations
    if locations.is_empty() {
        return true;
    }

    let Some(rule_id) = rule_id else {
        warn!("Keeping result without a string `ruleId`");
        stats.malformed_entries += 1;
        return true;
    };

    let before = locations.len();
    stats.locations_before += before;

    locations.retain(|location| {
        let Some(uri) = location.pointer(LOCATION_URI_POINTER).and_then(Value::as_str) else {
            warn!("Keeping location without a string uri (rule {rule_id})");
            stats.malformed_entries += 1;
            return true;
        };

        let keep = match_path_and_rule(uri, &rule_id, patterns);
        if keep {
            debug!("Added location to results: {uri}");
        } else {
            debug!("Removed {uri} from results");
        }
        keep
    });

    stats.locations_removed += before - locations.len();
    !locations.is_empty()
}

/// Writes a JSON document with the given indentation and a trailing newline.
///
/// # Errors
///
/// Returns `SiftError::WriteReport` on I/O failure and
/// `SiftError::EncodeReport` if serialization fails.
pub fn write_json_file<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
    indent: usize,
) -> Result<(), SiftError> {
    let write_error = |source| SiftError::WriteReport {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(write_error)?;
    let mut writer = BufWriter::new(file);

    let indent = " ".repeat(indent);
    let formatter = PrettyFormatter::with_indent(indent.as_bytes());
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|source| SiftError::EncodeReport {
            path: path.to_path_buf(),
            source,
        })?;

    writer.write_all(b"\n").map_err(write_error)?;
    writer.flush().map_err(write_error)?;
    Ok(())
}

/// Writes a (filtered) SARIF document to disk.
///
/// # Errors
///
/// See [`write_json_file`].
pub fn write_sarif_file(path: &Path, sarif: &Value, indent: usize) -> Result<(), SiftError> {
    write_json_file(path, sarif, indent)?;
    info!("Successfully written the JSON log to {}", path.display());
    Ok(())
}
