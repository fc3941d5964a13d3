// SPDX-License-Identifier: Apache-2.0

//! CLI-specific error formatting with user-friendly hints.
//!
//! This module downcasts `anyhow::Error` to `SiftError` and adds hints for
//! the different error types. Structured error data stays in the library;
//! presentation lives here.

use anyhow::Error;
use sift_core::SiftError;

/// Formats an error for CLI display with helpful hints.
///
/// If the error is not a `SiftError`, returns the original error message.
pub fn format_error(error: &Error) -> String {
    let Some(sift_err) = error.downcast_ref::<SiftError>() else {
        return error.to_string();
    };

    match sift_err {
        SiftError::InvalidPattern { .. } | SiftError::InvalidGlob { .. } => {
            format!(
                "{sift_err}\n\nTip: Run `sift patterns '<filter>'` to see how a filter expression is compiled."
            )
        }
        SiftError::ReadSarif { source, .. } => {
            format!("{sift_err}: {source}\n\nTip: Check that the input path exists and is readable.")
        }
        SiftError::ParseSarif { source, .. } => {
            format!("{sift_err}: {source}\n\nTip: The input must be a SARIF (JSON object) document.")
        }
        SiftError::WriteReport { source, .. } => {
            format!(
                "{sift_err}: {source}\n\nTip: Check that the output directory exists and is writable."
            )
        }
        SiftError::EncodeReport { source, .. } => format!("{sift_err}: {source}"),
        SiftError::Config { .. } => {
            format!(
                "{sift_err}\n\nTip: Check your config file at {} and SIFT_* environment variables.",
                sift_core::config_file_path().display()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_format_invalid_pattern_error() {
        let error = SiftError::InvalidPattern {
            pattern: "a:b:c".to_string(),
            reason: "Expected one separator".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("Invalid pattern: 'a:b:c'"));
        assert!(formatted.contains("sift patterns"));
    }

    #[test]
    fn test_format_invalid_glob_error() {
        let error = SiftError::InvalidGlob {
            pattern: "src/**.java".to_string(),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("src/**.java"));
        assert!(formatted.contains("Tip:"));
    }

    #[test]
    fn test_format_read_error_includes_source() {
        let error = SiftError::ReadSarif {
            path: PathBuf::from("missing.sarif"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "No such file"),
        };
        let formatted = format_error(&anyhow::Error::new(error));

        assert!(formatted.contains("missing.sarif"));
        assert!(formatted.contains("No such file"));
        assert!(formatted.contains("input path exists"));
    }

    #[test]
    fn test_format_error_behind_context() {
        let error = anyhow::Error::new(SiftError::Config {
            message: "invalid type".to_string(),
        })
        .context("Failed to load configuration");
        let formatted = format_error(&error);

        assert!(formatted.contains("Configuration error: invalid type"));
        assert!(formatted.contains("config.toml"));
    }

    #[test]
    fn test_format_non_sift_error() {
        let error = anyhow::anyhow!("Some generic error");
        let formatted = format_error(&error);

        assert_eq!(formatted, "Some generic error");
    }
}
