// SPDX-License-Identifier: Apache-2.0

//! Error types for Sift.
//!
//! Uses `thiserror` for deriving `std::error::Error` implementations.
//! Application code should use `anyhow::Result` for top-level error handling.
//!
//! Errors fall in two groups: configuration mistakes made by the user
//! (bad pattern syntax, invalid config file) and environment failures
//! (unreadable files, undecodable JSON). Use [`SiftError::is_configuration`]
//! to tell them apart.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during Sift operations.
#[derive(Error, Debug)]
pub enum SiftError {
    /// A filter pattern could not be parsed.
    #[error("Invalid pattern: '{pattern}'. {reason}")]
    InvalidPattern {
        /// The offending pattern token.
        pattern: String,
        /// What is wrong with it.
        reason: String,
    },

    /// A glob uses `**` somewhere other than as a whole path component.
    #[error("`**` in {pattern} not alone between path separators")]
    InvalidGlob {
        /// The offending glob.
        pattern: String,
    },

    /// The SARIF file could not be opened or read.
    #[error("Failed to open sarif file {}", path.display())]
    ReadSarif {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The SARIF file is not valid JSON.
    #[error("Failed to decode the JSON in {}", path.display())]
    ParseSarif {
        /// Path of the input file.
        path: PathBuf,
        /// Underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// An output report (filtered SARIF or summary) could not be written.
    #[error("Failed to write report {}", path.display())]
    WriteReport {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An output report could not be encoded as JSON.
    #[error("Failed to encode report {}", path.display())]
    EncodeReport {
        /// Path of the output file.
        path: PathBuf,
        /// Underlying encode error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file or environment error.
    #[error("Configuration error: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl SiftError {
    /// Returns true if the error was caused by user configuration
    /// (pattern syntax, config file) rather than the environment.
    #[must_use]
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SiftError::InvalidPattern { .. }
                | SiftError::InvalidGlob { .. }
                | SiftError::Config { .. }
        )
    }
}

impl From<config::ConfigError> for SiftError {
    fn from(err: config::ConfigError) -> Self {
        SiftError::Config {
            message: err.to_string(),
        }
    }
}
