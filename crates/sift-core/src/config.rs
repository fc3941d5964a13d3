// SPDX-License-Identifier: Apache-2.0

//! Configuration management for Sift.
//!
//! Provides layered configuration from files and environment variables.
//! Uses XDG-compliant paths with environment variable support.
//!
//! # Configuration Sources (in priority order)
//!
//! 1. Command-line flags (applied by the caller)
//! 2. Environment variables (prefix: `SIFT_`)
//! 3. Config file: `~/.config/sift/config.toml`
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```bash
//! # Suppress findings under test directories via environment variable
//! SIFT_FILTER__PATTERNS='-**/test/**' sift filter --input in.sarif --output out.sarif
//! ```

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::SiftError;
use crate::filter::DEFAULT_INDENT;

/// Tool name reported when neither the SARIF driver nor the config names one.
pub const DEFAULT_TOOL_NAME: &str = "unknown";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Filtering settings.
    pub filter: FilterConfig,
    /// Summary report settings.
    pub report: ReportConfig,
}

/// Filtering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Whitespace-separated filter expressions (e.g. `-**/test/** +**:java/*`).
    pub patterns: String,
    /// Indentation width of the written SARIF file.
    pub indent: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            patterns: String::new(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Summary report settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Tool name used when the SARIF document does not name its driver.
    pub tool_name: Option<String>,
}

impl ReportConfig {
    /// Tool name fallback for summaries.
    #[must_use]
    pub fn tool_name_or_default(&self) -> &str {
        self.tool_name.as_deref().unwrap_or(DEFAULT_TOOL_NAME)
    }
}

/// Returns the Sift configuration directory.
///
/// Respects the `XDG_CONFIG_HOME` environment variable if set,
/// otherwise defaults to `~/.config/sift`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        return PathBuf::from(xdg_config).join("sift");
    }
    dirs::home_dir()
        .expect("Could not determine home directory - is HOME set?")
        .join(".config")
        .join("sift")
}

/// Returns the path to the configuration file.
#[must_use]
pub fn config_file_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Load application configuration from the default location.
///
/// Environment variables use the prefix `SIFT_` and double underscore
/// for nested keys (e.g., `SIFT_FILTER__PATTERNS`).
///
/// # Errors
///
/// Returns `SiftError::Config` if the config file exists but is invalid.
pub fn load_config() -> Result<AppConfig, SiftError> {
    load_config_from(&config_file_path())
}

/// Load application configuration from `path` plus environment variables.
///
/// A missing file is not an error.
///
/// # Errors
///
/// Returns `SiftError::Config` if the file or an environment value is invalid.
pub fn load_config_from(path: &Path) -> Result<AppConfig, SiftError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix("SIFT")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let app_config: AppConfig = config.try_deserialize()?;

    Ok(app_config)
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;

    fn from_toml(contents: &str) -> AppConfig {
        Config::builder()
            .add_source(config::File::from_str(contents, config::FileFormat::Toml))
            .build()
            .expect("should build config")
            .try_deserialize()
            .expect("should deserialize")
    }

    #[test]
    #[serial]
    fn test_load_config_defaults() {
        let config = load_config_from(Path::new("/nonexistent/sift/config.toml"))
            .expect("should load with defaults");

        assert_eq!(config.filter.patterns, "");
        assert_eq!(config.filter.indent, 4);
        assert_eq!(config.report.tool_name, None);
        assert_eq!(config.report.tool_name_or_default(), "unknown");
    }

    #[test]
    fn test_config_with_filter_section() {
        let config = from_toml(
            r#"
[filter]
patterns = "-**/test/** +**/test/**:java/sql-injection"
indent = 2

[report]
tool_name = "CodeQL"
"#,
        );

        assert_eq!(
            config.filter.patterns,
            "-**/test/** +**/test/**:java/sql-injection"
        );
        assert_eq!(config.filter.indent, 2);
        assert_eq!(config.report.tool_name_or_default(), "CodeQL");
    }

    #[test]
    fn test_config_partial_section_keeps_defaults() {
        let config = from_toml(
            r#"
[filter]
patterns = "-vendor/**"
"#,
        );

        assert_eq!(config.filter.patterns, "-vendor/**");
        assert_eq!(config.filter.indent, 4);
        assert_eq!(config.report, ReportConfig::default());
    }

    #[test]
    #[serial]
    fn test_load_config_from_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[filter]\npatterns = \"-gen/**\"\nindent = 8\n").expect("write");

        let config = load_config_from(&path).expect("should load");

        assert_eq!(config.filter.patterns, "-gen/**");
        assert_eq!(config.filter.indent, 8);
    }

    #[test]
    #[serial]
    fn test_invalid_config_file_is_config_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[filter]\nindent = \"wide\"\n").expect("write");

        let err = load_config_from(&path).expect_err("invalid indent");
        assert!(matches!(err, SiftError::Config { .. }));
        assert!(err.is_configuration());
    }

    #[test]
    #[serial]
    fn test_environment_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[filter]\npatterns = \"-gen/**\"\n").expect("write");

        unsafe {
            std::env::set_var("SIFT_FILTER__PATTERNS", "-vendor/**");
        }
        let config = load_config_from(&path);
        unsafe {
            std::env::remove_var("SIFT_FILTER__PATTERNS");
        }

        assert_eq!(config.expect("should load").filter.patterns, "-vendor/**");
    }

    #[test]
    #[serial]
    fn test_config_dir_respects_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "/custom/config");
        }

        let dir = config_dir();
        assert_eq!(dir, PathBuf::from("/custom/config/sift"));
        assert_eq!(
            config_file_path(),
            PathBuf::from("/custom/config/sift/config.toml")
        );

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }

    #[test]
    #[serial]
    fn test_config_dir_ignores_empty_xdg_config_home() {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        unsafe {
            std::env::set_var("XDG_CONFIG_HOME", "");
        }

        let dir = config_dir();
        assert!(dir.ends_with(".config/sift"));

        unsafe {
            match original {
                Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
                None => std::env::remove_var("XDG_CONFIG_HOME"),
            }
        }
    }
}
