// SPDX-License-Identifier: Apache-2.0

//! Configuration inspection commands.

use sift_core::{AppConfig, config_file_path};

use super::types::{ConfigPathResult, ConfigShowResult};

/// Reports where the configuration file is looked up.
pub fn run_path() -> ConfigPathResult {
    let path = config_file_path();
    let exists = path.is_file();
    ConfigPathResult { path, exists }
}

/// Reports the effective configuration.
pub fn run_show(config: &AppConfig) -> ConfigShowResult {
    ConfigShowResult {
        config: config.clone(),
    }
}
