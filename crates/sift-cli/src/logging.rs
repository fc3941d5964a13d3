// SPDX-License-Identifier: Apache-2.0

//! Logging initialization for the Sift CLI.
//!
//! Uses `tracing` with `tracing-subscriber` for structured logging.
//! Log level can be controlled via the `RUST_LOG` environment variable.
//! Logs go to stderr so that JSON or YAML results on stdout stay parseable.
//!
//! # Examples
//!
//! ```bash
//! # Default: warnings only (skipped malformed entries)
//! sift filter --input in.sarif --output out.sarif
//!
//! # Per-location keep/remove decisions
//! sift -v filter --input in.sarif --output out.sarif
//!
//! # Compiled patterns and per-file outcome only
//! RUST_LOG=sift=info sift filter --input in.sarif --output out.sarif
//! ```

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Initialize the logging subsystem.
///
/// `RUST_LOG` takes precedence; otherwise the `verbose` flag selects
/// between warning and debug level for the `sift` crates.
pub fn init_logging(verbose: bool) {
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    // Directives match by target prefix, so `sift` covers `sift_core` too
    let default_filter = if verbose { "sift=debug" } else { "sift=warn" };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .expect("valid default filter directives");

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
