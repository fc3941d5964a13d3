// SPDX-License-Identifier: Apache-2.0

//! Sift - SARIF finding suppression by file and rule patterns.
//!
//! A CLI tool that removes static analysis findings whose location and rule
//! match include/exclude patterns, for use as a step in CI pipelines.

mod cli;
mod commands;
mod errors;
mod logging;
mod output;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use sift_core::load_config;
use tracing::debug;

use crate::cli::{Cli, OutputContext};

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let formatted = errors::format_error(&e);
            eprintln!("Error: {formatted}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let output_ctx = OutputContext::from_cli(cli.format, cli.quiet, cli.verbose);

    let config = load_config().context("Failed to load configuration")?;
    debug!("Configuration loaded successfully");

    commands::run(cli.command, &output_ctx, &config)
}
