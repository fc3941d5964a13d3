// SPDX-License-Identifier: Apache-2.0

//! Command handlers for Sift CLI.

pub mod completion;
pub mod config;
pub mod filter;
pub mod patterns;
pub mod summary;
pub mod types;

use anyhow::Result;
use sift_core::AppConfig;
use tracing::debug;

use crate::cli::{Commands, CompletionCommand, ConfigCommand, OutputContext};
use crate::output;

/// Dispatch to the appropriate command handler.
pub fn run(command: Commands, ctx: &OutputContext, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Filter {
            input,
            output,
            patterns,
            indent,
        } => {
            let result = filter::run(input, output, patterns, indent, config)?;
            if ctx.quiet {
                debug!("Quiet mode, skipping filter statistics");
                return Ok(());
            }
            output::render(&result, ctx)
        }

        Commands::Summary { input, report } => {
            let result = summary::run(&input, report, config)?;
            output::render(&result, ctx)
        }

        Commands::Patterns { filter } => {
            let result = patterns::run(filter)?;
            output::render(&result, ctx)
        }

        Commands::Config(config_cmd) => match config_cmd {
            ConfigCommand::Path => output::render(&config::run_path(), ctx),
            ConfigCommand::Show => output::render(&config::run_show(config), ctx),
        },

        Commands::Completion(CompletionCommand::Generate { shell }) => {
            completion::run_generate(shell)
        }
    }
}
