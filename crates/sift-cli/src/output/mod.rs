// SPDX-License-Identifier: Apache-2.0

//! Rendering of filter statistics, findings summaries, compiled patterns and
//! configuration.
//!
//! Everything goes to stdout in the format picked with `--format`. JSON and
//! YAML reuse the `Serialize` impls of the result types, so CI steps can
//! parse them. Text is meant for terminals. Markdown is meant for job
//! summaries and pull request comments. Logs go to stderr and never mix with
//! this output.

use std::io::{self, Write};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::{OutputContext, OutputFormat};

/// A command result that can be printed in every `--format`.
pub trait Renderable: Serialize {
    /// Render as human-readable text to the given writer.
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()>;

    /// Render as markdown. Defaults to text rendering.
    fn render_markdown(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        self.render_text(w, ctx)
    }
}

/// Prints `result` to stdout in the format selected by `ctx`.
pub fn render<T: Renderable>(result: &T, ctx: &OutputContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(result).context("Failed to serialize to JSON")?;
            println!("{json}");
        }
        OutputFormat::Yaml => {
            let yaml = serde_saphyr::to_string(result).context("Failed to serialize to YAML")?;
            println!("{yaml}");
        }
        OutputFormat::Markdown => {
            result
                .render_markdown(&mut io::stdout(), ctx)
                .context("Failed to render markdown")?;
        }
        OutputFormat::Text => {
            result
                .render_text(&mut io::stdout(), ctx)
                .context("Failed to render text")?;
        }
    }
    Ok(())
}

mod config;
mod filter;
mod patterns;
mod summary;
