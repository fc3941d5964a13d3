// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::FilterResult;

use super::Renderable;

impl Renderable for FilterResult {
    fn render_text(&self, w: &mut dyn Write, ctx: &OutputContext) -> io::Result<()> {
        let stats = &self.stats;

        writeln!(
            w,
            "{} Wrote {}",
            style("✓").green(),
            style(self.output.display()).bold()
        )?;
        writeln!(
            w,
            "  Results:   {} -> {} ({} removed)",
            stats.results_before,
            stats.results_after,
            style(stats.results_removed()).yellow()
        )?;
        writeln!(
            w,
            "  Locations: {} removed of {}",
            style(stats.locations_removed).yellow(),
            stats.locations_before
        )?;

        if stats.malformed_entries > 0 {
            writeln!(
                w,
                "  {}",
                style(format!(
                    "{} malformed entries kept unchanged",
                    stats.malformed_entries
                ))
                .red()
            )?;
        }

        if ctx.verbose {
            writeln!(w, "  Input:     {}", self.input.display())?;
            writeln!(w, "  Runs:      {}", stats.runs)?;
            if self.patterns.is_empty() {
                writeln!(w, "  Patterns:  {}", style("(none)").dim())?;
            } else {
                writeln!(w, "  Patterns:  {}", self.patterns)?;
            }
        }

        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let stats = &self.stats;

        writeln!(w, "## SARIF Filter\n")?;
        writeln!(w, "**Output:** `{}`\n", self.output.display())?;
        if !self.patterns.is_empty() {
            writeln!(w, "**Patterns:** `{}`\n", self.patterns)?;
        }
        writeln!(w, "| | Before | After | Removed |")?;
        writeln!(w, "|---|---:|---:|---:|")?;
        writeln!(
            w,
            "| Results | {} | {} | {} |",
            stats.results_before,
            stats.results_after,
            stats.results_removed()
        )?;
        writeln!(
            w,
            "| Locations | {} | {} | {} |",
            stats.locations_before,
            stats.locations_before - stats.locations_removed,
            stats.locations_removed
        )?;
        if stats.malformed_entries > 0 {
            writeln!(
                w,
                "\n{} malformed entries were kept unchanged.",
                stats.malformed_entries
            )?;
        }
        Ok(())
    }
}
