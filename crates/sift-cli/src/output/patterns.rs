// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::PatternsResult;

use super::Renderable;

/// Human-readable name of a pattern sign.
fn action(sign: bool) -> &'static str {
    if sign { "include" } else { "exclude" }
}

impl Renderable for PatternsResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.patterns.is_empty() {
            writeln!(
                w,
                "{}",
                style("No patterns: every finding is kept.").yellow()
            )?;
            return Ok(());
        }

        writeln!(
            w,
            "  {:<4} {:<8} {:<40} {}",
            style("#").cyan(),
            style("Action").cyan(),
            style("File").cyan(),
            style("Rule").cyan()
        )?;
        writeln!(w, "  {}", style("-".repeat(70)).dim())?;

        for (index, pattern) in self.patterns.iter().enumerate() {
            let label = if pattern.sign {
                style(action(pattern.sign)).green()
            } else {
                style(action(pattern.sign)).red()
            };
            writeln!(
                w,
                "  {:<4} {:<8} {:<40} {}",
                index + 1,
                label,
                pattern.file_glob(),
                pattern.rule_glob()
            )?;
        }

        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style("The last pattern matching a finding decides whether it is kept.").dim()
        )?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Filter Patterns\n")?;
        writeln!(w, "| # | Action | File | Rule |")?;
        writeln!(w, "|---:|---|---|---|")?;
        for (index, pattern) in self.patterns.iter().enumerate() {
            writeln!(
                w,
                "| {} | {} | `{}` | `{}` |",
                index + 1,
                action(pattern.sign),
                pattern.file_glob(),
                pattern.rule_glob()
            )?;
        }
        Ok(())
    }
}
