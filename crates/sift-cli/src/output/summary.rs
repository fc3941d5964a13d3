// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::SummaryResult;

use super::Renderable;

impl Renderable for SummaryResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let summary = &self.summary;

        writeln!(w)?;
        writeln!(
            w,
            "{}",
            style(format!(
                "{} findings reported by {}",
                summary.total, summary.tool_name
            ))
            .bold()
        )?;

        if summary.total == 0 {
            writeln!(w)?;
            writeln!(w, "{}", style("Nothing to report.").green())?;
        } else {
            writeln!(w)?;
            writeln!(
                w,
                "  {:<50} {}",
                style("Rule").cyan(),
                style("Findings").cyan()
            )?;
            writeln!(w, "  {}", style("-".repeat(60)).dim())?;
            for rule in &summary.by_rule {
                writeln!(w, "  {:<50} {}", rule.rule_id, rule.total)?;
            }

            writeln!(w)?;
            let levels: Vec<String> = summary
                .by_level
                .iter()
                .map(|(level, count)| format!("{level}: {count}"))
                .collect();
            writeln!(w, "  Levels: {}", levels.join(", "))?;
        }

        if let Some(report) = &self.report {
            writeln!(w)?;
            writeln!(
                w,
                "{} Wrote report to {}",
                style("✓").green(),
                report.display()
            )?;
        }
        writeln!(w)?;
        Ok(())
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        let summary = &self.summary;

        writeln!(w, "## Findings Summary\n")?;
        writeln!(w, "**Tool:** {}\n", summary.tool_name)?;
        writeln!(w, "**Total:** {}\n", summary.total)?;
        if summary.by_rule.is_empty() {
            return Ok(());
        }

        writeln!(w, "| Rule | Findings |")?;
        writeln!(w, "|---|---:|")?;
        for rule in &summary.by_rule {
            writeln!(w, "| `{}` | {} |", rule.rule_id, rule.total)?;
        }

        writeln!(w, "\n| Level | Findings |")?;
        writeln!(w, "|---|---:|")?;
        for (level, count) in &summary.by_level {
            writeln!(w, "| {level} | {count} |")?;
        }
        Ok(())
    }
}
