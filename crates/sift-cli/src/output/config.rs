// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use console::style;

use crate::cli::OutputContext;
use crate::commands::types::{ConfigPathResult, ConfigShowResult};

use super::Renderable;

impl Renderable for ConfigPathResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        if self.exists {
            writeln!(w, "{}", self.path.display())
        } else {
            writeln!(
                w,
                "{} {}",
                self.path.display(),
                style("(not found, using defaults)").dim()
            )
        }
    }
}

impl ConfigShowResult {
    fn to_toml(&self) -> io::Result<String> {
        toml::to_string(&self.config).map_err(io::Error::other)
    }
}

impl Renderable for ConfigShowResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        write!(w, "{}", self.to_toml()?)
    }

    fn render_markdown(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "## Configuration\n")?;
        writeln!(w, "```toml")?;
        write!(w, "{}", self.to_toml()?)?;
        writeln!(w, "```")
    }
}
