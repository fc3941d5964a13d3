// SPDX-License-Identifier: Apache-2.0

//! Command-line interface definition for Sift.
//!
//! Uses clap's derive API for declarative CLI parsing with noun-verb
//! subcommands where a command has more than one action.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Extended help text for the filter subcommand.
const FILTER_HELP: &str = r"PATTERNS

  Patterns are separated by whitespace and have the form [+|-]FILE[:RULE].
  A leading '-' excludes matching findings, '+' (or no sign) includes them.
  When several patterns match a finding, the last one wins.

  '**' matches any number of path components and must stand alone between
  separators. '*' matches within a component and '?' matches one character.
  Escape '+', '-', ':' and whitespace with '\'.

EXAMPLES

  Suppress findings in test code, except SQL injection:
    sift filter --input codeql.sarif --output filtered.sarif \
      --patterns '-**/test/** +**/test/**:java/sql-injection'

  Suppress every finding of one rule:
    sift filter --input codeql.sarif --output filtered.sarif \
      --patterns '-**:js/unused-local-variable'
";

/// Extended help text for the generate subcommand with shell-specific examples.
const COMPLETION_GENERATE_HELP: &str = r#"EXAMPLES

  bash
    Add to ~/.bashrc or ~/.bash_profile:
      eval "$(sift completion generate bash)"

  zsh
    Generate completion file:
      mkdir -p ~/.zsh/completions
      sift completion generate zsh > ~/.zsh/completions/_sift

    Add to ~/.zshrc (before compinit):
      fpath=(~/.zsh/completions $fpath)
      autoload -U compinit && compinit -i

  fish
    Generate completion file:
      sift completion generate fish > ~/.config/fish/completions/sift.fish

  PowerShell
    Add to $PROFILE:
      sift completion generate powershell | Out-String | Invoke-Expression
"#;

/// Output format for CLI results.
#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text with colors (default)
    #[default]
    Text,
    /// JSON output for programmatic consumption
    Json,
    /// YAML output for programmatic consumption
    Yaml,
    /// Markdown output for pull request comments and job summaries
    Markdown,
}

/// Global output configuration passed to commands.
#[derive(Clone)]
pub struct OutputContext {
    /// Output format (text, json, yaml, markdown)
    pub format: OutputFormat,
    /// Suppress non-essential output (filter statistics)
    pub quiet: bool,
    /// Enable verbose output (extra statistics, debug-level logging)
    pub verbose: bool,
}

impl OutputContext {
    /// Creates an `OutputContext` from CLI arguments.
    pub fn from_cli(format: OutputFormat, quiet: bool, verbose: bool) -> Self {
        Self {
            format,
            quiet,
            verbose,
        }
    }
}

/// Sift - SARIF finding suppression by file and rule patterns.
///
/// Removes findings from static analysis reports whose location and rule
/// match user-supplied include/exclude patterns.
#[derive(Parser)]
#[command(name = "sift")]
#[command(version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Output format (text, json, yaml, markdown)
    #[arg(long, short = 'f', global = true, default_value = "text", value_enum)]
    pub format: OutputFormat,

    /// Suppress non-essential output (filter statistics)
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable verbose output (debug-level logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Remove findings matching exclude patterns from a SARIF file
    #[command(after_long_help = FILTER_HELP)]
    Filter {
        /// SARIF file to read
        #[arg(long, short = 'i')]
        input: PathBuf,

        /// Where to write the filtered SARIF file (may equal --input)
        #[arg(long)]
        output: PathBuf,

        /// Filter expression (overrides `filter.patterns` from the config)
        #[arg(long, short = 'p', allow_hyphen_values = true)]
        patterns: Option<String>,

        /// Indentation width of the written file (overrides `filter.indent`)
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Summarize the findings of a SARIF file per rule and level
    Summary {
        /// SARIF file to read
        input: PathBuf,

        /// Also write the summary as a JSON report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },

    /// Show how a filter expression is compiled
    Patterns {
        /// Filter expression, e.g. '-**/test/** +**/test/**:java/sql-injection'
        #[arg(allow_hyphen_values = true)]
        filter: String,
    },

    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommand),

    /// Generate shell completion scripts
    #[command(subcommand)]
    Completion(CompletionCommand),
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the path of the configuration file
    Path,

    /// Print the effective configuration (file, environment and defaults)
    Show,
}

/// Completion subcommands
#[derive(Subcommand)]
pub enum CompletionCommand {
    /// Generate completion script for a shell (output to stdout)
    #[command(after_long_help = COMPLETION_GENERATE_HELP)]
    Generate {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
