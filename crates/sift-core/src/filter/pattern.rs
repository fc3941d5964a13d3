// SPDX-License-Identifier: Apache-2.0

//! Filter pattern compiler.
//!
//! A filter string holds whitespace-separated expressions of the form
//! `[+|-]FILE_GLOB[:RULE_GLOB]`. A leading `-` excludes matching findings,
//! a leading `+` (or no sign) includes them. The characters `+`, `-`, `\`
//! and `:` can be escaped with `\`, and an escaped space does not split.
//!
//! ```
//! use sift_core::filter::compile_patterns;
//!
//! let patterns = compile_patterns("-**/test/** +**/test/**:java/sql-injection").unwrap();
//! assert_eq!(patterns.len(), 2);
//! assert!(!patterns[0].sign);
//! assert_eq!(patterns[1].rule_glob().as_str(), "java/sql-injection");
//! ```

use serde::Serialize;
use tracing::info;

use super::glob::Glob;
use crate::error::SiftError;

/// Rule glob used when an expression has no `:` part.
pub const DEFAULT_RULE_PATTERN: &str = "**";

const ESCAPE_CHAR: char = '\\';
const SEPARATOR_CHAR: char = ':';

/// A compiled include/exclude pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    /// `true` keeps matching findings, `false` drops them.
    pub sign: bool,
    /// Glob applied to the location URI.
    #[serde(rename = "file_pattern")]
    file: Glob,
    /// Glob applied to the rule ID.
    #[serde(rename = "rule_pattern")]
    rule: Glob,
}

impl Pattern {
    /// Parses a single pattern expression.
    ///
    /// # Errors
    ///
    /// Returns `SiftError::InvalidPattern` if the expression has more than one
    /// unescaped `:`, or `SiftError::InvalidGlob` if either glob misuses `**`.
    pub fn parse(expression: &str) -> Result<Self, SiftError> {
        let (sign, rest) = split_sign(expression);
        let (file_pattern, rule_pattern) = separate_file_and_rule(rest)?;
        let rule_pattern = rule_pattern
            .filter(|rule| !rule.is_empty())
            .unwrap_or_else(|| DEFAULT_RULE_PATTERN.to_string());

        Ok(Self {
            sign,
            file: Glob::new(&file_pattern)?,
            rule: Glob::new(&rule_pattern)?,
        })
    }

    /// Glob applied to location URIs.
    #[must_use]
    pub fn file_glob(&self) -> &Glob {
        &self.file
    }

    /// Glob applied to rule IDs.
    #[must_use]
    pub fn rule_glob(&self) -> &Glob {
        &self.rule
    }

    /// Returns true if both the URI and the rule ID match this pattern.
    #[must_use]
    pub fn matches(&self, uri: &str, rule_id: &str) -> bool {
        self.rule.matches(rule_id) && self.file.matches(uri)
    }
}

/// Compiles a filter string into an ordered list of patterns.
///
/// An empty or all-whitespace string yields no patterns, which keeps every
/// finding.
///
/// # Errors
///
/// Fails on the first malformed expression; no partial list is returned.
pub fn compile_patterns(filter: &str) -> Result<Vec<Pattern>, SiftError> {
    split_expressions(filter)
        .iter()
        .map(|expression| {
            let pattern = Pattern::parse(expression)?;
            info!(
                "files: {}, rules: {} (include: {})",
                pattern.file, pattern.rule, pattern.sign
            );
            Ok(pattern)
        })
        .collect()
}

/// Splits a filter string on unescaped whitespace.
///
/// Escape sequences are kept verbatim in the tokens; they are resolved by
/// [`Pattern::parse`].
#[must_use]
pub fn split_expressions(filter: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut chars = filter.chars();

    while let Some(c) = chars.next() {
        if c == ESCAPE_CHAR {
            current.push(c);
            if let Some(escaped) = chars.next() {
                current.push(escaped);
            }
        } else if c.is_whitespace() {
            if !current.is_empty() {
                tokens.push(std::mem::take(&mut current));
            }
        } else {
            current.push(c);
        }
    }

    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

fn split_sign(expression: &str) -> (bool, &str) {
    if let Some(rest) = expression.strip_prefix('-') {
        (false, rest)
    } else if let Some(rest) = expression.strip_prefix('+') {
        (true, rest)
    } else {
        (true, expression)
    }
}

fn is_escapable(c: char) -> bool {
    matches!(c, '+' | '-' | ESCAPE_CHAR | SEPARATOR_CHAR)
}

/// Splits at the single unescaped `:`, resolving escapes on the way.
///
/// A `\` in front of anything other than `+ - \ :` is kept as-is so the glob
/// matcher can treat it as an escape.
fn separate_file_and_rule(pattern: &str) -> Result<(String, Option<String>), SiftError> {
    let mut file_pattern = String::new();
    let mut rule_pattern: Option<String> = None;
    let mut chars = pattern.chars().peekable();

    while let Some(mut c) = chars.next() {
        if c == SEPARATOR_CHAR {
            if rule_pattern.is_some() {
                return Err(SiftError::InvalidPattern {
                    pattern: pattern.to_string(),
                    reason: "Contains more than one separator!".to_string(),
                });
            }
            rule_pattern = Some(String::new());
            continue;
        }

        if c == ESCAPE_CHAR
            && let Some(&next) = chars.peek()
            && is_escapable(next)
        {
            c = next;
            chars.next();
        }

        match rule_pattern.as_mut() {
            Some(rule) => rule.push(c),
            None => file_pattern.push(c),
        }
    }

    Ok((file_pattern, rule_pattern))
}
