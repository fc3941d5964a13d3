// SPDX-License-Identifier: Apache-2.0

//! Glob matching for file paths and rule identifiers.
//!
//! Supports `*` (any characters within one path component), `?` (exactly one
//! character), `\` (escape the next character) and `**` (zero or more whole
//! path components). Patterns are always `/`-delimited; candidates may use
//! either `/` or `\` as separators.
//!
//! Both the component level and the character level are matched with a
//! bottom-up table over (pattern index, candidate index), one row at a time.
//! Work is bounded by the product of the two lengths and stack usage does not
//! grow with the candidate, so arbitrarily long URIs or rule IDs are safe.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Serialize, Serializer};

use crate::error::SiftError;

/// `**` preceded by something other than a separator.
static PRECEDED_BY_NON_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^/\\]\*\*").expect("valid glob validation regex"));

/// `**` at the start, followed by something other than `/`.
static LEADING_FOLLOWED_BY_NON_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*[^/]").expect("valid glob validation regex"));

/// Unescaped `**` followed by something other than `/`.
static FOLLOWED_BY_NON_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\\]\*\*[^/]").expect("valid glob validation regex"));

/// Runs of `/` or `\` in candidate strings.
static CANDIDATE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\\/]+").expect("valid separator regex"));

const RECURSIVE_WILDCARD: &str = "**";

/// One `/`-delimited piece of a compiled glob.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Component {
    /// `**`: zero or more whole path components.
    Recursive,
    /// Any other component, matched character by character.
    Segment(Vec<Token>),
}

/// One matching unit of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    /// `*`
    Star,
    /// `?`
    AnyChar,
    /// A plain or `\`-escaped character.
    Literal(char),
    /// A `\` with nothing after it; matches nothing.
    TrailingEscape,
}

fn tokenize(segment: &str) -> Vec<Token> {
    let mut tokens = Vec::with_capacity(segment.len());
    let mut chars = segment.chars();
    while let Some(c) = chars.next() {
        tokens.push(match c {
            '*' => Token::Star,
            '?' => Token::AnyChar,
            '\\' => chars.next().map_or(Token::TrailingEscape, Token::Literal),
            other => Token::Literal(other),
        });
    }
    tokens
}

/// A validated glob pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Glob {
    source: String,
    components: Vec<Component>,
}

impl Glob {
    /// Validates and compiles a glob pattern.
    ///
    /// A trailing `/` is ignored and consecutive `**` components collapse
    /// into a single one.
    ///
    /// # Errors
    ///
    /// Returns `SiftError::InvalidGlob` if `**` is adjacent to anything other
    /// than a path separator or the string boundary.
    pub fn new(pattern: &str) -> Result<Self, SiftError> {
        if PRECEDED_BY_NON_SEPARATOR.is_match(pattern)
            || LEADING_FOLLOWED_BY_NON_SEPARATOR.is_match(pattern)
            || FOLLOWED_BY_NON_SEPARATOR.is_match(pattern)
        {
            return Err(SiftError::InvalidGlob {
                pattern: pattern.to_string(),
            });
        }

        let trimmed = pattern.strip_suffix('/').unwrap_or(pattern);
        let mut components: Vec<Component> = trimmed
            .split('/')
            .map(|part| {
                if part == RECURSIVE_WILDCARD {
                    Component::Recursive
                } else {
                    Component::Segment(tokenize(part))
                }
            })
            .collect();
        components.dedup_by(|a, b| *a == Component::Recursive && *b == Component::Recursive);

        Ok(Self {
            source: pattern.to_string(),
            components,
        })
    }

    /// The pattern exactly as given by the user.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns true if `candidate` matches this glob.
    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        let candidate = candidate.strip_suffix('/').unwrap_or(candidate);
        let parts: Vec<Vec<char>> = CANDIDATE_SEPARATORS
            .split(candidate)
            .map(|part| part.chars().collect())
            .collect();

        match_components(&self.components, &parts)
    }
}

impl fmt::Display for Glob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.source)
    }
}

impl Serialize for Glob {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.source)
    }
}

/// Validates `pattern` and matches it against `candidate` in one step.
///
/// # Errors
///
/// Returns `SiftError::InvalidGlob` if the pattern is malformed.
pub fn matches(pattern: &str, candidate: &str) -> Result<bool, SiftError> {
    Ok(Glob::new(pattern)?.matches(candidate))
}

/// Component-wise match of a glob against a split candidate.
///
/// `next[ci]` holds whether `pattern[pi + 1..]` matches `candidate[ci..]`;
/// `row` is filled for `pattern[pi..]` from the end of the candidate back.
fn match_components(pattern: &[Component], candidate: &[Vec<char>]) -> bool {
    let len = candidate.len();
    let mut next = vec![false; len + 1];
    next[len] = true;
    let mut row = vec![false; len + 1];

    for (pi, component) in pattern.iter().enumerate().rev() {
        // An exhausted candidate only matches a lone trailing `**`
        row[len] = pi + 1 == pattern.len() && *component == Component::Recursive;

        for ci in (0..len).rev() {
            row[ci] = match component {
                Component::Recursive => row[ci + 1] || next[ci],
                Component::Segment(tokens) => {
                    next[ci + 1] && match_segment(tokens, &candidate[ci])
                }
            };
        }
        std::mem::swap(&mut row, &mut next);
    }

    next[0]
}

/// Matches a single path component against a single pattern segment.
fn match_segment(pattern: &[Token], candidate: &[char]) -> bool {
    let len = candidate.len();
    let mut next = vec![false; len + 1];
    next[len] = true;
    let mut row = vec![false; len + 1];

    for (pi, &token) in pattern.iter().enumerate().rev() {
        // An exhausted candidate only matches a lone trailing `*`
        row[len] = pi + 1 == pattern.len() && token == Token::Star;

        for ci in (0..len).rev() {
            let ch = candidate[ci];
            row[ci] = match token {
                Token::Star => row[ci + 1] || next[ci],
                Token::AnyChar => next[ci + 1],
                Token::Literal(literal) => literal == ch && next[ci + 1],
                Token::TrailingEscape => false,
            };
        }
        std::mem::swap(&mut row, &mut next);
    }

    next[0]
}
