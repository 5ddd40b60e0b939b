//! Line Classification
//!
//! Core classification logic for spec-script lines. Every raw line falls in exactly one of three
//! buckets, decided in this order:
//!
//! 1. Skip: blank (whitespace only) or a comment (`#` after leading whitespace)
//! 2. Header: starts with `@` once leading spaces are removed
//! 3. Content: anything else
//!
//! Content lines are then classified into a [ContentItem], again in a fixed order:
//!
//! 1. Contains a colon -> `Kv`
//! 2. Starts with a number, a period and whitespace -> `Step`
//! 3. Otherwise -> `List`
//!
//! The colon test comes first, so `1. Note: hashed` is a key/value pair and not a step.

use crate::script::ast::ContentItem;
use once_cell::sync::Lazy;
use regex::Regex;

/// `@` followed by the type word, then optionally whitespace and a title.
///
/// Not anchored at the end: `@foo-bar` yields type `foo` with no title.
static HEADER_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@(\w+)(?:\s+(.+))?").unwrap());

static STEP_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+\.\s").unwrap());

/// A parsed `@type [title]` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub kind: String,
    pub title: Option<String>,
}

/// The three line buckets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Blank or comment line, never attributed to a section.
    Skip,
    /// A line starting with `@`. `None` when the header is malformed.
    Header(Option<Header>),
    /// Any other line, with leading spaces removed.
    Content(&'a str),
}

/// Classify one raw line. Trailing `\n`/`\r` are stripped first, so both LF and CRLF input work.
pub fn classify_line(raw: &str) -> LineKind<'_> {
    let line = raw.trim_end_matches(['\n', '\r']);
    if is_skippable(line) {
        return LineKind::Skip;
    }

    // Only spaces count as indentation
    let content = line.trim_start_matches(' ');
    if content.starts_with('@') {
        return LineKind::Header(parse_header(content));
    }

    LineKind::Content(content)
}

fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

/// Parse a header line (already stripped of leading spaces).
///
/// Returns `None` unless the line is `@` followed by at least one word character. Titles are
/// trimmed and a whitespace-only title counts as absent.
pub fn parse_header(content: &str) -> Option<Header> {
    let captures = HEADER_REGEX.captures(content)?;
    let kind = captures.get(1)?.as_str().to_string();
    let title = captures
        .get(2)
        .map(|m| m.as_str().trim())
        .filter(|title| !title.is_empty())
        .map(str::to_string);

    Some(Header { kind, title })
}

/// Check if a line starts with a numbered step marker (`12. `)
pub fn is_step(content: &str) -> bool {
    STEP_REGEX.is_match(content)
}

/// Classify a content line into a [ContentItem] following the colon -> step -> list precedence.
pub fn classify_content(content: &str) -> ContentItem {
    if let Some((key, value)) = content.split_once(':') {
        return ContentItem::kv(key.trim(), value.trim());
    }

    if is_step(content) {
        return ContentItem::step(content.trim());
    }

    ContentItem::list(content.trim())
}
