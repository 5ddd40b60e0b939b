//! Section model
//!
//!     A spec-script document is a flat sequence of sections. Each section opens with a header
//!     line of the form `@type [title]` and owns every content line up to the next header or the
//!     end of the input. There is no nesting: indentation is tolerated in the source but carries
//!     no meaning.
//!
//! Structure:
//!
//!         - Type: the word right after `@` (e.g. `entity`, `usecase`)
//!         - Title: optional free text after the type
//!         - Content: classified lines, in source order
//!
//!     Content lines are classified into three kinds, see [ContentItem]. The order of the content
//!     list is significant; the structured view relies on it for step numbering and item order.
//!
//! Examples:
//!
//!     @entity User
//!       id: UUID, required, unique
//!       email: string, required, unique
//!
//!     @constraint
//!       Password must be at least 8 characters.
//!
use serde::Serialize;
use std::fmt;

/// One `@type [title]` block and the content lines that follow it.
///
/// Sections are only built by the [sectionizer](crate::script::sectionizer) (or the test
/// builders); once returned they are read-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    #[serde(rename = "type")]
    kind: String,
    title: Option<String>,
    content: Vec<ContentItem>,
}

impl Section {
    pub fn new(kind: impl Into<String>, title: Option<String>) -> Self {
        Self {
            kind: kind.into(),
            title,
            content: Vec::new(),
        }
    }

    /// Builder-style append, mostly for tests and fixtures.
    pub fn with_item(mut self, item: ContentItem) -> Self {
        self.content.push(item);
        self
    }

    pub(crate) fn push(&mut self, item: ContentItem) {
        self.content.push(item);
    }

    /// The section type, i.e. the word after `@` in the header.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Free text after the type on the header line, if there was any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn content(&self) -> &[ContentItem] {
        &self.content
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn kv_count(&self) -> usize {
        self.content.iter().filter(|item| item.is_kv()).count()
    }

    pub fn step_count(&self) -> usize {
        self.content.iter().filter(|item| item.is_step()).count()
    }

    pub fn list_count(&self) -> usize {
        self.content.iter().filter(|item| item.is_list()).count()
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.title {
            Some(title) => write!(f, "@{} \"{}\"", self.kind, title)?,
            None => write!(f, "@{}", self.kind)?,
        }
        write!(f, " ({} items)", self.content.len())
    }
}

/// A classified content line.
///
/// Classification precedence is fixed: a line with a colon is always [ContentItem::Kv], even
/// when it also looks like a numbered step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentItem {
    /// `key: value`, split at the first colon, both sides trimmed.
    Kv { key: String, value: String },
    /// `1. Do something`, kept whole including the numeral.
    Step { text: String },
    /// Anything else.
    List { text: String },
}

impl ContentItem {
    pub fn kv(key: impl Into<String>, value: impl Into<String>) -> Self {
        ContentItem::Kv {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn step(text: impl Into<String>) -> Self {
        ContentItem::Step { text: text.into() }
    }

    pub fn list(text: impl Into<String>) -> Self {
        ContentItem::List { text: text.into() }
    }

    /// The tag used when serializing the item.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ContentItem::Kv { .. } => "kv",
            ContentItem::Step { .. } => "step",
            ContentItem::List { .. } => "list",
        }
    }

    pub fn is_kv(&self) -> bool {
        matches!(self, ContentItem::Kv { .. })
    }

    pub fn is_step(&self) -> bool {
        matches!(self, ContentItem::Step { .. })
    }

    pub fn is_list(&self) -> bool {
        matches!(self, ContentItem::List { .. })
    }
}

impl fmt::Display for ContentItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentItem::Kv { key, value } => write!(f, "[kv] {} = {}", key, value),
            ContentItem::Step { text } => write!(f, "[step] {}", text),
            ContentItem::List { text } => write!(f, "[list] {}", text),
        }
    }
}
