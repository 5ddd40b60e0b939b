//! # specscript
//!
//! A parser for the spec-script format.
//!
//! A spec-script document is a sequence of `@type [title]` headers, each followed by content
//! lines. Content lines are `key: value` pairs, numbered steps (`1. Do something`) or plain list
//! lines. Blank lines and `#` comments are ignored.
//!
//! Processing happens in two passes:
//!
//!   raw lines ──sectionize──▶ Vec<Section> ──structure──▶ Structured
//!
//! The section list is the primary view and keeps every classified line in source order. The
//! structured view folds each section into a flat record, which is what renderers consume.
//!
//! Neither pass can fail: the reader is permissive and malformed input degrades to
//! dropped lines rather than errors. Only the edges (file loading, serialization) are fallible,
//! see [loader](script::loader).

pub mod script;

pub use script::ast::{ContentItem, Section};
pub use script::formats::{FormatError, FormatOptions, FormatRegistry, Formatter};
pub use script::loader::{LoaderError, ScriptLoader};
pub use script::sectionizer::sectionize;
pub use script::structuring::{structure, Record, Structured, Value};
