//! Structurer
//!
//! Folds the section list into a generic nested mapping:
//!
//!     section type -> [record, record, ...]
//!
//! where each record maps a key to either a string or a list of strings. The fold rules for one
//! section are:
//!
//! | Content           | Record entry                                             |
//! |-------------------|----------------------------------------------------------|
//! | `key: value`      | `key -> value`                                           |
//! | `key: a, b, c`    | `key -> [a, b, c]` (split on every comma, items trimmed) |
//! | numbered steps    | `steps -> [...]`, only when at least one step exists     |
//! | other lines       | `items -> [...]`, only when at least one line exists     |
//! | header title      | `title -> title`                                         |
//!
//! Duplicate keys inside one section overwrite the earlier value. The title is applied after
//! all content, so it replaces a literal `title:` line. Records keep insertion order, with the
//! title always first.
//!
//! The fold only reads the sections; running it twice gives equal results.

use crate::script::ast::{ContentItem, Section};
use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

pub const STEPS_KEY: &str = "steps";
pub const ITEMS_KEY: &str = "items";
pub const TITLE_KEY: &str = "title";

/// A record value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Text(String),
    List(Vec<String>),
}

impl Value {
    /// Interpret a kv value: comma-separated values become a list.
    pub fn from_kv_value(value: &str) -> Self {
        if value.contains(',') {
            Value::List(value.split(',').map(|part| part.trim().to_string()).collect())
        } else {
            Value::Text(value.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::Text(_) => None,
            Value::List(items) => Some(items),
        }
    }
}

impl From<&str> for Value {
    fn from(text: &str) -> Self {
        Value::Text(text.to_string())
    }
}

impl From<Vec<&str>> for Value {
    fn from(items: Vec<&str>) -> Self {
        Value::List(items.into_iter().map(str::to_string).collect())
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Text(text) => serializer.serialize_str(text),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
        }
    }
}

/// Insertion-ordered mapping from key to [Value] for one section.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: IndexMap<String, Value>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. An overwritten key keeps its original position.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.entries.insert(key.into(), value);
    }

    /// Insert at the front, replacing any entry with the same key.
    pub fn insert_first(&mut self, key: impl Into<String>, value: Value) {
        self.entries.shift_insert(0, key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// The structured view: section type -> records, both in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Structured {
    groups: IndexMap<String, Vec<Record>>,
}

impl Structured {
    fn push(&mut self, kind: &str, record: Record) {
        match self.groups.get_mut(kind) {
            Some(records) => records.push(record),
            None => {
                self.groups.insert(kind.to_string(), vec![record]);
            }
        }
    }

    /// Records for one section type, in source order.
    pub fn get(&self, kind: &str) -> Option<&[Record]> {
        self.groups.get(kind).map(Vec::as_slice)
    }

    /// Section types in order of first appearance.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Record])> {
        self.groups
            .iter()
            .map(|(kind, records)| (kind.as_str(), records.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for Structured {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for (kind, records) in &self.groups {
            map.serialize_entry(kind, records)?;
        }
        map.end()
    }
}

/// Fold every section into the structured view.
pub fn structure(sections: &[Section]) -> Structured {
    sections
        .iter()
        .fold(Structured::default(), |mut structured, section| {
            structured.push(section.kind(), fold_section(section));
            structured
        })
}

/// Fold one section, including its title.
pub fn fold_section(section: &Section) -> Record {
    let mut record = fold_content(section.content());
    if let Some(title) = section.title() {
        record.insert_first(TITLE_KEY, Value::Text(title.to_string()));
    }
    record
}

/// Fold content items into a record (no title handling).
pub fn fold_content(content: &[ContentItem]) -> Record {
    let mut record = Record::new();
    let mut steps = Vec::new();
    let mut items = Vec::new();

    for item in content {
        match item {
            ContentItem::Kv { key, value } => {
                record.insert(key.as_str(), Value::from_kv_value(value))
            }
            ContentItem::Step { text } => steps.push(text.clone()),
            ContentItem::List { text } => items.push(text.clone()),
        }
    }

    if !steps.is_empty() {
        record.insert(STEPS_KEY, Value::List(steps));
    }
    if !items.is_empty() {
        record.insert(ITEMS_KEY, Value::List(items));
    }
    record
}
