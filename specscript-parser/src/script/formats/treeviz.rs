//! Treeviz formatter for the section list
//!
//! One line per node, nesting shown with box drawing connectors, long labels truncated to 30
//! characters. Each line kind gets its own icon:
//!
//!     Document: ⧉
//!     Section: §
//!     Kv: ≔
//!     Step: №
//!     List: •
//!
//! Example:
//!
//! ⧉ 2 sections
//! ├─ § entity User
//! │  ├─ ≔ id = UUID, required, unique
//! │  └─ ≔ email = string, required
//! └─ § constraint
//!    └─ • Password must be at least 8 ch...

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::script::ast::{ContentItem, Section};

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}

fn item_icon(item: &ContentItem) -> &'static str {
    match item {
        ContentItem::Kv { .. } => "≔",
        ContentItem::Step { .. } => "№",
        ContentItem::List { .. } => "•",
    }
}

fn item_label(item: &ContentItem) -> String {
    match item {
        ContentItem::Kv { key, value } if value.is_empty() => format!("{} =", key),
        ContentItem::Kv { key, value } => format!("{} = {}", key, value),
        ContentItem::Step { text } | ContentItem::List { text } => text.clone(),
    }
}

fn section_label(section: &Section) -> String {
    match section.title() {
        Some(title) => format!("{} {}", section.kind(), title),
        None => section.kind().to_string(),
    }
}

pub fn to_treeviz_str(sections: &[Section]) -> String {
    let mut output = format!("⧉ {} sections\n", sections.len());

    for (i, section) in sections.iter().enumerate() {
        let is_last = i == sections.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{} § {}\n", connector, truncate(&section_label(section), 30)));

        let child_prefix = if is_last { "   " } else { "│  " };
        let child_count = section.content().len();
        for (j, item) in section.content().iter().enumerate() {
            let connector = if j == child_count - 1 { "└─" } else { "├─" };
            output.push_str(&format!(
                "{}{} {} {}\n",
                child_prefix,
                connector,
                item_icon(item),
                truncate(&item_label(item), 30)
            ));
        }
    }

    output
}

/// Formatter implementation for treeviz format
pub struct TreevizFormatter;

impl Formatter for TreevizFormatter {
    fn name(&self) -> &str {
        "treeviz"
    }

    fn serialize(
        &self,
        sections: &[Section],
        _options: &FormatOptions,
    ) -> Result<String, FormatError> {
        Ok(to_treeviz_str(sections))
    }

    fn description(&self) -> &str {
        "Visual tree of sections and classified lines with Unicode icons"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::sectionizer::sectionize;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }

    #[test]
    fn test_treeviz_layout() {
        let sections = sectionize([
            "@usecase Login",
            "  Input: email",
            "  1. Check password",
            "@constraint",
            "  Password must be at least 8 characters.",
        ]);

        let expected = "\
⧉ 2 sections
├─ § usecase Login
│  ├─ ≔ Input = email
│  └─ № 1. Check password
└─ § constraint
   └─ • Password must be at least 8 ch...
";
        assert_eq!(to_treeviz_str(&sections), expected);
    }

    #[test]
    fn test_treeviz_empty() {
        assert_eq!(to_treeviz_str(&[]), "⧉ 0 sections\n");
    }
}
