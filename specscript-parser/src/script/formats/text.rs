//! Plain text listing of the structured view
//!
//! One block per section, headed by `Section: <type>`. Text values print inline, list values
//! print one `- item` per line under their key:
//!
//!     Section: entity
//!       title: User
//!       id:
//!         - UUID
//!         - required
//!
//! Records sharing a type are separated by a blank line.

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::script::ast::Section;
use crate::script::structuring::{structure, Record, Structured, Value};

pub fn to_text_str(structured: &Structured) -> String {
    let mut output = String::new();

    for (kind, records) in structured.iter() {
        for (index, record) in records.iter().enumerate() {
            if index == 0 {
                output.push_str(&format!("Section: {}\n", kind));
            } else {
                output.push('\n');
            }
            write_record(&mut output, record);
        }
    }

    output
}

fn write_record(output: &mut String, record: &Record) {
    for (key, value) in record.iter() {
        match value {
            Value::Text(text) if text.is_empty() => output.push_str(&format!("  {}:\n", key)),
            Value::Text(text) => output.push_str(&format!("  {}: {}\n", key, text)),
            Value::List(items) => {
                output.push_str(&format!("  {}:\n", key));
                for item in items {
                    output.push_str(&format!("    - {}\n", item));
                }
            }
        }
    }
}

/// Formatter implementation for the text format
pub struct TextFormatter;

impl Formatter for TextFormatter {
    fn name(&self) -> &str {
        "text"
    }

    fn serialize(
        &self,
        sections: &[Section],
        _options: &FormatOptions,
    ) -> Result<String, FormatError> {
        Ok(to_text_str(&structure(sections)))
    }

    fn description(&self) -> &str {
        "Human readable listing of the structured view"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::sectionizer::sectionize;

    #[test]
    fn test_text_listing() {
        let sections = sectionize([
            "@entity User",
            "  id: UUID, required",
            "  email: string",
            "@entity Session",
            "@constraint",
            "  Email must be unique.",
        ]);

        let expected = "\
Section: entity
  title: User
  id:
    - UUID
    - required
  email: string

  title: Session
Section: constraint
  items:
    - Email must be unique.
";
        assert_eq!(to_text_str(&structure(&sections)), expected);
    }

    #[test]
    fn test_empty_value_has_no_trailing_space() {
        let sections = sectionize(["@usecase", "  Steps:"]);
        assert_eq!(to_text_str(&structure(&sections)), "Section: usecase\n  Steps:\n");
    }

    #[test]
    fn test_empty_record_prints_only_heading() {
        let sections = sectionize(["@meta"]);
        assert_eq!(to_text_str(&structure(&sections)), "Section: meta\n");
    }
}
