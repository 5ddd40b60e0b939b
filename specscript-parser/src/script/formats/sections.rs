//! JSON dump of the section list
//!
//! Unlike the structured formats this keeps every classified line, tagged with its kind, in
//! source order. Handy to check how a line was classified.

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::script::ast::Section;

/// Formatter implementation for the sections format
pub struct SectionsFormatter;

impl Formatter for SectionsFormatter {
    fn name(&self) -> &str {
        "sections"
    }

    fn serialize(
        &self,
        sections: &[Section],
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let mut output = if options.pretty {
            serde_json::to_string_pretty(sections)?
        } else {
            serde_json::to_string(sections)?
        };
        output.push('\n');
        Ok(output)
    }

    fn description(&self) -> &str {
        "Section list as JSON, with every content line tagged kv/step/list"
    }
}
