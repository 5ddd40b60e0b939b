//! JSON output of the structured view

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::script::ast::Section;
use crate::script::structuring::{structure, Structured};

/// Serialize the structured view to JSON, with a trailing newline.
pub fn to_json_str(structured: &Structured, pretty: bool) -> Result<String, FormatError> {
    let mut output = if pretty {
        serde_json::to_string_pretty(structured)?
    } else {
        serde_json::to_string(structured)?
    };
    output.push('\n');
    Ok(output)
}

/// Formatter implementation for the json format
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(
        &self,
        sections: &[Section],
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        to_json_str(&structure(sections), options.pretty)
    }

    fn description(&self) -> &str {
        "Structured view as JSON: section type -> list of records"
    }
}
