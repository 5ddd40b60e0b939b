//! YAML output of the structured view

use super::registry::{FormatError, FormatOptions, Formatter};
use crate::script::ast::Section;
use crate::script::structuring::structure;

/// Formatter implementation for the yaml format
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(
        &self,
        sections: &[Section],
        _options: &FormatOptions,
    ) -> Result<String, FormatError> {
        Ok(serde_yaml::to_string(&structure(sections))?)
    }

    fn description(&self) -> &str {
        "Structured view as YAML"
    }
}
