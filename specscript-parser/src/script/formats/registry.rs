//! Format registry for spec-script output
//!
//! This module provides a pluggable registry system for output formats.
//! Each format implements the `Formatter` trait and can be registered with `FormatRegistry`.

use crate::script::ast::Section;
use std::collections::HashMap;
use thiserror::Error;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FormatError {
    fn from(err: serde_json::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for FormatError {
    fn from(err: serde_yaml::Error) -> Self {
        FormatError::SerializationError(err.to_string())
    }
}

/// Knobs shared by all formatters. Formats ignore the ones that do not apply to them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Multi-line, indented output for JSON based formats
    pub pretty: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Trait for section list formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "json", "treeviz")
    fn name(&self) -> &str;

    /// Serialize the sections to this format
    fn serialize(
        &self,
        sections: &[Section],
        options: &FormatOptions,
    ) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Registry of formatters, looked up by name
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Register a formatter
    ///
    /// If a formatter with the same name already exists, it will be replaced.
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Check if a format exists
    pub fn has(&self, name: &str) -> bool {
        self.formatters.contains_key(name)
    }

    /// Serialize sections using the specified format
    pub fn serialize(
        &self,
        sections: &[Section],
        format: &str,
        options: &FormatOptions,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(sections, options)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }

    /// Format names with their descriptions (sorted by name)
    pub fn describe_formats(&self) -> Vec<(&str, &str)> {
        let mut described: Vec<_> = self
            .formatters
            .values()
            .map(|f| (f.name(), f.description()))
            .collect();
        described.sort();
        described
    }

    /// Create a registry with default formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();

        registry.register(super::JsonFormatter);
        registry.register(super::YamlFormatter);
        registry.register(super::TextFormatter);
        registry.register(super::SectionsFormatter);
        registry.register(super::TreevizFormatter);

        registry
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestFormatter;
    impl Formatter for TestFormatter {
        fn name(&self) -> &str {
            "test"
        }
        fn serialize(
            &self,
            sections: &[Section],
            _options: &FormatOptions,
        ) -> Result<String, FormatError> {
            Ok(format!("{} sections", sections.len()))
        }
        fn description(&self) -> &str {
            "Test formatter"
        }
    }

    #[test]
    fn test_registry_register() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        assert!(registry.has("test"));
        assert_eq!(registry.list_formats(), vec!["test"]);
        assert_eq!(registry.describe_formats(), vec![("test", "Test formatter")]);
    }

    #[test]
    fn test_registry_serialize() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);

        let sections = vec![Section::new("meta", None)];
        let result = registry.serialize(&sections, "test", &FormatOptions::default());
        assert_eq!(result, Ok("1 sections".to_string()));
    }

    #[test]
    fn test_registry_serialize_not_found() {
        let registry = FormatRegistry::new();

        let result = registry.serialize(&[], "nonexistent", &FormatOptions::default());
        assert_eq!(result, Err(FormatError::FormatNotFound("nonexistent".into())));
    }

    #[test]
    fn test_registry_with_defaults() {
        let registry = FormatRegistry::default();
        assert_eq!(
            registry.list_formats(),
            vec!["json", "sections", "text", "treeviz", "yaml"]
        );
    }

    #[test]
    fn test_registry_replace_formatter() {
        let mut registry = FormatRegistry::new();
        registry.register(TestFormatter);
        registry.register(TestFormatter);

        assert_eq!(registry.list_formats().len(), 1);
    }

    #[test]
    fn test_format_error_display() {
        let err = FormatError::FormatNotFound("test".to_string());
        assert_eq!(format!("{err}"), "Format 'test' not found");

        let err = FormatError::SerializationError("error".to_string());
        assert_eq!(format!("{err}"), "Serialization error: error");
    }
}
