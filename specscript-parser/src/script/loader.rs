//! Document loading utilities
//!
//! This module provides `ScriptLoader` - a utility for loading spec-script source from files,
//! readers or strings and running the parse passes on it. This is used by both the CLI and tests.
//!
//! # Example
//!
//! ```rust
//! use specscript_parser::{FormatOptions, ScriptLoader};
//!
//! // From file
//! let loader = ScriptLoader::from_path("auth.specscript").unwrap();
//! let sections = loader.sections();
//!
//! // From string
//! let structured = ScriptLoader::from_string("@meta\n  Version: 1.0\n").structured();
//!
//! // Rendered
//! let json = loader.render("json", &FormatOptions::default()).unwrap();
//! ```

use crate::script::ast::Section;
use crate::script::formats::{FormatError, FormatOptions, FormatRegistry};
use crate::script::sectionizer::sectionize;
use crate::script::structuring::{structure, Structured};
use std::fs;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Error that can occur when loading or rendering documents
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error when reading the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    /// Rendering error
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
}

/// Document loader with parse shortcuts
///
/// The loader owns the whole source text; parsing is done on demand and never fails.
#[derive(Debug, Clone)]
pub struct ScriptLoader {
    source: String,
}

impl ScriptLoader {
    /// Load from a file path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, LoaderError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = source.len(), "loaded spec-script file");
        Ok(ScriptLoader { source })
    }

    /// Load everything from a reader (e.g. stdin)
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, LoaderError> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(ScriptLoader { source })
    }

    /// Load from a string
    pub fn from_string<S: Into<String>>(source: S) -> Self {
        ScriptLoader {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Split the source into sections.
    ///
    /// Lines are split on `\n` only; a trailing `\r` is removed by the sectionizer.
    pub fn sections(&self) -> Vec<Section> {
        sectionize(self.source.split('\n'))
    }

    /// Parse and fold into the structured view
    pub fn structured(&self) -> Structured {
        structure(&self.sections())
    }

    /// Parse and render with one of the default formats
    pub fn render(&self, format: &str, options: &FormatOptions) -> Result<String, LoaderError> {
        self.render_with(&FormatRegistry::default(), format, options)
    }

    /// Parse and render with a format from a custom registry
    pub fn render_with(
        &self,
        registry: &FormatRegistry,
        format: &str,
        options: &FormatOptions,
    ) -> Result<String, LoaderError> {
        Ok(registry.serialize(&self.sections(), format, options)?)
    }
}
