//! Output formats for parsed spec-script documents
//!
//! Every format takes the section list and renders one of the two views:
//! - the structured view (json, yaml, text)
//! - the section list itself (sections, treeviz), useful to inspect how lines were classified

pub mod json;
pub mod registry;
pub mod sections;
pub mod text;
pub mod treeviz;
pub mod yaml;

pub use json::JsonFormatter;
pub use registry::{FormatError, FormatOptions, FormatRegistry, Formatter};
pub use sections::SectionsFormatter;
pub use text::{to_text_str, TextFormatter};
pub use treeviz::{to_treeviz_str, TreevizFormatter};
pub use yaml::YamlFormatter;
