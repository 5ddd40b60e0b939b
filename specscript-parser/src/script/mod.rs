//! Main module for spec-script library functionality

pub mod ast;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod sectionizer;
pub mod structuring;
pub mod testing;
