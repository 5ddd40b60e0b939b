//! Testing utilities
//!
//!     Helpers shared by the unit tests and the integration tests in `tests/`:
//!
//!         - [samples]: verified sample documents, so tests do not each invent their own
//!           slightly different spec-script source
//!         - [assert_sections]: fluent assertions over a parsed section list, with failure
//!           messages that summarize what was actually parsed
//!
//!     Example:
//!
//!     ```rust,ignore
//!     let sections = samples::auth_module().sections();
//!     assert_sections(&sections)
//!         .section_count(4)
//!         .section(1, |s| {
//!             s.kind("entity").title(Some("User")).item_count(3).kv(0, "id", "UUID, required, unique");
//!         });
//!     ```

use crate::script::ast::{ContentItem, Section};

/// Verified sample documents
pub mod samples {
    use crate::script::loader::ScriptLoader;

    /// Sample with one section of each common type
    pub const AUTH_MODULE: &str = include_str!("../../tests/fixtures/auth-module.specscript");

    /// Orphan lines, interleaved steps, a malformed header and title/kv collisions
    pub const EDGE_CASES: &str = include_str!("../../tests/fixtures/edge-cases.specscript");

    /// CRLF line endings
    pub const CRLF: &str = include_str!("../../tests/fixtures/crlf.specscript");

    pub fn auth_module() -> ScriptLoader {
        ScriptLoader::from_string(AUTH_MODULE)
    }

    pub fn edge_cases() -> ScriptLoader {
        ScriptLoader::from_string(EDGE_CASES)
    }

    pub fn crlf() -> ScriptLoader {
        ScriptLoader::from_string(CRLF)
    }
}

fn summarize_sections(sections: &[Section]) -> String {
    sections
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn summarize_items(items: &[ContentItem]) -> String {
    items
        .iter()
        .map(|i| i.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Start a fluent assertion over a section list
pub fn assert_sections(sections: &[Section]) -> SectionsAssertion<'_> {
    SectionsAssertion { sections }
}

pub struct SectionsAssertion<'a> {
    sections: &'a [Section],
}

impl<'a> SectionsAssertion<'a> {
    /// Assert the number of sections
    pub fn section_count(self, expected: usize) -> Self {
        let actual = self.sections.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} sections, found {} sections: [{}]",
            expected,
            actual,
            summarize_sections(self.sections)
        );
        self
    }

    /// Assert on a specific section by index
    pub fn section<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(SectionAssertion<'a>),
    {
        assert!(
            index < self.sections.len(),
            "Section index {} out of bounds (document has {} sections)",
            index,
            self.sections.len()
        );
        assertion(SectionAssertion {
            section: &self.sections[index],
            context: format!("sections[{}]", index),
        });
        self
    }
}

pub struct SectionAssertion<'a> {
    section: &'a Section,
    context: String,
}

impl<'a> SectionAssertion<'a> {
    pub fn kind(self, expected: &str) -> Self {
        assert_eq!(
            self.section.kind(),
            expected,
            "{}: expected section type '{}'",
            self.context,
            expected
        );
        self
    }

    pub fn title(self, expected: Option<&str>) -> Self {
        assert_eq!(
            self.section.title(),
            expected,
            "{}: unexpected title",
            self.context
        );
        self
    }

    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.section.content().len();
        assert_eq!(
            actual,
            expected,
            "{}: expected {} items, found {} items: [{}]",
            self.context,
            expected,
            actual,
            summarize_items(self.section.content())
        );
        self
    }

    fn item_at(&self, index: usize) -> &'a ContentItem {
        let content = self.section.content();
        assert!(
            index < content.len(),
            "{}: item index {} out of bounds (section has {} items)",
            self.context,
            index,
            content.len()
        );
        &content[index]
    }

    pub fn kv(self, index: usize, key: &str, value: &str) -> Self {
        let item = self.item_at(index);
        assert_eq!(
            item,
            &ContentItem::kv(key, value),
            "{}.content[{}]",
            self.context,
            index
        );
        self
    }

    pub fn step(self, index: usize, text: &str) -> Self {
        let item = self.item_at(index);
        assert_eq!(item, &ContentItem::step(text), "{}.content[{}]", self.context, index);
        self
    }

    pub fn list(self, index: usize, text: &str) -> Self {
        let item = self.item_at(index);
        assert_eq!(item, &ContentItem::list(text), "{}.content[{}]", self.context, index);
        self
    }

    /// Assert the kind of every item, in order (e.g. `["kv", "step", "list"]`)
    pub fn item_kinds(self, expected: &[&str]) -> Self {
        let actual: Vec<_> = self
            .section
            .content()
            .iter()
            .map(ContentItem::kind_name)
            .collect();
        assert_eq!(actual, expected, "{}: unexpected item kinds", self.context);
        self
    }
}
