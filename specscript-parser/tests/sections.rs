//! Sectionizer tests
//!
//! Tests how raw lines are grouped into sections and classified:
//! - Use the verified samples for whole documents
//! - Use assert_sections for deep structure verification
//! - Small inline sources only for single-rule cases

use rstest::rstest;
use specscript_parser::script::testing::{assert_sections, samples};
use specscript_parser::{sectionize, ContentItem};

#[test]
fn test_auth_module_sections() {
    let sections = samples::auth_module().sections();

    assert_sections(&sections)
        .section_count(4)
        .section(0, |s| {
            s.kind("meta")
                .title(None)
                .item_count(4)
                .kv(0, "Title", "User Authentication Module")
                .kv(1, "Version", "1.0")
                .kv(2, "Author", "Jane Doe")
                .kv(3, "Date", "2024-06-15");
        })
        .section(1, |s| {
            s.kind("entity")
                .title(Some("User"))
                .item_count(3)
                .kv(0, "id", "UUID, required, unique")
                .kv(2, "password_hash", "string, required");
        })
        .section(2, |s| {
            s.kind("usecase")
                .title(Some("RegisterUser"))
                .item_kinds(&["kv", "kv", "kv", "kv", "step", "step", "step", "step", "step"])
                .kv(3, "Steps", "")
                .step(4, "1. Validate email format")
                .step(8, "5. Return user_id");
        })
        .section(3, |s| {
            s.kind("constraint")
                .title(None)
                .list(0, "Password must be at least 8 characters.")
                .list(1, "Email must be unique.");
        });
}

#[test]
fn test_edge_cases_sections() {
    let sections = samples::edge_cases().sections();

    // Orphan lines and everything under the malformed header are gone
    assert_sections(&sections)
        .section_count(2)
        .section(0, |s| {
            s.kind("usecase")
                .title(Some("ResetPassword"))
                .item_kinds(&["step", "kv", "step", "list", "step", "kv", "kv"])
                .kv(5, "4. Note", "old sessions are revoked");
        })
        .section(1, |s| {
            s.kind("entity")
                .title(Some("Token"))
                .kv(0, "title", "ignored in favour of the header title")
                .kv(1, "value", "string,");
        });
}

#[test]
fn test_crlf_sample() {
    let sections = samples::crlf().sections();

    assert_sections(&sections)
        .section_count(2)
        .section(0, |s| {
            s.kind("meta").kv(0, "Title", "Windows line endings").kv(1, "Version", "2.0");
        })
        .section(1, |s| {
            s.kind("constraint").list(0, "Tokens expire after 15 minutes.");
        });
}

#[rstest]
#[case::kv("name: value", ContentItem::kv("name", "value"))]
#[case::kv_first_colon("time: 12:30", ContentItem::kv("time", "12:30"))]
#[case::kv_empty_value("Steps:", ContentItem::kv("Steps", ""))]
#[case::kv_wins_over_step("1. Note: careful", ContentItem::kv("1. Note", "careful"))]
#[case::step("3. Hash password", ContentItem::step("3. Hash password"))]
#[case::step_multi_digit("10. Done", ContentItem::step("10. Done"))]
#[case::list_sentence("Email must be unique.", ContentItem::list("Email must be unique."))]
#[case::list_decimal("2.5 seconds max", ContentItem::list("2.5 seconds max"))]
#[case::list_dash("- bullet", ContentItem::list("- bullet"))]
fn test_line_classification(#[case] line: &str, #[case] expected: ContentItem) {
    let sections = sectionize(["@section", line]);
    assert_eq!(sections[0].content(), &[expected]);
}

#[rstest]
#[case::bare("@meta", "meta", None)]
#[case::titled("@entity User", "entity", Some("User"))]
#[case::long_title("@usecase Register a user", "usecase", Some("Register a user"))]
#[case::indented("    @flow  Checkout", "flow", Some("Checkout"))]
#[case::underscore("@data_model Order", "data_model", Some("Order"))]
#[case::trailing_spaces("@entity User  ", "entity", Some("User"))]
#[case::blank_title("@meta   ", "meta", None)]
fn test_headers(#[case] header: &str, #[case] kind: &str, #[case] title: Option<&str>) {
    let sections = sectionize([header]);
    assert_sections(&sections).section_count(1).section(0, |s| {
        s.kind(kind).title(title).item_count(0);
    });
}

#[rstest]
#[case::empty(&[])]
#[case::blank(&["", "   ", "\t"])]
#[case::comments(&["# title", "  # indented", "#@meta"])]
#[case::orphans(&["no header yet", "key: value", "1. step"])]
fn test_inputs_without_sections(#[case] lines: &[&str]) {
    assert!(sectionize(lines).is_empty());
}

#[test]
fn test_meta_with_n_kv_lines() {
    let mut lines = vec!["@meta".to_string()];
    lines.extend((0..7).map(|i| format!("  key{}: value{}", i, i)));

    let sections = sectionize(&lines);
    assert_sections(&sections).section_count(1).section(0, |s| {
        s.kind("meta")
            .item_count(7)
            .kv(0, "key0", "value0")
            .kv(6, "key6", "value6");
    });
}

#[test]
fn test_malformed_header_does_not_attach_to_previous_section() {
    let sections = sectionize(["@meta", "a: 1", "@", "b: 2"]);

    assert_sections(&sections).section_count(1).section(0, |s| {
        s.kind("meta").item_count(1).kv(0, "a", "1");
    });
}
