//! Sectionizer
//!
//! Groups classified lines into an ordered list of [Section]s.
//!
//! The scan is a single fold over the input with one piece of state: the section currently
//! being filled. A header closes the current section (even if it has no content) and opens a
//! new one. Content lines go into the open section, or are discarded when there is none.
//!
//! A malformed header (`@` not followed by a word character) still closes the current section,
//! but opens nothing. Content lines after it are dropped until the next valid header. They are
//! not attached to the previous section.

use crate::script::ast::Section;
use crate::script::lexing::{classify_content, classify_line, LineKind};

/// Fold state: sections emitted so far plus the one being filled.
#[derive(Default)]
struct ScanState {
    sections: Vec<Section>,
    current: Option<Section>,
    dropped: usize,
}

impl ScanState {
    fn close_current(&mut self) {
        if let Some(section) = self.current.take() {
            self.sections.push(section);
        }
    }

    fn finish(mut self) -> Vec<Section> {
        self.close_current();
        tracing::debug!(
            sections = self.sections.len(),
            dropped_lines = self.dropped,
            "sectionized spec-script input"
        );
        self.sections
    }
}

/// Split lines into sections.
///
/// Accepts anything that yields string-like lines, e.g. `source.lines()`, a `Vec<String>` or the
/// lines of a buffered reader. Lines may still carry their `\n` / `\r\n` terminator.
pub fn sectionize<I, S>(lines: I) -> Vec<Section>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .fold(ScanState::default(), |mut state, (index, line)| {
            scan_line(&mut state, index + 1, line.as_ref());
            state
        })
        .finish()
}

fn scan_line(state: &mut ScanState, line_number: usize, raw: &str) {
    match classify_line(raw) {
        LineKind::Skip => {}
        LineKind::Header(header) => {
            state.close_current();
            match header {
                Some(header) => {
                    state.current = Some(Section::new(header.kind, header.title));
                }
                None => {
                    tracing::debug!(
                        line = line_number,
                        "malformed section header, dropping lines until the next header"
                    );
                }
            }
        }
        LineKind::Content(content) => match state.current.as_mut() {
            Some(section) => section.push(classify_content(content)),
            None => {
                state.dropped += 1;
                tracing::trace!(line = line_number, "discarding line outside of any section");
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ast::ContentItem;

    #[test]
    fn test_empty_input() {
        let sections = sectionize(Vec::<String>::new());
        assert!(sections.is_empty());
    }

    #[test]
    fn test_single_section() {
        let sections = sectionize(["@meta", "  Title: Auth", "  Version: 1.0"]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind(), "meta");
        assert_eq!(sections[0].title(), None);
        assert_eq!(
            sections[0].content(),
            &[ContentItem::kv("Title", "Auth"), ContentItem::kv("Version", "1.0")]
        );
    }

    #[test]
    fn test_empty_section_is_still_emitted() {
        let sections = sectionize(["@first", "@second Title", "  a line"]);

        assert_eq!(sections.len(), 2);
        assert!(sections[0].is_empty());
        assert_eq!(sections[1].title(), Some("Title"));
        assert_eq!(sections[1].content(), &[ContentItem::list("a line")]);
    }

    #[test]
    fn test_lines_before_first_header_are_discarded() {
        let sections = sectionize(["orphan line", "key: value", "@meta", "a: b"]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content(), &[ContentItem::kv("a", "b")]);
    }

    #[test]
    fn test_malformed_header_drops_following_lines() {
        let sections = sectionize([
            "@meta",
            "  a: 1",
            "@ broken header",
            "  b: 2",
            "  lost line",
            "@entity User",
            "  id: UUID",
        ]);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].content(), &[ContentItem::kv("a", "1")]);
        assert_eq!(sections[1].kind(), "entity");
        assert_eq!(sections[1].content(), &[ContentItem::kv("id", "UUID")]);
    }

    #[test]
    fn test_crlf_lines() {
        let sections = sectionize(["@meta\r\n", "  Title: Auth\r\n", "\r\n"]);

        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].content(), &[ContentItem::kv("Title", "Auth")]);
    }

    #[test]
    fn test_comments_inside_section_are_skipped() {
        let sections = sectionize(["@constraint", "  # not content", "  Email must be unique."]);

        assert_eq!(sections[0].content(), &[ContentItem::list("Email must be unique.")]);
    }
}
