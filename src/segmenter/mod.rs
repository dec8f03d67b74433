//! Section segmentation.
//!
//! Splits raw document text into an ordered sequence of titled sections
//! using the versioned heading ruleset, and tallies content-type keywords
//! as descriptive metadata.
//!
//! Segmentation is a single forward scan: a matching line closes the open
//! section and starts a new one, non-matching non-blank lines accumulate
//! into the open section's body, blank lines are skipped entirely, and text
//! before the first recognized heading belongs to no section (it still
//! counts toward whole-document statistics).

mod content_types;
mod rules;

pub use content_types::{tally_content_types, CONTENT_TYPE_KEYWORDS_V1};
pub use rules::{HeadingRule, HeadingRuleTag, HeadingRuleset, HEADING_RULES_V1};

use crate::model::{DocumentStructure, Section};

/// Splits document text into titled sections.
#[derive(Debug)]
pub struct SectionSegmenter {
    ruleset: &'static HeadingRuleset,
}

impl SectionSegmenter {
    /// Create a segmenter using the current (`v1`) heading ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            ruleset: &HEADING_RULES_V1,
        }
    }

    /// Segment raw text into a document structure.
    ///
    /// The label is carried through for reporting only and never affects
    /// segmentation.
    #[must_use]
    pub fn segment(&self, text: &str, label: &str) -> DocumentStructure {
        let mut sections = Vec::new();
        let mut open: Option<OpenSection> = None;
        let mut line_count = 0;

        for (idx, raw_line) in text.lines().enumerate() {
            line_count = idx + 1;
            let line = raw_line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some((_tag, title)) = self.ruleset.match_heading(line) {
                if let Some(previous) = open.take() {
                    sections.push(previous.close(idx));
                }
                open = Some(OpenSection {
                    title,
                    start_line: idx,
                    body_lines: Vec::new(),
                });
            } else if let Some(current) = open.as_mut() {
                current.body_lines.push(line.to_string());
            }
            // Lines before the first heading are discarded from structure.
        }

        if let Some(last) = open.take() {
            sections.push(last.close(line_count));
        }

        tracing::debug!(
            label,
            section_count = sections.len(),
            ruleset = self.ruleset.version,
            "segmented document"
        );

        DocumentStructure {
            label: label.to_string(),
            sections,
            content_types: tally_content_types(text),
        }
    }
}

impl Default for SectionSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

struct OpenSection {
    title: String,
    start_line: usize,
    body_lines: Vec<String>,
}

impl OpenSection {
    fn close(self, end_line: usize) -> Section {
        Section::new(
            self.title,
            self.start_line,
            end_line,
            self.body_lines.join("\n"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn segment(text: &str) -> DocumentStructure {
        SectionSegmenter::new().segment(text, "test.txt")
    }

    #[test]
    fn test_numbered_document() {
        let doc = segment("1. Intro\nHello world\n2. Body\nMore text\n");

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].title, "Intro");
        assert_eq!(doc.sections[0].body, "Hello world");
        assert_eq!(doc.sections[0].start_line, 0);
        assert_eq!(doc.sections[0].end_line, 2);
        assert_eq!(doc.sections[1].title, "Body");
        assert_eq!(doc.sections[1].body, "More text");
        assert_eq!(doc.sections[1].start_line, 2);
        assert_eq!(doc.sections[1].end_line, 4);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let doc = segment("1. Intro\n\nEerste regel.\n   \nTweede regel.\n\n2. Slot\nWij zijn klaar.\n");

        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.sections[0].body, "Eerste regel.\nTweede regel.");
        // Blank lines neither open nor close a section
        assert_eq!(doc.sections[0].start_line, 0);
        assert_eq!(doc.sections[0].end_line, 6);
    }

    #[test]
    fn test_preamble_is_discarded() {
        let doc = segment("dit is losse inleidende tekst\nzonder kopje erboven\n1. Start\ninhoud\n");

        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Start");
        assert_eq!(doc.sections[0].body, "inhoud");
        assert_eq!(doc.sections[0].start_line, 2);
    }

    #[test]
    fn test_document_without_headings() {
        let doc = segment("alleen maar lopende tekst\nover meerdere regels verspreid\n");
        assert!(doc.is_empty());
    }

    #[test]
    fn test_empty_document() {
        let doc = segment("");
        assert!(doc.is_empty());
        assert!(doc.content_types.is_empty());
    }

    #[test]
    fn test_sections_are_ordered_and_non_overlapping() {
        let text = "1. Eerste\ntekst een\n2. Tweede\ntekst twee\n3. Derde\ntekst drie\n";
        let doc = segment(text);

        assert_eq!(doc.section_count(), 3);
        for window in doc.sections.windows(2) {
            assert!(window[0].start_line < window[0].end_line);
            assert!(window[0].end_line <= window[1].start_line);
        }
    }

    #[test]
    fn test_mixed_heading_styles() {
        let text = "HOOFDLIJNEN AKKOORD\nakkoord tekst\n\
                    Artikel 1 Begrippen\nbegrippen tekst\n\
                    § 2 Toepassing\ntoepassing tekst\n\
                    Bijlage A: Tabellen\ntabellen tekst\n\
                    # Markdown kop\nmarkdown tekst\n";
        let doc = segment(text);

        let titles: Vec<_> = doc.titles().collect();
        assert_eq!(
            titles,
            vec![
                "HOOFDLIJNEN AKKOORD",
                "Begrippen",
                "Toepassing",
                "Tabellen",
                "Markdown kop"
            ]
        );
    }

    #[test]
    fn test_indented_headings_are_recognized() {
        // Lines are trimmed before rule matching
        let doc = segment("   1. Ingesprongen kop\n   inhoud hier\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title, "Ingesprongen kop");
        assert_eq!(doc.sections[0].body, "inhoud hier");
    }

    #[test]
    fn test_trailing_heading_without_body() {
        let doc = segment("1. Kop zonder inhoud\n");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].body, "");
        assert_eq!(doc.sections[0].word_count, 0);
        assert_eq!(doc.sections[0].end_line, 1);
    }

    #[test]
    fn test_content_types_computed_over_raw_text() {
        // Keywords in the discarded preamble still count
        let doc = segment("het beleid is leidend\n1. Kop\ninhoud\n");
        assert!(doc
            .content_types
            .contains_key(&crate::model::ContentCategory::Policy));
    }
}
