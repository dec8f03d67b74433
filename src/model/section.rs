//! Section data structure.

use crate::utils::content_fingerprint;
use serde::{Deserialize, Serialize};

/// A contiguous span of a document between one heading line and the next
/// (or end of document).
///
/// Sections of one document are non-overlapping, appear in document order,
/// and satisfy `start_line < end_line`. The title is never empty; documents
/// with zero recognized headings simply yield zero sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Normalized heading text (trimmed, case-preserving)
    pub title: String,
    /// 0-based line offset of the heading line
    pub start_line: usize,
    /// 0-based line offset one past the last line of the span (exclusive)
    pub end_line: usize,
    /// Non-heading, non-blank lines of the span, joined with `\n`
    pub body: String,
    /// 16-hex-digit xxh3 hash of the body, the cross-document identity key
    pub content_fingerprint: String,
    /// Whitespace-split token count of the body
    pub word_count: usize,
}

impl Section {
    /// Build a section from its span, deriving fingerprint and word count.
    #[must_use]
    pub fn new(title: String, start_line: usize, end_line: usize, body: String) -> Self {
        let content_fingerprint = content_fingerprint(&body);
        let word_count = body.split_whitespace().count();
        Self {
            title,
            start_line,
            end_line,
            body,
            content_fingerprint,
            word_count,
        }
    }

    /// Number of source lines covered by this section, heading included.
    #[must_use]
    pub fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}
