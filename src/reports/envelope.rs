//! Response envelopes shared by every report format.
//!
//! These are the payload shapes the pipeline hands to reporters: the full
//! compare response, the single-document inspection, and the error
//! envelope. Reporters render them; they never recompute analysis.

use crate::diff::ComparisonReport;
use crate::model::{ContentCategory, Section};
use crate::stats::DocumentStats;
use crate::validate::ValidationReport;
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Compact profile of one input document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentProfile {
    pub word_count: usize,
    pub char_count: usize,
    /// Opening characters of the decoded text
    pub preview: String,
}

/// Full payload of one compare run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub success: bool,
    pub label_a: String,
    pub label_b: String,
    pub document_a: DocumentProfile,
    pub document_b: DocumentProfile,
    pub validation: ValidationReport,
    pub analysis: ComparisonReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Per-section row in an inspection payload, without the body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub title: String,
    pub start_line: usize,
    pub end_line: usize,
    pub word_count: usize,
    pub content_fingerprint: String,
}

impl From<&Section> for SectionSummary {
    fn from(section: &Section) -> Self {
        Self {
            title: section.title.clone(),
            start_line: section.start_line,
            end_line: section.end_line,
            word_count: section.word_count,
            content_fingerprint: section.content_fingerprint.clone(),
        }
    }
}

/// Payload of one inspect run: how the segmenter reads a single document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentInspection {
    pub label: String,
    pub stats: DocumentStats,
    pub section_count: usize,
    pub sections: Vec<SectionSummary>,
    /// Nonzero keyword-tally counts
    pub content_types: IndexMap<ContentCategory, usize>,
    pub preview: String,
    pub timestamp: DateTime<Utc>,
}

/// Error envelope for machine-readable output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

impl ErrorResponse {
    #[must_use]
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_summary_from_section() {
        let section = Section::new("Scope".to_string(), 3, 7, "applies to staff".to_string());
        let summary = SectionSummary::from(&section);

        assert_eq!(summary.title, "Scope");
        assert_eq!(summary.start_line, 3);
        assert_eq!(summary.end_line, 7);
        assert_eq!(summary.word_count, 3);
        assert_eq!(summary.content_fingerprint, section.content_fingerprint);
    }

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("file not found");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "file not found");
        assert!(json["timestamp"].is_string());
    }
}
