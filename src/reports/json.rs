//! JSON report generator.

use super::{CompareResponse, DocumentInspection, ReportError, ReportFormat, ReportGenerator};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

#[derive(Serialize)]
struct ToolInfo {
    name: String,
    version: String,
}

impl ToolInfo {
    fn current() -> Self {
        Self {
            name: "polidiff".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Payload plus tool identification.
#[derive(Serialize)]
struct JsonReport<'a, T: Serialize> {
    tool: ToolInfo,
    #[serde(flatten)]
    payload: &'a T,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize>(&self, payload: &T) -> Result<String, ReportError> {
        let report = JsonReport {
            tool: ToolInfo::current(),
            payload,
        };
        let serialized = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        serialized.map_err(|e| ReportError::SerializationError(e.to_string()))
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_compare_report(
        &self,
        response: &CompareResponse,
    ) -> Result<String, ReportError> {
        self.render(response)
    }

    fn generate_inspect_report(
        &self,
        inspection: &DocumentInspection,
    ) -> Result<String, ReportError> {
        self.render(inspection)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::StructureDiffEngine;
    use crate::extract::preview;
    use crate::reports::DocumentProfile;
    use crate::stats::DocumentStats;
    use chrono::Utc;

    fn profile(text: &str) -> DocumentProfile {
        let stats = DocumentStats::measure(text);
        DocumentProfile {
            word_count: stats.word_count,
            char_count: stats.char_count,
            preview: preview(text),
        }
    }

    fn sample_response(narrative: Option<String>) -> CompareResponse {
        let text_a = "1. Intro\nalpha beta\n2. Body\ngamma\n";
        let text_b = "1. Intro\nalpha beta\n2. Conclusion\ndelta\n";
        let engine = StructureDiffEngine::new();
        CompareResponse {
            success: true,
            label_a: "old.txt".to_string(),
            label_b: "new.txt".to_string(),
            document_a: profile(text_a),
            document_b: profile(text_b),
            validation: crate::validate::validate_pair(text_a, text_b),
            analysis: engine.compare(text_a, text_b, "old.txt", "new.txt"),
            narrative,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_compare_report_roundtrips() {
        let response = sample_response(None);
        let report = JsonReporter::new().generate_compare_report(&response).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["tool"]["name"], "polidiff");
        assert_eq!(value["success"], true);
        assert_eq!(value["label_a"], "old.txt");
        assert!(value["analysis"]["integrity_assessment"]["score"].is_u64());
        assert!(value["analysis"]["content_changes"]["added_sections"].is_array());
        // absent narrative is omitted entirely
        assert!(value.get("narrative").is_none());
    }

    #[test]
    fn test_narrative_included_when_present() {
        let response = sample_response(Some("## Narrative\ntext".to_string()));
        let report = JsonReporter::new().generate_compare_report(&response).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();
        assert_eq!(value["narrative"], "## Narrative\ntext");
    }

    #[test]
    fn test_compact_output() {
        let response = sample_response(None);
        let report = JsonReporter::new()
            .pretty(false)
            .generate_compare_report(&response)
            .unwrap();
        assert!(!report.contains('\n'));
    }
}
