//! Structural change classification.
//!
//! Evaluates three independent document-level conditions on top of the
//! per-section results: massive content loss, a large section-count change,
//! and restructuring measured by the content preservation ratio. Each
//! triggered condition yields a typed flag record for the report.

use crate::model::DocumentStructure;
use crate::stats::StatsComparison;
use serde::{Deserialize, Serialize};

/// Severity scale shared by structural flags and critical issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which structural condition a flag reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    MassiveContentLoss,
    SectionCountChange,
    DocumentRestructuring,
}

/// One triggered structural condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuralFlag {
    #[serde(rename = "type")]
    pub kind: FlagKind,
    pub description: String,
    pub severity: Severity,
    pub recommendation: String,
}

/// Document-level structural verdict.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MajorChanges {
    /// Word count dropped by more than half
    pub massive_content_loss: bool,
    /// Section count shifted by more than three
    pub section_count_change: bool,
    /// Less than 70% of A's content blocks reappear in B
    pub document_restructuring: bool,
    /// Fraction of A's fingerprints present in B; `None` when A has no
    /// sections, in which case the restructuring check is skipped
    pub content_preservation: Option<f64>,
    /// One record per triggered condition, in evaluation order
    pub flags: Vec<StructuralFlag>,
}

impl MajorChanges {
    /// Evaluate all structural conditions.
    #[must_use]
    pub fn evaluate(
        a: &DocumentStructure,
        b: &DocumentStructure,
        stats: &StatsComparison,
    ) -> Self {
        let mut flags = Vec::new();

        let word_percentage = stats.differences.word_percentage;
        let massive_content_loss = word_percentage < -50.0;
        if massive_content_loss {
            flags.push(StructuralFlag {
                kind: FlagKind::MassiveContentLoss,
                description: format!(
                    "the newer document contains {:.1}% fewer words than the older one",
                    -word_percentage
                ),
                severity: Severity::Critical,
                recommendation: "verify that no content was lost during conversion or editing"
                    .to_string(),
            });
        }

        let count_a = a.section_count();
        let count_b = b.section_count();
        let count_delta = (count_b as i64 - count_a as i64).unsigned_abs();
        let section_count_change = count_delta > 3;
        if section_count_change {
            let severity = if count_delta > 5 {
                Severity::High
            } else {
                Severity::Medium
            };
            flags.push(StructuralFlag {
                kind: FlagKind::SectionCountChange,
                description: format!("section count changed from {count_a} to {count_b}"),
                severity,
                recommendation: "review the document outline for merged or split sections"
                    .to_string(),
            });
        }

        let content_preservation = preservation_ratio(a, b);
        let document_restructuring = content_preservation.is_some_and(|ratio| ratio < 0.7);
        if document_restructuring {
            let ratio = content_preservation.unwrap_or(0.0);
            flags.push(StructuralFlag {
                kind: FlagKind::DocumentRestructuring,
                description: format!(
                    "only {:.0}% of the older document's content blocks reappear in the newer one",
                    ratio * 100.0
                ),
                severity: Severity::High,
                recommendation: "review the document structure for reorganization".to_string(),
            });
        }

        Self {
            massive_content_loss,
            section_count_change,
            document_restructuring,
            content_preservation,
            flags,
        }
    }

    /// True when any condition triggered.
    #[must_use]
    pub fn any(&self) -> bool {
        !self.flags.is_empty()
    }
}

/// Fraction of A's distinct fingerprints that also occur in B.
///
/// Undefined (and `None`) when A has no sections.
fn preservation_ratio(a: &DocumentStructure, b: &DocumentStructure) -> Option<f64> {
    let fingerprints_a = a.fingerprint_set();
    if fingerprints_a.is_empty() {
        return None;
    }
    let fingerprints_b = b.fingerprint_set();
    let preserved = fingerprints_a.intersection(&fingerprints_b).count();
    Some(preserved as f64 / fingerprints_a.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::SectionSegmenter;

    fn structure(text: &str, label: &str) -> DocumentStructure {
        SectionSegmenter::new().segment(text, label)
    }

    #[test]
    fn test_no_changes_no_flags() {
        let text = "1. Kop\ninhoud hier\n";
        let a = structure(text, "a.txt");
        let b = structure(text, "b.txt");
        let stats = StatsComparison::compare(text, text);

        let major = MajorChanges::evaluate(&a, &b, &stats);
        assert!(!major.any());
        assert!(!major.massive_content_loss);
        assert!(!major.section_count_change);
        assert!(!major.document_restructuring);
        assert_eq!(major.content_preservation, Some(1.0));
    }

    #[test]
    fn test_massive_loss_boundary_is_strict() {
        let empty = structure("", "x");

        // Exactly -50% does not trigger.
        let stats = StatsComparison::compare(&"w ".repeat(100), &"w ".repeat(50));
        let major = MajorChanges::evaluate(&empty, &empty, &stats);
        assert!(!major.massive_content_loss);

        // -51% does.
        let stats = StatsComparison::compare(&"w ".repeat(100), &"w ".repeat(49));
        let major = MajorChanges::evaluate(&empty, &empty, &stats);
        assert!(major.massive_content_loss);

        let flag = &major.flags[0];
        assert_eq!(flag.kind, FlagKind::MassiveContentLoss);
        assert_eq!(flag.severity, Severity::Critical);
        assert!(flag.description.contains("51.0%"));
    }

    #[test]
    fn test_section_count_change_severity() {
        let five = structure(
            "1. A\na\n2. B\nb\n3. C\nc\n4. D\nd\n5. E\ne\n",
            "a.txt",
        );
        let one = structure("1. A\na\n", "b.txt");
        let stats = StatsComparison::compare("", "");

        // Delta of 4 triggers at medium.
        let major = MajorChanges::evaluate(&five, &one, &stats);
        assert!(major.section_count_change);
        let flag = major
            .flags
            .iter()
            .find(|f| f.kind == FlagKind::SectionCountChange)
            .unwrap();
        assert_eq!(flag.severity, Severity::Medium);
        assert!(flag.description.contains("from 5 to 1"));

        // Delta of 6 escalates to high.
        let seven = structure(
            "1. A\na\n2. B\nb\n3. C\nc\n4. D\nd\n5. E\ne\n6. F\nf\n7. G\ng\n",
            "a.txt",
        );
        let major = MajorChanges::evaluate(&seven, &one, &stats);
        let flag = major
            .flags
            .iter()
            .find(|f| f.kind == FlagKind::SectionCountChange)
            .unwrap();
        assert_eq!(flag.severity, Severity::High);
    }

    #[test]
    fn test_delta_of_three_does_not_trigger() {
        let four = structure("1. A\na\n2. B\nb\n3. C\nc\n4. D\nd\n", "a.txt");
        let one = structure("1. A\na\n", "b.txt");
        let stats = StatsComparison::compare("", "");

        let major = MajorChanges::evaluate(&four, &one, &stats);
        assert!(!major.section_count_change);
    }

    #[test]
    fn test_restructuring_from_low_preservation() {
        let a = structure("1. Een\naaa\n2. Twee\nbbb\n3. Drie\nccc\n", "a.txt");
        let b = structure("1. Een\naaa\n2. Vier\nddd\n3. Vijf\neee\n", "b.txt");
        let stats = StatsComparison::compare("", "");

        let major = MajorChanges::evaluate(&a, &b, &stats);
        assert!(major.document_restructuring);

        let ratio = major.content_preservation.unwrap();
        assert!((ratio - 1.0 / 3.0).abs() < 1e-9);

        let flag = major
            .flags
            .iter()
            .find(|f| f.kind == FlagKind::DocumentRestructuring)
            .unwrap();
        assert_eq!(flag.severity, Severity::High);
        assert!(flag.description.contains("33%"));
    }

    #[test]
    fn test_empty_a_skips_restructuring_check() {
        let a = structure("", "a.txt");
        let b = structure("1. Een\naaa\n2. Twee\nbbb\n", "b.txt");
        let stats = StatsComparison::compare("", "aaa bbb");

        let major = MajorChanges::evaluate(&a, &b, &stats);
        assert!(!major.document_restructuring);
        assert_eq!(major.content_preservation, None);
    }
}
