//! Structure diff engine orchestrating the comparison stages.
//!
//! The engine runs the fixed forward pipeline over two raw texts: segment,
//! measure, match by title, detect movements, classify structural changes,
//! score integrity, identify critical issues, and assemble the change
//! summary. Every stage is total over decoded strings, so `compare` cannot
//! fail; fallible concerns (file loading, extraction, narrative) live at the
//! boundaries.

use crate::diff::classifier::MajorChanges;
use crate::diff::matcher::{match_sections, ContentChanges};
use crate::diff::movement::{detect_movements, Movement};
use crate::integrity::{identify_critical_issues, CriticalIssue, IntegrityAssessment};
use crate::model::DocumentStructure;
use crate::segmenter::SectionSegmenter;
use crate::stats::StatsComparison;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Complete output of one structure comparison.
///
/// All fields besides `timestamp` are deterministic functions of the two
/// input texts: identical inputs serialize identically modulo the timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Whole-document size statistics and red flags
    pub statistics: StatsComparison,
    /// Segmented structure of the older document
    pub structure_a: DocumentStructure,
    /// Segmented structure of the newer document
    pub structure_b: DocumentStructure,
    /// Title-keyed added/removed/modified/unchanged lists
    pub content_changes: ContentChanges,
    /// Sections present in both documents at different ordinals
    pub movements: Vec<Movement>,
    /// Aggregate structural flags
    pub major_changes: MajorChanges,
    /// 0-100 reliability score with warnings and a recommendation
    pub integrity_assessment: IntegrityAssessment,
    /// Human-readable change summary, one finding per line
    pub change_summary: Vec<String>,
    /// Issues needing direct attention, separate from scoring
    pub critical_issues: Vec<CriticalIssue>,
    /// Report creation time
    pub timestamp: DateTime<Utc>,
}

impl ComparisonReport {
    /// True when any section was added, removed, modified, or moved.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.content_changes.has_changes() || !self.movements.is_empty()
    }
}

/// The document structure diff engine.
///
/// Stateless apart from the segmenter's compiled ruleset; one engine can
/// serve any number of comparisons, concurrently.
///
/// # Example
///
/// ```
/// use polidiff::diff::StructureDiffEngine;
///
/// let engine = StructureDiffEngine::new();
/// let report = engine.compare(
///     "1. Intro\nOld text\n",
///     "1. Intro\nNew text\n",
///     "policy-2023.txt",
///     "policy-2024.txt",
/// );
/// assert_eq!(report.content_changes.summary.modifications, 1);
/// ```
#[derive(Debug)]
pub struct StructureDiffEngine {
    segmenter: SectionSegmenter,
}

impl StructureDiffEngine {
    /// Create an engine with the current heading ruleset.
    #[must_use]
    pub fn new() -> Self {
        Self {
            segmenter: SectionSegmenter::new(),
        }
    }

    /// Compare two document texts and produce the full report.
    ///
    /// Total over decoded strings: empty inputs yield zero-section
    /// structures, not errors. Labels are used for reporting only.
    #[must_use]
    pub fn compare(
        &self,
        text_a: &str,
        text_b: &str,
        label_a: &str,
        label_b: &str,
    ) -> ComparisonReport {
        tracing::debug!(label_a, label_b, "starting structure comparison");

        let statistics = StatsComparison::compare(text_a, text_b);
        let structure_a = self.segmenter.segment(text_a, label_a);
        let structure_b = self.segmenter.segment(text_b, label_b);

        let content_changes = match_sections(&structure_a, &structure_b);
        let movements = detect_movements(&structure_a, &structure_b);
        let major_changes = MajorChanges::evaluate(&structure_a, &structure_b, &statistics);

        let integrity_assessment =
            IntegrityAssessment::assess(&statistics, &content_changes, &movements, &major_changes);
        let critical_issues =
            identify_critical_issues(&statistics, &content_changes, &major_changes);
        let change_summary =
            build_change_summary(&statistics, &content_changes, &movements, &major_changes);

        tracing::debug!(
            additions = content_changes.summary.additions,
            deletions = content_changes.summary.deletions,
            modifications = content_changes.summary.modifications,
            movements = movements.len(),
            integrity = integrity_assessment.score,
            "structure comparison complete"
        );

        ComparisonReport {
            statistics,
            structure_a,
            structure_b,
            content_changes,
            movements,
            major_changes,
            integrity_assessment,
            change_summary,
            critical_issues,
            timestamp: Utc::now(),
        }
    }

    /// Assemble a zero-change report for byte-identical inputs.
    ///
    /// Callers that detect identical texts before invoking [`compare`]
    /// (see `validate_pair`) use this to skip the matching stages: the
    /// document is segmented once, every title is unchanged, and the
    /// integrity score is a flat 100.
    ///
    /// [`compare`]: Self::compare
    #[must_use]
    pub fn identical_report(
        &self,
        text: &str,
        label_a: &str,
        label_b: &str,
    ) -> ComparisonReport {
        let statistics = StatsComparison::compare(text, text);
        let structure_a = self.segmenter.segment(text, label_a);
        let mut structure_b = structure_a.clone();
        structure_b.label = label_b.to_string();

        let unchanged: Vec<String> = structure_a.titles().map(str::to_string).collect();
        let mut content_changes = ContentChanges::default();
        content_changes.summary.unchanged = unchanged.len();
        content_changes.unchanged_sections = unchanged;

        ComparisonReport {
            statistics,
            structure_a,
            structure_b,
            content_changes,
            movements: Vec::new(),
            major_changes: MajorChanges::default(),
            integrity_assessment: IntegrityAssessment::reliable(),
            change_summary: vec!["Documents are identical - no changes detected".to_string()],
            critical_issues: Vec::new(),
            timestamp: Utc::now(),
        }
    }
}

impl Default for StructureDiffEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// One line per finding, size line always first.
fn build_change_summary(
    statistics: &StatsComparison,
    content_changes: &ContentChanges,
    movements: &[Movement],
    major_changes: &MajorChanges,
) -> Vec<String> {
    let mut lines = vec![format!(
        "**Document size change:** {:+.1}% words",
        statistics.differences.word_percentage
    )];

    let summary = &content_changes.summary;
    if summary.additions > 0 {
        lines.push(format!("**{} sections added**", summary.additions));
    }
    if summary.deletions > 0 {
        lines.push(format!("**{} sections removed**", summary.deletions));
    }
    if summary.modifications > 0 {
        lines.push(format!("**{} sections modified**", summary.modifications));
    }
    if !movements.is_empty() {
        lines.push(format!("**{} sections moved**", movements.len()));
    }

    if major_changes.massive_content_loss {
        lines.push("**CRITICAL: massive content removal**".to_string());
    }
    if major_changes.document_restructuring {
        lines.push("**WARNING: major document restructuring**".to_string());
    }

    lines
}
