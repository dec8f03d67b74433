//! Critical issue extraction.
//!
//! Issues are surfaced alongside the integrity score but do not feed into
//! it: a red flag both lowers the score and produces an issue, while a
//! moderate deletion count may produce an issue without a penalty.

use crate::diff::{ContentChanges, MajorChanges, Severity};
use crate::stats::StatsComparison;
use serde::{Deserialize, Serialize};

/// Deletion count above which section removal becomes a compliance concern.
const REMOVAL_ISSUE_COUNT: usize = 5;

/// What kind of condition raised the issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// Raised from a statistics red flag
    StatisticalAnomaly,
    /// Raised when the bulk of the content disappeared
    MassiveContentLoss,
    /// Raised when many sections were removed
    SignificantSectionRemoval,
}

/// A condition needing direct reviewer attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriticalIssue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub severity: Severity,
    pub message: String,
    /// Concrete next step for the reviewer
    pub action_required: String,
}

/// Collect the issues raised by one comparison.
#[must_use]
pub fn identify_critical_issues(
    statistics: &StatsComparison,
    changes: &ContentChanges,
    major: &MajorChanges,
) -> Vec<CriticalIssue> {
    let mut issues = Vec::new();

    for flag in &statistics.red_flags {
        issues.push(CriticalIssue {
            kind: IssueKind::StatisticalAnomaly,
            severity: Severity::Critical,
            message: flag.clone(),
            action_required: "Verify document versions".to_string(),
        });
    }

    if major.massive_content_loss {
        issues.push(CriticalIssue {
            kind: IssueKind::MassiveContentLoss,
            severity: Severity::Critical,
            message: "Massive content removal may indicate wrong document versions".to_string(),
            action_required: "Manual verification required".to_string(),
        });
    }

    if changes.summary.deletions > REMOVAL_ISSUE_COUNT {
        issues.push(CriticalIssue {
            kind: IssueKind::SignificantSectionRemoval,
            severity: Severity::High,
            message: format!(
                "{} sections removed - possible compliance impact",
                changes.summary.deletions
            ),
            action_required: "Review removed content for compliance impact".to_string(),
        });
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::ChangeCounts;

    fn clean_stats() -> StatsComparison {
        StatsComparison::compare("one two three", "one two three")
    }

    fn changes_with_deletions(deletions: usize) -> ContentChanges {
        ContentChanges {
            summary: ChangeCounts {
                deletions,
                ..ChangeCounts::default()
            },
            ..ContentChanges::default()
        }
    }

    #[test]
    fn test_no_issues_for_clean_comparison() {
        let issues = identify_critical_issues(
            &clean_stats(),
            &ContentChanges::default(),
            &MajorChanges::default(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_red_flags_become_statistical_anomalies() {
        let long = "word ".repeat(500);
        let stats = StatsComparison::compare(&long, "word word");
        assert!(!stats.red_flags.is_empty());

        let issues = identify_critical_issues(
            &stats,
            &ContentChanges::default(),
            &MajorChanges::default(),
        );

        assert_eq!(issues.len(), stats.red_flags.len());
        for (issue, flag) in issues.iter().zip(&stats.red_flags) {
            assert_eq!(issue.kind, IssueKind::StatisticalAnomaly);
            assert_eq!(issue.severity, Severity::Critical);
            assert_eq!(issue.message, *flag);
            assert_eq!(issue.action_required, "Verify document versions");
        }
    }

    #[test]
    fn test_massive_content_loss_issue() {
        let major = MajorChanges {
            massive_content_loss: true,
            ..MajorChanges::default()
        };
        let issues =
            identify_critical_issues(&clean_stats(), &ContentChanges::default(), &major);

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::MassiveContentLoss);
        assert_eq!(issues[0].severity, Severity::Critical);
        assert_eq!(issues[0].action_required, "Manual verification required");
    }

    #[test]
    fn test_section_removal_issue_above_threshold() {
        let issues = identify_critical_issues(
            &clean_stats(),
            &changes_with_deletions(6),
            &MajorChanges::default(),
        );

        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].kind, IssueKind::SignificantSectionRemoval);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(
            issues[0].message,
            "6 sections removed - possible compliance impact"
        );
    }

    #[test]
    fn test_removal_threshold_boundary() {
        let issues = identify_critical_issues(
            &clean_stats(),
            &changes_with_deletions(5),
            &MajorChanges::default(),
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_issue_serialization_uses_type_field() {
        let issue = CriticalIssue {
            kind: IssueKind::MassiveContentLoss,
            severity: Severity::Critical,
            message: "m".to_string(),
            action_required: "a".to_string(),
        };
        let json = serde_json::to_string(&issue).unwrap();
        assert!(json.contains("\"type\":\"massive_content_loss\""));
    }
}
