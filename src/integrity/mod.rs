//! Comparison integrity scoring.
//!
//! Estimates how trustworthy a structure comparison is. Large size
//! discrepancies, massive content loss, restructuring, and heavy churn all
//! erode the score; the result tells a reviewer whether the diff can be
//! read at face value or needs manual verification first.
//!
//! Scoring is penalty-based: the score starts at 100 and each triggered
//! condition subtracts a fixed amount, with a floor of 0.

mod issues;

pub use issues::{identify_critical_issues, CriticalIssue, IssueKind};

use crate::diff::{ContentChanges, MajorChanges, Movement};
use crate::stats::StatsComparison;
use serde::{Deserialize, Serialize};

/// Word-count discrepancy (percent, absolute) above which the score drops.
const SIZE_DISCREPANCY_PERCENT: f64 = 30.0;
/// Movement count above which the comparison is considered unstable.
const MOVEMENT_WARNING_COUNT: usize = 5;
/// Deletion count above which the comparison is considered unstable.
const DELETION_WARNING_COUNT: usize = 3;

const PENALTY_SIZE_DISCREPANCY: i32 = 30;
const PENALTY_MASSIVE_LOSS: i32 = 40;
const PENALTY_RESTRUCTURING: i32 = 20;
const PENALTY_MANY_MOVEMENTS: i32 = 15;
const PENALTY_MANY_DELETIONS: i32 = 10;

/// Reliability band derived from the integrity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrityLevel {
    /// Score 80-100: results can be read at face value.
    High,
    /// Score 60-79: interpret with care.
    Medium,
    /// Score 0-59: manual verification needed.
    Low,
}

impl IntegrityLevel {
    /// Band boundaries: 80 and above is high, 60-79 medium, below 60 low.
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::High
        } else if score >= 60 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// Outcome of integrity scoring for one comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntegrityAssessment {
    /// 0-100, higher is more trustworthy
    pub score: u8,
    pub level: IntegrityLevel,
    /// One entry per triggered penalty
    pub warnings: Vec<String>,
    /// Fixed guidance text for the level
    pub recommendation: String,
}

impl IntegrityAssessment {
    /// Score a comparison from its aggregate signals.
    #[must_use]
    pub fn assess(
        statistics: &StatsComparison,
        changes: &ContentChanges,
        movements: &[Movement],
        major: &MajorChanges,
    ) -> Self {
        let mut score: i32 = 100;
        let mut warnings = Vec::new();

        let word_percentage = statistics.differences.word_percentage;
        if word_percentage.abs() > SIZE_DISCREPANCY_PERCENT {
            score -= PENALTY_SIZE_DISCREPANCY;
            warnings.push(format!("Large size discrepancy: {word_percentage:.1}%"));
        }

        if major.massive_content_loss {
            score -= PENALTY_MASSIVE_LOSS;
            warnings.push("Massive content removal detected".to_string());
        }

        if major.document_restructuring {
            score -= PENALTY_RESTRUCTURING;
            warnings.push("Major document restructuring".to_string());
        }

        if movements.len() > MOVEMENT_WARNING_COUNT {
            score -= PENALTY_MANY_MOVEMENTS;
            warnings.push(format!(
                "Many section movements detected: {}",
                movements.len()
            ));
        }

        if changes.summary.deletions > DELETION_WARNING_COUNT {
            score -= PENALTY_MANY_DELETIONS;
            warnings.push(format!(
                "Many removed sections: {}",
                changes.summary.deletions
            ));
        }

        let score = score.max(0) as u8;
        let level = IntegrityLevel::from_score(score);

        Self {
            score,
            level,
            warnings,
            recommendation: recommendation_for(level).to_string(),
        }
    }

    /// Full-score assessment for comparisons known to be change-free.
    #[must_use]
    pub fn reliable() -> Self {
        Self {
            score: 100,
            level: IntegrityLevel::High,
            warnings: Vec::new(),
            recommendation: recommendation_for(IntegrityLevel::High).to_string(),
        }
    }
}

const fn recommendation_for(level: IntegrityLevel) -> &'static str {
    match level {
        IntegrityLevel::High => "Document comparison reliable - normal analysis can proceed",
        IntegrityLevel::Medium => {
            "Warning: document changes are complex - interpret results with extra care"
        }
        IntegrityLevel::Low => {
            "CRITICAL: document integrity low - manual verification strongly advised"
        }
    }
}
