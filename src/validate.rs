//! Document pair validation.
//!
//! Coarse whole-text check run before structure comparison. It catches the
//! two operator mistakes a section-level diff cannot usefully report on:
//! feeding the same version twice, and feeding two unrelated documents.
//! The comparison still runs either way; the verdict travels with the
//! response so the reader knows how much to trust it.

use crate::diff::MAX_RATIO_CHARS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Similarity at or above which a pair counts as nearly identical.
pub const NEARLY_IDENTICAL_THRESHOLD: f64 = 0.98;
/// Similarity at or below which a pair counts as very different.
pub const VERY_DIFFERENT_THRESHOLD: f64 = 0.10;

/// Validation verdict for a document pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairVerdict {
    /// Byte-identical inputs
    IdenticalDocuments,
    /// Similarity at or above [`NEARLY_IDENTICAL_THRESHOLD`]
    NearlyIdentical,
    /// Similarity at or below [`VERY_DIFFERENT_THRESHOLD`]
    VeryDifferent,
    /// Anything in between
    NormalComparison,
}

impl PairVerdict {
    #[must_use]
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity >= NEARLY_IDENTICAL_THRESHOLD {
            Self::NearlyIdentical
        } else if similarity <= VERY_DIFFERENT_THRESHOLD {
            Self::VeryDifferent
        } else {
            Self::NormalComparison
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::IdenticalDocuments => "identical_documents",
            Self::NearlyIdentical => "nearly_identical",
            Self::VeryDifferent => "very_different",
            Self::NormalComparison => "normal_comparison",
        }
    }
}

/// Outcome of validating one document pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub verdict: PairVerdict,
    /// Whole-text similarity in `[0, 1]`
    pub similarity: f64,
    /// Caution for the edge verdicts
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl ValidationReport {
    /// True when the inputs were byte-identical.
    #[must_use]
    pub fn is_identical(&self) -> bool {
        self.verdict == PairVerdict::IdenticalDocuments
    }
}

/// Validate a document pair before comparison.
///
/// Byte-identical inputs short to a full-similarity verdict without any
/// normalization. Otherwise both texts are trimmed and lowercased, then
/// scored with normalized Levenshtein when both fit the ratio guard and a
/// word-set Jaccard index above it.
#[must_use]
pub fn validate_pair(text_a: &str, text_b: &str) -> ValidationReport {
    if text_a == text_b {
        return ValidationReport {
            verdict: PairVerdict::IdenticalDocuments,
            similarity: 1.0,
            warning: None,
        };
    }

    let normalized_a = text_a.trim().to_lowercase();
    let normalized_b = text_b.trim().to_lowercase();
    let similarity = whole_text_similarity(&normalized_a, &normalized_b);
    let verdict = PairVerdict::from_similarity(similarity);

    let warning = match verdict {
        PairVerdict::NearlyIdentical => Some(
            "Documents are nearly identical - verify that two different versions were provided"
                .to_string(),
        ),
        PairVerdict::VeryDifferent => Some(
            "Documents are very different - verify that both belong to the same document"
                .to_string(),
        ),
        PairVerdict::IdenticalDocuments | PairVerdict::NormalComparison => None,
    };

    if let Some(message) = &warning {
        tracing::warn!(similarity, verdict = verdict.as_str(), "{message}");
    }

    ValidationReport {
        verdict,
        similarity,
        warning,
    }
}

fn whole_text_similarity(a: &str, b: &str) -> f64 {
    if a.chars().count() <= MAX_RATIO_CHARS && b.chars().count() <= MAX_RATIO_CHARS {
        strsim::normalized_levenshtein(a, b)
    } else {
        token_jaccard(a, b)
    }
}

fn token_jaccard(a: &str, b: &str) -> f64 {
    let words_a: HashSet<&str> = a.split_whitespace().collect();
    let words_b: HashSet<&str> = b.split_whitespace().collect();
    if words_a.is_empty() && words_b.is_empty() {
        return 1.0;
    }
    let intersection = words_a.intersection(&words_b).count();
    let union = words_a.union(&words_b).count();
    intersection as f64 / union as f64
}
