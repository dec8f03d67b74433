//! Whole-document statistics.
//!
//! Computes size metrics for both raw texts before segmentation, percentage
//! deltas relative to document A, size-based red flags, and the overall
//! size-change category. Runs on the full raw text, so content discarded by
//! the segmenter (preamble before the first heading) still counts here.

use serde::{Deserialize, Serialize};

/// Size metrics for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStats {
    /// Unicode scalar value count
    pub char_count: usize,
    /// Whitespace-split token count
    pub word_count: usize,
    /// Line count per `str::lines`
    pub line_count: usize,
    /// Maximal runs of non-blank lines; a whitespace-only line is blank
    pub paragraph_count: usize,
}

impl DocumentStats {
    /// Measure a raw document text.
    #[must_use]
    pub fn measure(text: &str) -> Self {
        let mut paragraph_count = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            if line.trim().is_empty() {
                in_paragraph = false;
            } else if !in_paragraph {
                paragraph_count += 1;
                in_paragraph = true;
            }
        }

        Self {
            char_count: text.chars().count(),
            word_count: text.split_whitespace().count(),
            line_count: text.lines().count(),
            paragraph_count,
        }
    }
}

/// Absolute and relative deltas between the two documents.
///
/// Percentages are relative to document A and 0.0 when A's count is zero;
/// rounded to one decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatDeltas {
    pub char_delta: i64,
    pub word_delta: i64,
    pub char_percentage: f64,
    pub word_percentage: f64,
}

/// Overall size-change magnitude, from the average of the absolute
/// character and word percentage deltas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Minimal,
    Small,
    Medium,
    Large,
    Extreme,
}

impl SizeCategory {
    /// Map an averaged absolute percentage delta onto a category.
    #[must_use]
    pub fn from_average_delta(avg: f64) -> Self {
        if avg < 5.0 {
            Self::Minimal
        } else if avg < 15.0 {
            Self::Small
        } else if avg < 35.0 {
            Self::Medium
        } else if avg < 60.0 {
            Self::Large
        } else {
            Self::Extreme
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Extreme => "extreme",
        }
    }
}

impl std::fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Full statistics comparison between two raw texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsComparison {
    pub document_a: DocumentStats,
    pub document_b: DocumentStats,
    pub differences: StatDeltas,
    /// Size-based warnings, in detection order
    pub red_flags: Vec<String>,
    pub size_change_category: SizeCategory,
}

impl StatsComparison {
    /// Compare two raw texts.
    #[must_use]
    pub fn compare(text_a: &str, text_b: &str) -> Self {
        let document_a = DocumentStats::measure(text_a);
        let document_b = DocumentStats::measure(text_b);

        let char_percentage = percentage_delta(document_a.char_count, document_b.char_count);
        let word_percentage = percentage_delta(document_a.word_count, document_b.word_count);
        let differences = StatDeltas {
            char_delta: document_b.char_count as i64 - document_a.char_count as i64,
            word_delta: document_b.word_count as i64 - document_a.word_count as i64,
            char_percentage,
            word_percentage,
        };

        let mut red_flags = Vec::new();
        if char_percentage.abs() > 50.0 {
            red_flags.push(format!(
                "CRITICAL: character count changed {char_percentage:+.1}% - possible document size change"
            ));
        }
        if word_percentage.abs() > 40.0 {
            red_flags.push(format!(
                "WARNING: word count changed {word_percentage:+.1}% - possible content removal"
            ));
        }
        if (document_b.word_count as f64) < document_a.word_count as f64 * 0.7 {
            red_flags.push(
                "CRITICAL: second document holds less than 70% of the first document's words - 30%+ content removal"
                    .to_string(),
            );
        }

        let avg = (char_percentage.abs() + word_percentage.abs()) / 2.0;

        Self {
            document_a,
            document_b,
            differences,
            red_flags,
            size_change_category: SizeCategory::from_average_delta(avg),
        }
    }

    /// True when any size-based red flag fired.
    #[must_use]
    pub fn has_red_flags(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

/// Percentage delta of `b` relative to `a`, one-decimal rounding, 0.0 when
/// `a` is zero.
fn percentage_delta(a: usize, b: usize) -> f64 {
    if a == 0 {
        return 0.0;
    }
    let raw = (b as f64 - a as f64) / a as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_counts() {
        let stats = DocumentStats::measure("een twee drie\n\nvier vijf\nzes\n");
        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.line_count, 4);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.char_count, 29);
    }

    #[test]
    fn test_whitespace_only_line_separates_paragraphs() {
        let stats = DocumentStats::measure("eerste blok\n   \ntweede blok");
        assert_eq!(stats.paragraph_count, 2);
    }

    #[test]
    fn test_empty_text() {
        let stats = DocumentStats::measure("");
        assert_eq!(stats.char_count, 0);
        assert_eq!(stats.word_count, 0);
        assert_eq!(stats.line_count, 0);
        assert_eq!(stats.paragraph_count, 0);
    }

    #[test]
    fn test_percentage_relative_to_a() {
        let cmp = StatsComparison::compare("een twee drie vier", "een twee");
        assert_eq!(cmp.differences.word_delta, -2);
        assert_eq!(cmp.differences.word_percentage, -50.0);
    }

    #[test]
    fn test_percentage_zero_when_a_empty() {
        let cmp = StatsComparison::compare("", "nieuwe tekst hier");
        assert_eq!(cmp.differences.char_percentage, 0.0);
        assert_eq!(cmp.differences.word_percentage, 0.0);
        assert!(!cmp.has_red_flags());
    }

    #[test]
    fn test_char_flag_requires_over_50_percent() {
        // 100 -> 50 chars is exactly -50%, which must not flag
        let a = "a".repeat(100);
        let b = "a".repeat(50);
        let cmp = StatsComparison::compare(&a, &b);
        assert!(!cmp
            .red_flags
            .iter()
            .any(|f| f.contains("character count")));

        // 100 -> 49 chars is -51%
        let b = "a".repeat(49);
        let cmp = StatsComparison::compare(&a, &b);
        assert!(cmp.red_flags.iter().any(|f| f.contains("character count")));
    }

    #[test]
    fn test_word_removal_flags() {
        // 10 words down to 4: word delta -60%, below-70% retention
        let a = "w ".repeat(10);
        let b = "w ".repeat(4);
        let cmp = StatsComparison::compare(&a, &b);

        assert!(cmp.red_flags.iter().any(|f| f.starts_with("WARNING:")));
        assert!(cmp
            .red_flags
            .iter()
            .any(|f| f.contains("less than 70%")));
    }

    #[test]
    fn test_retention_boundary_is_strict() {
        // Exactly 70% retention must not flag
        let a = "w ".repeat(10);
        let b = "w ".repeat(7);
        let cmp = StatsComparison::compare(&a, &b);
        assert!(!cmp.red_flags.iter().any(|f| f.contains("less than 70%")));
    }

    #[test]
    fn test_identical_texts_have_no_flags() {
        let text = "1. Kop\ninhoud van de sectie\n";
        let cmp = StatsComparison::compare(text, text);
        assert!(!cmp.has_red_flags());
        assert_eq!(cmp.size_change_category, SizeCategory::Minimal);
    }

    #[test]
    fn test_size_categories() {
        assert_eq!(SizeCategory::from_average_delta(0.0), SizeCategory::Minimal);
        assert_eq!(SizeCategory::from_average_delta(4.9), SizeCategory::Minimal);
        assert_eq!(SizeCategory::from_average_delta(5.0), SizeCategory::Small);
        assert_eq!(SizeCategory::from_average_delta(14.9), SizeCategory::Small);
        assert_eq!(SizeCategory::from_average_delta(15.0), SizeCategory::Medium);
        assert_eq!(SizeCategory::from_average_delta(34.9), SizeCategory::Medium);
        assert_eq!(SizeCategory::from_average_delta(35.0), SizeCategory::Large);
        assert_eq!(SizeCategory::from_average_delta(59.9), SizeCategory::Large);
        assert_eq!(SizeCategory::from_average_delta(60.0), SizeCategory::Extreme);
    }

    #[test]
    fn test_serialized_field_names() {
        let cmp = StatsComparison::compare("een", "twee");
        let json = serde_json::to_value(&cmp).unwrap();
        assert!(json["differences"]["word_percentage"].is_number());
        assert!(json["size_change_category"].is_string());
    }
}
