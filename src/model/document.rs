//! Document structure: the ordered section list for one document revision.

use super::Section;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Content-type categories tallied over the raw document text.
///
/// Descriptive metadata only; never used as a matching key. The tally counts
/// keyword-pattern hits for the policy domain (Dutch care-sector terminology
/// plus English equivalents).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentCategory {
    Legislative,
    Policy,
    Procedure,
    Financial,
    Compliance,
    Organizational,
}

impl ContentCategory {
    /// All categories in declaration order, which is also tally order.
    pub const ALL: [Self; 6] = [
        Self::Legislative,
        Self::Policy,
        Self::Procedure,
        Self::Financial,
        Self::Compliance,
        Self::Organizational,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Legislative => "legislative",
            Self::Policy => "policy",
            Self::Procedure => "procedure",
            Self::Financial => "financial",
            Self::Compliance => "compliance",
            Self::Organizational => "organizational",
        }
    }
}

impl std::fmt::Display for ContentCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Ordered section sequence for one document, plus descriptive metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStructure {
    /// Reporting label, typically the source filename
    pub label: String,
    /// Sections in document order
    pub sections: Vec<Section>,
    /// Nonzero keyword-tally counts, in category declaration order
    pub content_types: IndexMap<ContentCategory, usize>,
}

impl DocumentStructure {
    /// Create an empty structure for a label.
    #[must_use]
    pub fn empty(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            sections: Vec::new(),
            content_types: IndexMap::new(),
        }
    }

    /// Number of recognized sections.
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// True when no headings were recognized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Section titles in document order.
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.title.as_str())
    }

    /// Distinct content fingerprints, insertion-ordered.
    #[must_use]
    pub fn fingerprint_set(&self) -> indexmap::IndexSet<&str> {
        self.sections
            .iter()
            .map(|s| s.content_fingerprint.as_str())
            .collect()
    }

    /// Total body word count across all sections.
    #[must_use]
    pub fn total_words(&self) -> usize {
        self.sections.iter().map(|s| s.word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure_with(bodies: &[(&str, &str)]) -> DocumentStructure {
        let mut doc = DocumentStructure::empty("test.txt");
        for (i, (title, body)) in bodies.iter().enumerate() {
            doc.sections.push(Section::new(
                (*title).to_string(),
                i * 2,
                i * 2 + 2,
                (*body).to_string(),
            ));
        }
        doc
    }

    #[test]
    fn test_counts_and_titles() {
        let doc = structure_with(&[("Intro", "eerste"), ("Body", "tweede tekst")]);
        assert_eq!(doc.section_count(), 2);
        assert_eq!(doc.total_words(), 3);
        let titles: Vec<_> = doc.titles().collect();
        assert_eq!(titles, vec!["Intro", "Body"]);
    }

    #[test]
    fn test_fingerprint_set_dedupes() {
        let doc = structure_with(&[("A", "zelfde"), ("B", "zelfde"), ("C", "anders")]);
        assert_eq!(doc.fingerprint_set().len(), 2);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&ContentCategory::Legislative).unwrap();
        assert_eq!(json, "\"legislative\"");
    }

    #[test]
    fn test_empty_structure() {
        let doc = DocumentStructure::empty("leeg.txt");
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(doc.fingerprint_set().is_empty());
    }
}
