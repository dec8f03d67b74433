//! Content-type keyword tally.
//!
//! Counts keyword-pattern hits per category over the raw document text.
//! Purely descriptive metadata for reports; matching never looks at it.

use crate::model::ContentCategory;
use indexmap::IndexMap;
use regex::Regex;
use std::sync::LazyLock;

/// Keyword patterns per category, version `v1`.
///
/// Dutch care-sector terminology of the source domain plus English
/// equivalents; all patterns are case-insensitive.
pub const CONTENT_TYPE_KEYWORDS_V1: &[(ContentCategory, &[&str])] = &[
    (
        ContentCategory::Legislative,
        &[
            r"artikel\s+\d+",
            r"\bwet\b",
            r"wetgeving",
            r"regelgeving",
            r"verordening",
            r"article\s+\d+",
            r"\bregulation\b",
        ],
    ),
    (
        ContentCategory::Policy,
        &[
            r"beleid",
            r"strategie",
            r"\bvisie\b",
            r"\bmissie\b",
            r"doelstelling",
            r"\bpolicy\b",
            r"\bstrategy\b",
        ],
    ),
    (
        ContentCategory::Procedure,
        &[
            r"procedure",
            r"\bproces\b",
            r"werkwijze",
            r"handleiding",
            r"\bprocess\b",
        ],
    ),
    (
        ContentCategory::Financial,
        &[
            r"budget",
            r"kosten",
            r"tarief",
            r"\beuro\b",
            r"€",
            r"financi[eë]n",
            r"\bcosts?\b",
        ],
    ),
    (
        ContentCategory::Compliance,
        &[
            r"compliance",
            r"toezicht",
            r"\bigj\b",
            r"kwaliteit",
            r"certificering",
            r"\baudit\b",
        ],
    ),
    (
        ContentCategory::Organizational,
        &[
            r"organisatie",
            r"structuur",
            r"\brollen\b",
            r"verantwoordelijk",
            r"organi[sz]ation",
        ],
    ),
];

static COMPILED_KEYWORDS: LazyLock<Vec<(ContentCategory, Vec<Regex>)>> = LazyLock::new(|| {
    CONTENT_TYPE_KEYWORDS_V1
        .iter()
        .map(|(category, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(&format!("(?i){p}")).expect("static regex"))
                .collect();
            (*category, compiled)
        })
        .collect()
});

/// Tally content-type keyword hits over the raw text.
///
/// Categories with zero hits are omitted; the map keeps category
/// declaration order, so tallies are deterministic.
#[must_use]
pub fn tally_content_types(text: &str) -> IndexMap<ContentCategory, usize> {
    let mut tally = IndexMap::new();
    for (category, patterns) in COMPILED_KEYWORDS.iter() {
        let count: usize = patterns.iter().map(|re| re.find_iter(text).count()).sum();
        if count > 0 {
            tally.insert(*category, count);
        }
    }
    tally
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_counts_keywords() {
        let text = "Artikel 5 regelt het toezicht. Het beleid volgt de wet. \
                    Kwaliteit staat voorop; de kosten zijn begroot in het budget.";
        let tally = tally_content_types(text);

        assert_eq!(tally[&ContentCategory::Legislative], 2); // "Artikel 5", "wet"
        assert_eq!(tally[&ContentCategory::Policy], 1);
        assert_eq!(tally[&ContentCategory::Financial], 2); // "kosten", "budget"
        assert_eq!(tally[&ContentCategory::Compliance], 2); // "toezicht", "Kwaliteit"
    }

    #[test]
    fn test_tally_is_case_insensitive() {
        let tally = tally_content_types("BELEID EN STRATEGIE");
        assert_eq!(tally[&ContentCategory::Policy], 2);
    }

    #[test]
    fn test_zero_hit_categories_omitted() {
        let tally = tally_content_types("niets relevants hier");
        assert!(tally.is_empty());
    }

    #[test]
    fn test_tally_order_follows_declaration() {
        let text = "organisatie budget wet";
        let categories: Vec<_> = tally_content_types(text).into_keys().collect();
        assert_eq!(
            categories,
            vec![
                ContentCategory::Legislative,
                ContentCategory::Financial,
                ContentCategory::Organizational,
            ]
        );
    }
}
