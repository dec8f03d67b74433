//! Versioned heading ruleset.
//!
//! A line is a heading when it matches any rule of the active ruleset; rules
//! are tried in declaration order and the first match wins. Each rule is a
//! tagged pattern plus a title-extraction policy, so behavior changes are
//! auditable: any change to matching or extraction requires a new ruleset
//! version.

use regex::Regex;
use std::sync::LazyLock;

/// Identifies which rule recognized a heading line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingRuleTag {
    /// `1. Title`, `2.3 Title`, `A. Title`, `IV) Title`
    NumberedChapter,
    /// `Artikel 5`, `Art. 12 Definities` (case-insensitive)
    Article,
    /// `Paragraaf 3`, `§ 4.1 Toezicht` (case-insensitive)
    Paragraph,
    /// `Bijlage A: Overzicht`, `Appendix`, `Annex 2` (case-insensitive)
    Appendix,
    /// All-caps line of 6-51 characters, letters and spaces only
    AllCaps,
    /// Line wrapped in 1-3 `*`, inner text starting with a capital
    Emphasis,
    /// `# Heading` through `###### Heading`
    Markdown,
    /// Short title-cased line; the conservative fallback
    TitleCaseShort,
}

/// Where a rule takes the section title from.
#[derive(Debug, Clone, Copy)]
enum TitleSource {
    /// The whole trimmed line
    WholeLine,
    /// A specific capture group
    Group(usize),
    /// A capture group when non-empty, otherwise the whole trimmed line.
    ///
    /// Marker rules use this so that `Artikel 5 Kwaliteit` titles as
    /// `Kwaliteit` (stable under renumbering) while a bare `Artikel 5`
    /// still yields a non-empty title.
    GroupOrLine(usize),
}

#[derive(Debug)]
enum Matcher {
    Pattern { regex: Regex, title: TitleSource },
    /// Predicate-based fallback: trimmed line under 100 chars, fewer than 8
    /// spaces, starting uppercase, and no word starting with a lowercase
    /// letter. Stricter than a plain "short capitalized line" so that prose
    /// such as `Hello world` stays body text.
    TitleCaseShort,
}

/// One ordered entry of the heading ruleset.
#[derive(Debug)]
pub struct HeadingRule {
    pub tag: HeadingRuleTag,
    matcher: Matcher,
}

impl HeadingRule {
    /// Try this rule against a trimmed, non-blank line.
    ///
    /// Returns the extracted title when the rule matches. Titles are trimmed
    /// and guaranteed non-empty.
    #[must_use]
    pub fn extract(&self, line: &str) -> Option<String> {
        match &self.matcher {
            Matcher::Pattern { regex, title } => {
                let caps = regex.captures(line)?;
                let raw = match title {
                    TitleSource::WholeLine => line,
                    TitleSource::Group(n) => caps.get(*n).map_or("", |m| m.as_str()),
                    TitleSource::GroupOrLine(n) => {
                        let g = caps.get(*n).map_or("", |m| m.as_str()).trim();
                        if g.is_empty() {
                            line
                        } else {
                            g
                        }
                    }
                };
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    None
                } else {
                    Some(trimmed.to_string())
                }
            }
            Matcher::TitleCaseShort => {
                if is_title_case_short(line) {
                    Some(line.trim().to_string())
                } else {
                    None
                }
            }
        }
    }
}

fn is_title_case_short(line: &str) -> bool {
    if line.chars().count() >= 100 {
        return false;
    }
    if line.chars().filter(|c| *c == ' ').count() >= 8 {
        return false;
    }
    let starts_upper = line.chars().next().is_some_and(char::is_uppercase);
    if !starts_upper {
        return false;
    }
    line.split_whitespace()
        .all(|word| word.chars().next().is_some_and(|c| !c.is_lowercase()))
}

/// The ordered heading ruleset, version `v1`.
#[derive(Debug)]
pub struct HeadingRuleset {
    pub version: &'static str,
    rules: Vec<HeadingRule>,
}

impl HeadingRuleset {
    /// Match a trimmed, non-blank line against the rules in order.
    ///
    /// First match wins; returns the rule tag and the extracted title.
    #[must_use]
    pub fn match_heading(&self, line: &str) -> Option<(HeadingRuleTag, String)> {
        self.rules
            .iter()
            .find_map(|rule| rule.extract(line).map(|title| (rule.tag, title)))
    }

    #[must_use]
    pub fn rules(&self) -> &[HeadingRule] {
        &self.rules
    }
}

/// Heading ruleset `v1`.
///
/// Dutch policy-document markers (`Artikel`, `Paragraaf`, `Bijlage`) are
/// matched case-insensitively; capital-letter requirements elsewhere are
/// case-sensitive. Keyword rules carry word boundaries so `Annexation` or
/// `Artikelen` do not trigger on their prefixes.
pub static HEADING_RULES_V1: LazyLock<HeadingRuleset> = LazyLock::new(|| HeadingRuleset {
    version: "v1",
    rules: vec![
        HeadingRule {
            tag: HeadingRuleTag::NumberedChapter,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"^(?:\d+(?:\.\d+)+\.?|\d+[.)]|[A-Z]{1,3}[.)])\s+(\S.{0,98})$")
                    .expect("static regex"),
                title: TitleSource::Group(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::Article,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"(?i)^(?:artikel|article|art\.)\s*\d+[a-z]?\s*[-:.–]?\s*(.{0,99})$")
                    .expect("static regex"),
                title: TitleSource::GroupOrLine(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::Paragraph,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"(?i)^(?:paragraaf|§)\s*\d+(?:\.\d+)*\s*[-:.–]?\s*(.{0,99})$")
                    .expect("static regex"),
                title: TitleSource::GroupOrLine(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::Appendix,
            matcher: Matcher::Pattern {
                regex: Regex::new(
                    r"(?i)^(?:bijlage|appendix|annex)\b\s*([A-Z0-9]{1,4})?\s*[-:–]?\s*(.{0,99})$",
                )
                .expect("static regex"),
                title: TitleSource::GroupOrLine(2),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::AllCaps,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"^([A-Z][A-Z\s]{5,50})$").expect("static regex"),
                title: TitleSource::Group(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::Emphasis,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"^\*{1,3}\s*([A-Z][^*\n]*?)\s*\*{1,3}$").expect("static regex"),
                title: TitleSource::Group(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::Markdown,
            matcher: Matcher::Pattern {
                regex: Regex::new(r"^#{1,6}\s+(\S.{0,98})$").expect("static regex"),
                title: TitleSource::Group(1),
            },
        },
        HeadingRule {
            tag: HeadingRuleTag::TitleCaseShort,
            matcher: Matcher::TitleCaseShort,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    fn match_line(line: &str) -> Option<(HeadingRuleTag, String)> {
        HEADING_RULES_V1.match_heading(line)
    }

    #[test]
    fn test_numbered_chapter() {
        let (tag, title) = match_line("1. Inleiding en doelstelling").unwrap();
        assert_eq!(tag, HeadingRuleTag::NumberedChapter);
        assert_eq!(title, "Inleiding en doelstelling");

        let (_, title) = match_line("2.3 Verantwoordelijkheden").unwrap();
        assert_eq!(title, "Verantwoordelijkheden");

        let (tag, title) = match_line("A. Begripsbepalingen").unwrap();
        assert_eq!(tag, HeadingRuleTag::NumberedChapter);
        assert_eq!(title, "Begripsbepalingen");

        let (_, title) = match_line("IV) Governance").unwrap();
        assert_eq!(title, "Governance");
    }

    #[test]
    fn test_short_numbered_title() {
        // Titles shorter than the old 10-char floor still count
        let (tag, title) = match_line("1. Intro").unwrap();
        assert_eq!(tag, HeadingRuleTag::NumberedChapter);
        assert_eq!(title, "Intro");
    }

    #[test]
    fn test_article_marker() {
        let (tag, title) = match_line("Artikel 5 Kwaliteitseisen").unwrap();
        assert_eq!(tag, HeadingRuleTag::Article);
        assert_eq!(title, "Kwaliteitseisen");

        // Bare marker keeps the whole line as title
        let (_, title) = match_line("Artikel 5").unwrap();
        assert_eq!(title, "Artikel 5");

        let (_, title) = match_line("art. 12: Definities").unwrap();
        assert_eq!(title, "Definities");

        // Plural prose is not an article marker
        assert!(!matches!(
            match_line("Artikelen worden jaarlijks herzien en aangepast waar dat nodig blijkt"),
            Some((HeadingRuleTag::Article, _))
        ));
    }

    #[test]
    fn test_paragraph_marker() {
        let (tag, title) = match_line("§ 3.2 Toezicht en handhaving").unwrap();
        assert_eq!(tag, HeadingRuleTag::Paragraph);
        assert_eq!(title, "Toezicht en handhaving");

        let (_, title) = match_line("Paragraaf 4").unwrap();
        assert_eq!(title, "Paragraaf 4");
    }

    #[test]
    fn test_appendix_marker() {
        let (tag, title) = match_line("Bijlage A: Overzicht tarieven").unwrap();
        assert_eq!(tag, HeadingRuleTag::Appendix);
        assert_eq!(title, "Overzicht tarieven");

        let (_, title) = match_line("Appendix").unwrap();
        assert_eq!(title, "Appendix");

        let (_, title) = match_line("Annex 2 - Data tables").unwrap();
        assert_eq!(title, "Data tables");

        // Prefix of a longer word does not trigger
        assert!(!matches!(
            match_line("Annexation was discussed at length during the proceedings yesterday"),
            Some((HeadingRuleTag::Appendix, _))
        ));
    }

    #[test]
    fn test_all_caps() {
        let (tag, title) = match_line("ALGEMENE BEPALINGEN").unwrap();
        assert_eq!(tag, HeadingRuleTag::AllCaps);
        assert_eq!(title, "ALGEMENE BEPALINGEN");

        // Too short for the all-caps rule, but the fallback still takes it
        let (tag, _) = match_line("INTRO").unwrap();
        assert_eq!(tag, HeadingRuleTag::TitleCaseShort);
    }

    #[test]
    fn test_emphasis_and_markdown() {
        let (tag, title) = match_line("**Kernwaarden**").unwrap();
        assert_eq!(tag, HeadingRuleTag::Emphasis);
        assert_eq!(title, "Kernwaarden");

        let (tag, title) = match_line("## Uitgangspunten").unwrap();
        assert_eq!(tag, HeadingRuleTag::Markdown);
        assert_eq!(title, "Uitgangspunten");

        // Unclosed emphasis is not a heading
        assert!(!matches!(
            match_line("*italic opening without a close"),
            Some((HeadingRuleTag::Emphasis, _))
        ));
    }

    #[test]
    fn test_fallback_accepts_title_case() {
        for line in ["Intro", "Appendix A", "HOOFDSTUK 1", "Samenvatting"] {
            assert!(match_line(line).is_some(), "should be a heading: {line}");
        }
    }

    #[test]
    fn test_fallback_rejects_prose() {
        // Lowercase continuation words mark prose, not headings
        for line in [
            "Hello world",
            "More text",
            "De organisatie draagt zorg voor kwaliteit",
            "this line starts lowercase",
        ] {
            assert!(match_line(line).is_none(), "should be body text: {line}");
        }
    }

    #[test]
    fn test_bare_number_without_punctuation_is_prose() {
        // A year or count at line start is not a chapter marker
        assert!(match_line("2024 was een bewogen jaar voor de sector").is_none());
    }

    #[test]
    fn test_fallback_rejects_long_lines() {
        let long = format!("Titel {}", "woord ".repeat(20));
        assert!(match_line(long.trim()).is_none());
    }

    #[test]
    fn test_first_match_wins_order() {
        // "Bijlage A" could satisfy the fallback too; the appendix rule is
        // earlier and must claim it
        let (tag, _) = match_line("Bijlage A").unwrap();
        assert_eq!(tag, HeadingRuleTag::Appendix);
    }

    #[test]
    fn test_ruleset_version() {
        assert_eq!(HEADING_RULES_V1.version, "v1");
        assert_eq!(HEADING_RULES_V1.rules().len(), 8);
    }
}
