//! Title-keyed section matching.
//!
//! Two sections are the same logical section across revisions when their
//! titles are equal, regardless of position. Titles present only in B are
//! additions, titles present only in A are deletions, shared titles are
//! modified or unchanged depending on their content fingerprints.
//!
//! Duplicate titles within one document collide on the title key. The later
//! occurrence wins; every collision is recorded and logged so the report
//! shows which sections were shadowed.

use crate::diff::similarity::body_similarity;
use crate::model::{DocumentStructure, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A matched section whose body differs between the two documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModifiedSection {
    pub title: String,
    /// Sequence similarity of the two bodies, in `[0.0, 1.0]`
    pub similarity_ratio: f64,
    pub old_word_count: usize,
    pub new_word_count: usize,
    /// `new_word_count - old_word_count`
    pub word_delta: i64,
}

/// Summary counts over the four match outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeCounts {
    pub additions: usize,
    pub deletions: usize,
    pub modifications: usize,
    pub unchanged: usize,
}

impl ChangeCounts {
    /// Outcomes that represent an actual change.
    #[must_use]
    pub const fn total_changes(&self) -> usize {
        self.additions + self.deletions + self.modifications
    }
}

/// A heading title that occurred more than once within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateTitle {
    /// Label of the document the collision occurred in
    pub document: String,
    pub title: String,
    pub occurrences: usize,
}

/// Full outcome of title-keyed matching.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentChanges {
    /// Titles present in B but not in A, in B's document order
    pub added_sections: Vec<String>,
    /// Titles present in A but not in B, in A's document order
    pub removed_sections: Vec<String>,
    /// Shared titles whose fingerprints differ, in A's document order
    pub modified_sections: Vec<ModifiedSection>,
    /// Shared titles whose fingerprints are equal, in A's document order
    pub unchanged_sections: Vec<String>,
    pub summary: ChangeCounts,
    /// Title collisions found in either document
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub duplicate_titles: Vec<DuplicateTitle>,
}

impl ContentChanges {
    /// True when any section was added, removed, or modified.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        self.summary.total_changes() > 0
    }
}

/// Match the sections of two documents by title.
#[must_use]
pub fn match_sections(a: &DocumentStructure, b: &DocumentStructure) -> ContentChanges {
    let (index_a, mut duplicate_titles) = title_index(a);
    let (index_b, duplicates_b) = title_index(b);
    duplicate_titles.extend(duplicates_b);

    let mut added_sections = Vec::new();
    let mut removed_sections = Vec::new();
    let mut modified_sections = Vec::new();
    let mut unchanged_sections = Vec::new();

    for title in index_b.keys() {
        if !index_a.contains_key(title) {
            added_sections.push((*title).to_string());
            tracing::debug!(title = %title, "section added");
        }
    }

    for (title, section_a) in &index_a {
        match index_b.get(title) {
            None => {
                removed_sections.push((*title).to_string());
                tracing::debug!(title = %title, "section removed");
            }
            Some(section_b) => {
                if section_a.content_fingerprint == section_b.content_fingerprint {
                    unchanged_sections.push((*title).to_string());
                } else {
                    modified_sections.push(modified_entry(title, section_a, section_b));
                }
            }
        }
    }

    let summary = ChangeCounts {
        additions: added_sections.len(),
        deletions: removed_sections.len(),
        modifications: modified_sections.len(),
        unchanged: unchanged_sections.len(),
    };

    ContentChanges {
        added_sections,
        removed_sections,
        modified_sections,
        unchanged_sections,
        summary,
        duplicate_titles,
    }
}

fn modified_entry(title: &str, section_a: &Section, section_b: &Section) -> ModifiedSection {
    ModifiedSection {
        title: title.to_string(),
        similarity_ratio: body_similarity(&section_a.body, &section_b.body),
        old_word_count: section_a.word_count,
        new_word_count: section_b.word_count,
        word_delta: section_b.word_count as i64 - section_a.word_count as i64,
    }
}

/// Title index for one document: first-occurrence ordering with
/// last-occurrence values, plus the collisions that were shadowed.
fn title_index(doc: &DocumentStructure) -> (IndexMap<&str, &Section>, Vec<DuplicateTitle>) {
    let mut index: IndexMap<&str, &Section> = IndexMap::new();
    let mut collisions: IndexMap<&str, usize> = IndexMap::new();

    for section in &doc.sections {
        if index.insert(section.title.as_str(), section).is_some() {
            *collisions.entry(section.title.as_str()).or_insert(1) += 1;
        }
    }

    let duplicates = collisions
        .iter()
        .map(|(title, occurrences)| {
            tracing::warn!(
                document = %doc.label,
                title = %title,
                occurrences,
                "duplicate section title, later occurrence shadows earlier ones"
            );
            DuplicateTitle {
                document: doc.label.clone(),
                title: (*title).to_string(),
                occurrences: *occurrences,
            }
        })
        .collect();

    (index, duplicates)
}
