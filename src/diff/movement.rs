//! Fingerprint-based movement detection.
//!
//! A movement is a section whose body is byte-identical in both documents
//! but which sits at a different ordinal position. Detection is orthogonal
//! to title matching: a retitled but otherwise identical section still
//! registers here, and an unchanged-by-title section can also be moved.
//!
//! Positions are 0-based internally and reported 1-based. When one document
//! repeats a fingerprint, the first occurrence defines its position.

use crate::model::{DocumentStructure, Section};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Whether a section moved toward the front or the back of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveDirection {
    #[serde(rename = "moved-earlier")]
    MovedEarlier,
    #[serde(rename = "moved-later")]
    MovedLater,
}

impl MoveDirection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MovedEarlier => "moved-earlier",
            Self::MovedLater => "moved-later",
        }
    }
}

/// Relocation magnitude class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveImpact {
    High,
    Medium,
}

impl MoveImpact {
    /// High for relocations over three positions.
    #[must_use]
    pub const fn from_delta(position_delta: i64) -> Self {
        if position_delta.abs() > 3 {
            Self::High
        } else {
            Self::Medium
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

/// One relocated section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    /// Title of the section at the old position in document A
    pub title: String,
    /// 1-based position in document A
    pub old_position: usize,
    /// 1-based position in document B
    pub new_position: usize,
    /// `new_position - old_position`
    pub position_delta: i64,
    pub direction: MoveDirection,
    pub impact: MoveImpact,
}

/// Detect relocated sections between two documents.
///
/// The result is sorted by descending `|position_delta|`, ties broken by
/// ascending `old_position`, so the largest relocations come first and the
/// ordering is fully deterministic.
#[must_use]
pub fn detect_movements(a: &DocumentStructure, b: &DocumentStructure) -> Vec<Movement> {
    let index_a = position_index(&a.sections);
    let index_b = position_index(&b.sections);

    let mut movements = Vec::new();
    for (fingerprint, &pos_a) in &index_a {
        let Some(&pos_b) = index_b.get(fingerprint) else {
            continue;
        };
        if pos_a == pos_b {
            continue;
        }

        let position_delta = pos_b as i64 - pos_a as i64;
        let direction = if position_delta < 0 {
            MoveDirection::MovedEarlier
        } else {
            MoveDirection::MovedLater
        };
        movements.push(Movement {
            title: a.sections[pos_a].title.clone(),
            old_position: pos_a + 1,
            new_position: pos_b + 1,
            position_delta,
            direction,
            impact: MoveImpact::from_delta(position_delta),
        });
    }

    movements.sort_by(|x, y| {
        y.position_delta
            .abs()
            .cmp(&x.position_delta.abs())
            .then(x.old_position.cmp(&y.old_position))
    });
    movements
}

/// Fingerprint to first-occurrence 0-based position.
fn position_index(sections: &[Section]) -> IndexMap<&str, usize> {
    let mut index: IndexMap<&str, usize> = IndexMap::new();
    for (i, section) in sections.iter().enumerate() {
        index.entry(section.content_fingerprint.as_str()).or_insert(i);
    }
    index
}
