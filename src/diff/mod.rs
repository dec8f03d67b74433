//! Structure comparison module.
//!
//! Turns two segmented documents into a typed change report: title-keyed
//! matching, movement detection, similarity ratios for modified bodies, and
//! document-level structural classification, orchestrated by
//! [`StructureDiffEngine`].
//!
//! # Usage
//!
//! ```
//! use polidiff::diff::StructureDiffEngine;
//!
//! let engine = StructureDiffEngine::new();
//! let report = engine.compare(
//!     "1. Scope\nApplies to all staff\n",
//!     "1. Scope\nApplies to managers only\n",
//!     "v1.txt",
//!     "v2.txt",
//! );
//!
//! assert!(report.has_changes());
//! println!("integrity {}/100", report.integrity_assessment.score);
//! ```

mod classifier;
mod engine;
mod matcher;
mod movement;
mod similarity;

pub use classifier::{FlagKind, MajorChanges, Severity, StructuralFlag};
pub use engine::{ComparisonReport, StructureDiffEngine};
pub use matcher::{
    match_sections, ChangeCounts, ContentChanges, DuplicateTitle, ModifiedSection,
};
pub use movement::{detect_movements, MoveDirection, MoveImpact, Movement};
pub use similarity::{body_similarity, sequence_ratio, MAX_RATIO_CHARS};
