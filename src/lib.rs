//! **A library for comparing revisions of policy documents.**
//!
//! `polidiff` compares two revisions of a policy or regulation at the level of
//! document structure rather than raw lines. It segments each revision into
//! titled sections, matches sections across revisions by title, detects
//! sections that moved, classifies the overall severity of the change, and
//! scores how trustworthy the comparison itself is. It powers both a
//! command-line interface (CLI) for direct use and a Rust library for
//! programmatic integration into your own applications.
//!
//! ## Key Features
//!
//! - **Section Segmentation**: Recognizes numbered, lettered, and keyword
//!   headings in plain text and turns a document into an ordered list of
//!   titled sections with stable content fingerprints.
//! - **Structural Diffing**: Matches sections across revisions by title and
//!   classifies each as added, removed, modified, or unchanged, independent of
//!   where it sits in the document.
//! - **Movement Detection**: Finds sections whose content survived verbatim
//!   but moved to a different position, and rates the impact of each move.
//! - **Integrity Scoring**: Grades every comparison 0-100 with explicit
//!   warnings, so that a suspicious pairing (wrong versions, massive content
//!   loss) is flagged instead of silently producing misleading numbers.
//! - **Narrative Generation**: Optionally asks a configured language-model
//!   service to summarize the comparison, with a deterministic fallback when
//!   no service is available.
//! - **Flexible Reporting**: Renders results as a colored terminal summary,
//!   machine-readable JSON, or Markdown.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: Defines the central data structures, [`DocumentStructure`]
//!   and [`Section`], that the segmenter produces and every later stage
//!   consumes.
//! - **[`segmenter`]**: Home of the [`SectionSegmenter`], which splits raw
//!   text into sections using a versioned heading ruleset.
//! - **[`diff`]**: Home of the [`StructureDiffEngine`], which runs the full
//!   comparison and assembles a [`ComparisonReport`].
//! - **[`integrity`]**: Scores comparison trustworthiness and surfaces
//!   critical issues that need human attention.
//! - **[`pipeline`]**: Contains the primary functions for processing
//!   documents end to end: loading, comparing, inspecting, and writing
//!   reports.
//! - **[`reports`]**: Includes generators for creating output reports in the
//!   supported formats.
//!
//! ## Getting Started: Comparing Two Revisions
//!
//! ```
//! use polidiff::StructureDiffEngine;
//!
//! let old_text = "1. Scope\nThis policy applies to all staff.\n\n2. Review\nReviewed yearly.\n";
//! let new_text = "1. Scope\nThis policy applies to permanent staff.\n\n2. Review\nReviewed yearly.\n";
//!
//! let engine = StructureDiffEngine::new();
//! let report = engine.compare(old_text, new_text, "v1.txt", "v2.txt");
//!
//! assert_eq!(report.content_changes.summary.modifications, 1);
//! assert_eq!(report.content_changes.summary.unchanged, 1);
//! println!("integrity {}/100", report.integrity_assessment.score);
//! ```
//!
//! ## Examples
//!
//! ### Inspecting a Document's Structure
//!
//! ```
//! use polidiff::SectionSegmenter;
//!
//! let text = "1. Definitions\nTerms used in this policy.\n\n2. Scope\nWho this applies to.\n";
//! let structure = SectionSegmenter::new().segment(text, "policy.txt");
//!
//! assert_eq!(structure.sections.len(), 2);
//! assert_eq!(structure.sections[0].title, "Definitions");
//! ```
//!
//! ### Loading Documents from Disk
//!
//! The [`pipeline`] module layers file loading, pair validation, and report
//! envelopes on top of the engine.
//!
//! ```no_run
//! use polidiff::extract::PlainTextExtractor;
//! use polidiff::pipeline::{compare_documents, load_document, NarrativeMode};
//! use polidiff::StructureDiffEngine;
//! use std::path::Path;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let extractor = PlainTextExtractor::new();
//!     let old = load_document(Path::new("old.txt"), &extractor)?;
//!     let new = load_document(Path::new("new.txt"), &extractor)?;
//!
//!     let engine = StructureDiffEngine::new();
//!     let response = compare_documents(&engine, &old, &new, &NarrativeMode::Disabled);
//!
//!     println!(
//!         "{} -> {}: {} sections added, {} removed",
//!         response.label_a,
//!         response.label_b,
//!         response.analysis.content_changes.summary.additions,
//!         response.analysis.content_changes.summary.deletions,
//!     );
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `narrative` (default): Enables the HTTP client for the narrative
//!   service. This adds network dependencies like `reqwest`. Without it the
//!   deterministic fallback narrative is always used.
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `polidiff` library crate. If you are looking
//! for the command-line tool, please refer to the project's README or install
//! it via `cargo install polidiff`.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize↔f64/i64 casts are pervasive in the statistics and
    // scoring math — all values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Report render functions are inherently long — splitting hurts readability
    clippy::too_many_lines,
    // Config structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // self is kept for API consistency across reporter impls
    clippy::unused_self,
    // Variable names like `old`/`new` or `a`/`b` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod integrity;
pub mod model;
pub mod narrative;
pub mod pipeline;
pub mod reports;
pub mod segmenter;
pub mod stats;
pub mod utils;
pub mod validate;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, CompareConfig, CompareConfigBuilder, ConfigPreset};
pub use config::{ConfigError, Validatable};
pub use diff::{ComparisonReport, ContentChanges, MajorChanges, Movement, StructureDiffEngine};
pub use error::{ErrorContext, PolidiffError, Result};
pub use extract::{ExtractedText, PlainTextExtractor, TextEncoding, TextExtractor};
pub use integrity::{CriticalIssue, IntegrityAssessment, IntegrityLevel};
pub use model::{ContentCategory, DocumentStructure, Section};
pub use narrative::{NarrativeConfig, NarrativeGenerator};
pub use reports::{CompareResponse, DocumentInspection, ReportFormat, ReportGenerator};
pub use segmenter::SectionSegmenter;
pub use stats::{DocumentStats, StatsComparison};
pub use validate::{validate_pair, PairVerdict, ValidationReport};
