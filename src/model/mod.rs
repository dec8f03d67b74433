//! Core document entities produced by segmentation.
//!
//! The segmenter turns raw extracted text into these structures; every later
//! stage (statistics, matching, movement detection, classification, scoring)
//! consumes them read-only. All types serialize with serde and keep
//! deterministic field and map ordering so that identical inputs produce
//! byte-identical reports.

mod document;
mod section;

pub use document::{ContentCategory, DocumentStructure};
pub use section::Section;
