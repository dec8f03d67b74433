//! Report generation for comparison results.
//!
//! This module provides the output formats for compare and inspect runs:
//! - JSON: Structured data for programmatic integration
//! - Markdown: Human-readable documentation
//! - Summary: Compact shell-friendly output
//!
//! Reporters render the envelope types from [`envelope`]; all analysis
//! happens upstream in the pipeline.

mod envelope;
mod json;
mod markdown;
mod summary;
mod types;

pub use envelope::{
    CompareResponse, DocumentInspection, DocumentProfile, ErrorResponse, SectionSummary,
};
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a compare response.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be serialized.
    fn generate_compare_report(&self, response: &CompareResponse)
        -> Result<String, ReportError>;

    /// Render a single-document inspection.
    ///
    /// # Errors
    ///
    /// Returns an error when the payload cannot be serialized.
    fn generate_inspect_report(
        &self,
        inspection: &DocumentInspection,
    ) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    create_reporter_with_options(format, true)
}

/// Create a report generator with color control
#[must_use]
pub fn create_reporter_with_options(
    format: ReportFormat,
    use_color: bool,
) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Summary => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_matches_format() {
        for format in [ReportFormat::Summary, ReportFormat::Json, ReportFormat::Markdown] {
            assert_eq!(create_reporter(format).format(), format);
            assert_eq!(create_reporter_with_options(format, false).format(), format);
        }
    }
}
