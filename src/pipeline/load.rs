//! Document loading stage.

use crate::error::{ErrorContext, Result};
use crate::extract::{preview, ExtractedText, TextExtractor};
use crate::stats::DocumentStats;
use std::path::Path;

/// A document pulled through extraction, ready for comparison.
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// Reporting label, the file name when the path has one
    pub label: String,
    pub text: String,
    pub stats: DocumentStats,
    pub preview: String,
}

/// Load one document through the given extractor.
///
/// # Errors
///
/// Propagates extraction errors (unreadable, oversized, empty, or
/// unsupported files).
pub fn load_document(path: &Path, extractor: &dyn TextExtractor) -> Result<LoadedDocument> {
    let ExtractedText { text, encoding } = extractor
        .extract(path)
        .with_context(|| format!("loading {}", path.display()))?;
    let label = document_label(path);
    let stats = DocumentStats::measure(&text);

    tracing::info!(
        label = %label,
        words = stats.word_count,
        encoding = encoding.as_str(),
        "document loaded"
    );

    Ok(LoadedDocument {
        label,
        preview: preview(&text),
        text,
        stats,
    })
}

/// File name portion of the path, or the whole path when it has none.
fn document_label(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
