//! Plain-text extraction from document files.
//!
//! The comparison engine works on decoded strings; this module is the
//! boundary that turns a file on disk into one. Format detection is
//! extension-based: `txt` (and extensionless paths) decode here, PDF and
//! DOCX are recognized but rejected with a pointer to prior conversion,
//! and any other extension is refused outright rather than decoded as
//! garbage.
//!
//! Text payloads decode through a fixed encoding waterfall: UTF-8, UTF-8
//! with BOM (stripped), then Latin-1. Latin-1 assigns every byte a code
//! point, so the waterfall cannot fail.

use crate::error::{ExtractionErrorKind, PolidiffError, Result};
use std::fs;
use std::path::Path;

/// Default cap on input document size: 16 MiB.
pub const DEFAULT_MAX_DOCUMENT_BYTES: u64 = 16 * 1024 * 1024;

/// Characters retained when previewing a document.
pub const PREVIEW_CHARS: usize = 200;

/// Source format, decided by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Pdf,
    Docx,
    Text,
}

impl DocumentFormat {
    /// Classify a path by its extension.
    ///
    /// Extensionless paths count as plain text; an extension outside the
    /// supported set yields `None` and the caller rejects the file.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("pdf") => Some(Self::Pdf),
            Some("docx" | "doc") => Some(Self::Docx),
            Some("txt" | "text") | None => Some(Self::Text),
            Some(_) => None,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::Text => "text",
        }
    }
}

/// Encoding that decoded the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf8Bom,
    Latin1,
}

impl TextEncoding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf8Bom => "utf-8-bom",
            Self::Latin1 => "latin-1",
        }
    }
}

/// Decoded document text plus the encoding that produced it.
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub encoding: TextEncoding,
}

/// Extraction seam for document formats.
pub trait TextExtractor {
    /// Extract plain text from the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an extraction error when the file is oversized, empty,
    /// or in a format this extractor does not handle, and an IO error
    /// when the file cannot be read.
    fn extract(&self, path: &Path) -> Result<ExtractedText>;
}

/// Extractor for plain-text documents.
#[derive(Debug, Clone)]
pub struct PlainTextExtractor {
    max_bytes: u64,
}

impl PlainTextExtractor {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    #[must_use]
    pub const fn with_max_bytes(max_bytes: u64) -> Self {
        Self { max_bytes }
    }
}

impl Default for PlainTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PlainTextExtractor {
    fn extract(&self, path: &Path) -> Result<ExtractedText> {
        let label = path.display().to_string();

        let metadata = fs::metadata(path).map_err(|err| PolidiffError::io(path, err))?;
        if metadata.len() > self.max_bytes {
            return Err(PolidiffError::extraction(
                label,
                ExtractionErrorKind::FileTooLarge {
                    size: metadata.len(),
                    limit: self.max_bytes,
                },
            ));
        }

        match DocumentFormat::from_path(path) {
            None => {
                let extension = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .unwrap_or_default()
                    .to_ascii_lowercase();
                Err(PolidiffError::unsupported_format(
                    label,
                    extension,
                    "only pdf, docx, and plain-text files are accepted",
                ))
            }
            Some(DocumentFormat::Pdf) => Err(PolidiffError::unsupported_format(
                label,
                "pdf",
                "convert the document to plain text before comparing",
            )),
            Some(DocumentFormat::Docx) => Err(PolidiffError::unsupported_format(
                label,
                "docx",
                "convert the document to plain text before comparing",
            )),
            Some(DocumentFormat::Text) => {
                let bytes = fs::read(path).map_err(|err| PolidiffError::io(path, err))?;
                let (text, encoding) = decode_bytes(&bytes);
                if text.trim().is_empty() {
                    return Err(PolidiffError::extraction(
                        label,
                        ExtractionErrorKind::EmptyTextFile,
                    ));
                }
                tracing::debug!(
                    path = %path.display(),
                    bytes = bytes.len(),
                    encoding = encoding.as_str(),
                    "extracted plain text"
                );
                Ok(ExtractedText { text, encoding })
            }
        }
    }
}

/// Run the encoding waterfall over a raw payload.
fn decode_bytes(bytes: &[u8]) -> (String, TextEncoding) {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return match text.strip_prefix('\u{feff}') {
            Some(stripped) => (stripped.to_string(), TextEncoding::Utf8Bom),
            None => (text.to_string(), TextEncoding::Utf8),
        };
    }
    // Latin-1 decodes any byte sequence, terminating the waterfall.
    (
        bytes.iter().map(|&b| b as char).collect(),
        TextEncoding::Latin1,
    )
}

/// First [`PREVIEW_CHARS`] characters of a text, with a trailing ellipsis
/// when anything was cut.
#[must_use]
pub fn preview(text: &str) -> String {
    let mut chars = text.chars();
    let mut out: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}
