//! Unified error types for polidiff.
//!
//! This module provides the error hierarchy for the library, with rich
//! context for debugging and user-friendly messages. The diff engine itself
//! is total over decoded strings; every variant here belongs to a boundary
//! (file loading, text extraction, configuration, report output, narrative
//! generation).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for polidiff operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum PolidiffError {
    /// Missing or unusable input at the call boundary
    #[error("Invalid input: {0}")]
    Input(String),

    /// Errors while extracting text from a document payload
    #[error("Failed to extract text from {label}: {source}")]
    Extraction {
        label: String,
        #[source]
        source: ExtractionErrorKind,
    },

    /// Errors from the narrative-generation collaborator
    #[error("Narrative generation failed: {context}")]
    Narrative {
        context: String,
        #[source]
        source: NarrativeErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Report rendering or serialization errors
    #[error("Report generation failed: {0}")]
    Report(String),
}

/// Specific extraction error kinds.
///
/// One distinguishable kind per failure mode of the extraction collaborator;
/// PDF/DOCX kinds are part of the collaborator contract even though only the
/// plain-text extractor ships with this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ExtractionErrorKind {
    #[error("PDF is encrypted and cannot be read")]
    EncryptedPdf,

    #[error("PDF contains no pages")]
    EmptyPdf,

    #[error("document contains no extractable text")]
    NoExtractableText,

    #[error("DOCX container is corrupt or not a valid archive")]
    CorruptDocx,

    #[error("text file is empty")]
    EmptyTextFile,

    #[error("text could not be decoded with any supported encoding")]
    UndecodableText,

    #[error("unsupported format '{format}': {reason}")]
    UnsupportedFormat { format: String, reason: String },

    #[error("document is {size} bytes, exceeding the {limit} byte limit")]
    FileTooLarge { size: u64, limit: u64 },
}

/// Specific narrative-collaborator error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum NarrativeErrorKind {
    #[error("narrative service is not configured")]
    Unconfigured,

    #[error("network error: {0}")]
    Network(String),

    #[error("service returned HTTP status {status}")]
    Http { status: u16 },

    #[error("request timed out")]
    Timeout,

    #[error("malformed service response: {0}")]
    MalformedResponse(String),

    #[error("all {attempts} attempts failed")]
    RetriesExhausted { attempts: u32 },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for polidiff operations
pub type Result<T> = std::result::Result<T, PolidiffError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl PolidiffError {
    /// Create an input error
    pub fn input(message: impl Into<String>) -> Self {
        Self::Input(message.into())
    }

    /// Create an extraction error tagged with the document label
    pub fn extraction(label: impl Into<String>, source: ExtractionErrorKind) -> Self {
        Self::Extraction {
            label: label.into(),
            source,
        }
    }

    /// Create an extraction error for an unsupported format
    pub fn unsupported_format(
        label: impl Into<String>,
        format: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::extraction(
            label,
            ExtractionErrorKind::UnsupportedFormat {
                format: format.into(),
                reason: reason.into(),
            },
        )
    }

    /// Create a narrative error with context
    pub fn narrative(context: impl Into<String>, source: NarrativeErrorKind) -> Self {
        Self::Narrative {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a report error
    pub fn report(message: impl Into<String>) -> Self {
        Self::Report(message.into())
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for PolidiffError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for PolidiffError {
    fn from(err: serde_json::Error) -> Self {
        Self::Report(format!("JSON serialization: {err}"))
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Prepends a caller-side context string to an error's message, building
/// an outermost-first chain through the call path.
///
/// # Example
///
/// ```ignore
/// use polidiff::error::ErrorContext;
///
/// fn load_document(path: &Path) -> Result<String> {
///     std::fs::read(path)
///         .map_err(PolidiffError::from)
///         .with_context(|| format!("reading document {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Like `context` but the string is only built on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<PolidiffError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx = context.into();
        self.map_err(|e| prepend_context(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| prepend_context(e.into(), &f().into()))
    }
}

fn prepend_context(err: PolidiffError, new_ctx: &str) -> PolidiffError {
    match err {
        PolidiffError::Input(msg) => PolidiffError::Input(chain_context(new_ctx, &msg)),
        PolidiffError::Extraction { label, source } => PolidiffError::Extraction {
            label: chain_context(new_ctx, &label),
            source,
        },
        PolidiffError::Narrative {
            context: existing,
            source,
        } => PolidiffError::Narrative {
            context: chain_context(new_ctx, &existing),
            source,
        },
        PolidiffError::Io {
            path,
            message,
            source,
        } => PolidiffError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        PolidiffError::Config(msg) => PolidiffError::Config(chain_context(new_ctx, &msg)),
        PolidiffError::Report(msg) => PolidiffError::Report(chain_context(new_ctx, &msg)),
    }
}

/// Joins the new context onto the existing one as "new: existing", or
/// returns the new context alone when there is nothing to chain onto.
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PolidiffError::extraction("notes.txt", ExtractionErrorKind::EmptyTextFile);
        let display = err.to_string();
        assert!(
            display.contains("notes.txt"),
            "Error message should name the document: {}",
            display
        );

        let err = PolidiffError::unsupported_format("a.xlsx", "xlsx", "spreadsheets not supported");
        assert!(err.to_string().contains("a.xlsx"));
    }

    #[test]
    fn test_file_too_large_display() {
        let kind = ExtractionErrorKind::FileTooLarge {
            size: 20_000_000,
            limit: 16_777_216,
        };
        let display = kind.to_string();
        assert!(display.contains("20000000"));
        assert!(display.contains("16777216"));
    }

    #[test]
    fn test_error_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err = PolidiffError::io("/path/to/policy.txt", io_err);

        assert!(err.to_string().contains("/path/to/policy.txt"));
    }

    #[test]
    fn test_context_chaining() {
        let initial_err: Result<()> = Err(PolidiffError::extraction(
            "initial context",
            ExtractionErrorKind::UndecodableText,
        ));

        let err_with_context = initial_err.context("outer context");

        match err_with_context {
            Err(PolidiffError::Extraction { label, .. }) => {
                assert!(
                    label.contains("outer context"),
                    "Should contain outer context: {}",
                    label
                );
                assert!(
                    label.contains("initial context"),
                    "Should contain initial context: {}",
                    label
                );
            }
            _ => panic!("Expected Extraction error"),
        }
    }

    #[test]
    fn test_context_chaining_multiple_levels() {
        fn inner() -> Result<()> {
            Err(PolidiffError::config("base"))
        }

        fn middle() -> Result<()> {
            inner().context("middle layer")
        }

        fn outer() -> Result<()> {
            middle().context("outer layer")
        }

        let result = outer();
        match result {
            Err(PolidiffError::Config(context)) => {
                assert!(context.contains("outer layer"), "Missing outer: {}", context);
                assert!(
                    context.contains("middle layer"),
                    "Missing middle: {}",
                    context
                );
                assert!(context.contains("base"), "Missing base: {}", context);
            }
            _ => panic!("Expected Config error"),
        }
    }

    #[test]
    fn test_with_context_lazy_evaluation() {
        let mut called = false;

        let ok_result: Result<i32> = Ok(42);
        let _ = ok_result.with_context(|| {
            called = true;
            "should not be called"
        });
        assert!(!called, "Closure should not be called for Ok result");

        let err_result: Result<i32> = Err(PolidiffError::input("error"));
        let _ = err_result.with_context(|| {
            called = true;
            "should be called"
        });
        assert!(called, "Closure should be called for Err result");
    }

    #[test]
    fn test_chain_context_helper() {
        assert_eq!(chain_context("new", ""), "new");
        assert_eq!(chain_context("new", "existing"), "new: existing");
        assert_eq!(
            chain_context("outer", "middle: inner"),
            "outer: middle: inner"
        );
    }
}
