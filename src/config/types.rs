//! Configuration types for polidiff operations.
//!
//! Provides structured configuration for compare and inspect operations.

use crate::extract::DEFAULT_MAX_DOCUMENT_BYTES;
use crate::narrative::{
    NarrativeConfig, DEFAULT_API_VERSION, DEFAULT_MAX_RETRIES, DEFAULT_REQUEST_TIMEOUT_SECS,
};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable holding the narrative service API key.
pub const NARRATIVE_API_KEY_ENV: &str = "POLIDIFF_NARRATIVE_API_KEY";
/// Environment fallback for the narrative service endpoint.
pub const NARRATIVE_ENDPOINT_ENV: &str = "POLIDIFF_NARRATIVE_ENDPOINT";
/// Environment fallback for the narrative deployment name.
pub const NARRATIVE_DEPLOYMENT_ENV: &str = "POLIDIFF_NARRATIVE_DEPLOYMENT";

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// This is the top-level configuration struct that aggregates all configuration
/// options. It can be constructed from CLI arguments, config files, or both
/// (with CLI overriding file settings).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Output configuration (format, file, colors)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Input limits
    pub limits: LimitsConfig,
    /// Narrative service settings
    pub narrative: NarrativeSettings,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable fail-on-low-integrity mode.
    pub const fn fail_on_low_integrity(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_low_integrity = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Request a narrative in compare responses.
    pub const fn narrative(mut self, narrative: bool) -> Self {
        self.config.behavior.narrative = narrative;
        self
    }

    /// Cap the input document size in bytes.
    pub const fn max_document_bytes(mut self, bytes: u64) -> Self {
        self.config.limits.max_document_bytes = bytes;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Sub-configuration Types
// ============================================================================

/// Output-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Disable colored output
    pub no_color: bool,
}

/// Behavior flags for compare operations
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes detected
    pub fail_on_change: bool,
    /// Exit with code 2 if comparison integrity falls below the reliable band
    pub fail_on_low_integrity: bool,
    /// Suppress non-essential output
    pub quiet: bool,
    /// Include a narrative in compare responses
    pub narrative: bool,
}

/// Input size limits
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum size of one input document in bytes
    #[schemars(range(min = 1))]
    pub max_document_bytes: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }
}

/// Narrative service settings.
///
/// The API key never travels through config files; it is read from
/// [`NARRATIVE_API_KEY_ENV`] when the runtime config is assembled. The
/// endpoint and deployment can come from the file or from their
/// environment fallbacks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct NarrativeSettings {
    /// Service base URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Model deployment name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deployment: Option<String>,
    /// Service API version
    pub api_version: String,
    /// Request timeout in seconds
    #[schemars(range(min = 1))]
    pub request_timeout_secs: u64,
    /// Maximum retries for failed requests
    pub max_retries: u8,
}

impl Default for NarrativeSettings {
    fn default() -> Self {
        Self {
            endpoint: None,
            deployment: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl NarrativeSettings {
    /// Assemble the runtime narrative config, pulling the API key and any
    /// missing endpoint or deployment from the environment.
    #[must_use]
    pub fn to_runtime(&self) -> NarrativeConfig {
        NarrativeConfig {
            endpoint: self
                .endpoint
                .clone()
                .or_else(|| std::env::var(NARRATIVE_ENDPOINT_ENV).ok()),
            api_key: std::env::var(NARRATIVE_API_KEY_ENV).ok(),
            deployment: self
                .deployment
                .clone()
                .or_else(|| std::env::var(NARRATIVE_DEPLOYMENT_ENV).ok()),
            api_version: self.api_version.clone(),
            request_timeout_secs: self.request_timeout_secs,
            max_retries: self.max_retries,
        }
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for compare operations
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Paths to compare
    pub paths: ComparePaths,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Input limits
    pub limits: LimitsConfig,
    /// Narrative service settings
    pub narrative: NarrativeSettings,
}

/// Paths for compare operation
#[derive(Debug, Clone)]
pub struct ComparePaths {
    /// Path to the older document
    pub old: PathBuf,
    /// Path to the newer document
    pub new: PathBuf,
}

/// Configuration for inspect operations
#[derive(Debug, Clone)]
pub struct InspectConfig {
    /// Path to the document
    pub path: PathBuf,
    /// Output configuration
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
    /// Input limits
    pub limits: LimitsConfig,
}

// ============================================================================
// Builder for CompareConfig
// ============================================================================

/// Builder for `CompareConfig`
#[derive(Debug, Default)]
pub struct CompareConfigBuilder {
    old: Option<PathBuf>,
    new: Option<PathBuf>,
    output: OutputConfig,
    behavior: BehaviorConfig,
    limits: LimitsConfig,
    narrative: NarrativeSettings,
}

impl CompareConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn old_path(mut self, path: PathBuf) -> Self {
        self.old = Some(path);
        self
    }

    #[must_use]
    pub fn new_path(mut self, path: PathBuf) -> Self {
        self.new = Some(path);
        self
    }

    #[must_use]
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.output.format = format;
        self
    }

    #[must_use]
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.output.file = file;
        self
    }

    #[must_use]
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.output.no_color = no_color;
        self
    }

    #[must_use]
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.behavior.fail_on_change = fail;
        self
    }

    #[must_use]
    pub const fn fail_on_low_integrity(mut self, fail: bool) -> Self {
        self.behavior.fail_on_low_integrity = fail;
        self
    }

    #[must_use]
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.behavior.quiet = quiet;
        self
    }

    #[must_use]
    pub const fn narrative(mut self, narrative: bool) -> Self {
        self.behavior.narrative = narrative;
        self
    }

    #[must_use]
    pub const fn max_document_bytes(mut self, bytes: u64) -> Self {
        self.limits.max_document_bytes = bytes;
        self
    }

    #[must_use]
    pub fn narrative_settings(mut self, settings: NarrativeSettings) -> Self {
        self.narrative = settings;
        self
    }

    /// Build the `CompareConfig`.
    ///
    /// # Errors
    ///
    /// Fails when either document path is missing.
    pub fn build(self) -> anyhow::Result<CompareConfig> {
        let old = self
            .old
            .ok_or_else(|| anyhow::anyhow!("old path is required"))?;
        let new = self
            .new
            .ok_or_else(|| anyhow::anyhow!("new path is required"))?;

        Ok(CompareConfig {
            paths: ComparePaths { old, new },
            output: self.output,
            behavior: self.behavior,
            limits: self.limits,
            narrative: self.narrative,
        })
    }
}
