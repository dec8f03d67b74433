//! YAML configuration files: discovery, loading, and layering.

use super::types::AppConfig;
use std::path::{Path, PathBuf};

/// File names recognized during discovery, in preference order.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".polidiff.yaml",
    ".polidiff.yml",
    "polidiff.yaml",
    "polidiff.yml",
];

/// Locate a config file.
///
/// An explicit path wins when it exists. Otherwise the current directory,
/// the enclosing git repository root, `~/.config/polidiff/`, and the home
/// directory are searched in that order.
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    let candidates = [
        std::env::current_dir().ok(),
        find_git_root(),
        dirs::config_dir().map(|d| d.join("polidiff")),
        dirs::home_dir(),
    ];

    candidates
        .into_iter()
        .flatten()
        .find_map(|dir| find_config_in_dir(&dir))
}

fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Walk up from the working directory until a `.git` entry appears.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    cwd.ancestors()
        .find(|dir| dir.join(".git").exists())
        .map(Path::to_path_buf)
}

/// Failure modes when reading a config file.
#[derive(Debug)]
pub enum ConfigFileError {
    NotFound(PathBuf),
    Io(std::io::Error),
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => write!(f, "config file not found: {}", path.display()),
            Self::Io(e) => write!(f, "could not read config file: {e}"),
            Self::Parse(e) => write!(f, "could not parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Read and parse one YAML config file.
///
/// Absent sections fall back to their defaults, so partial files are fine.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Discover and load a config file, falling back to defaults.
///
/// A file that exists but fails to load is reported as a warning rather
/// than aborting the run; the defaults are used instead.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    let Some(path) = discover_config_file(explicit_path) else {
        return (AppConfig::default(), None);
    };
    match load_config_file(&path) {
        Ok(config) => (config, Some(path)),
        Err(e) => {
            tracing::warn!("Ignoring config file {}: {}", path.display(), e);
            (AppConfig::default(), None)
        }
    }
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// This is useful for layering CLI args over file config. Only values
    /// that differ from the defaults in `other` are copied over.
    pub fn merge(&mut self, other: &Self) {
        // Output config - only override if explicitly set
        if other.output.format != crate::reports::ReportFormat::Summary {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.fail_on_low_integrity {
            self.behavior.fail_on_low_integrity = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
        if other.behavior.narrative {
            self.behavior.narrative = true;
        }

        // Limits
        if other.limits.max_document_bytes != crate::extract::DEFAULT_MAX_DOCUMENT_BYTES {
            self.limits.max_document_bytes = other.limits.max_document_bytes;
        }

        // Narrative settings
        if other.narrative.endpoint.is_some() {
            self.narrative.endpoint.clone_from(&other.narrative.endpoint);
        }
        if other.narrative.deployment.is_some() {
            self.narrative
                .deployment
                .clone_from(&other.narrative.deployment);
        }
        if other.narrative.api_version != crate::narrative::DEFAULT_API_VERSION {
            self.narrative
                .api_version
                .clone_from(&other.narrative.api_version);
        }
        if other.narrative.request_timeout_secs != crate::narrative::DEFAULT_REQUEST_TIMEOUT_SECS {
            self.narrative.request_timeout_secs = other.narrative.request_timeout_secs;
        }
        if other.narrative.max_retries != crate::narrative::DEFAULT_MAX_RETRIES {
            self.narrative.max_retries = other.narrative.max_retries;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# polidiff configuration
# Place this file at .polidiff.yaml in your project root or ~/.config/polidiff/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# polidiff Configuration File
# ===========================
#
# This file configures polidiff behavior. Place it at:
#   - .polidiff.yaml in your project root
#   - ~/.config/polidiff/polidiff.yaml for global config
#
# CLI arguments always override file settings.

# Output configuration
output:
  # Format: summary, json, markdown
  format: summary
  # Output file path (omit for stdout)
  # file: report.json
  # Disable colored output
  no_color: false

# Behavior flags
behavior:
  # Exit with code 1 if any changes detected
  fail_on_change: false
  # Exit with code 2 if comparison integrity is low
  fail_on_low_integrity: false
  # Suppress non-essential output
  quiet: false
  # Include a generated narrative in compare reports
  narrative: false

# Input limits
limits:
  # Maximum input document size in bytes (default 16 MiB)
  max_document_bytes: 16777216

# Narrative service settings
# The API key is never read from this file; set POLIDIFF_NARRATIVE_API_KEY.
narrative:
  # Service base URL (or set POLIDIFF_NARRATIVE_ENDPOINT)
  # endpoint: https://example.openai.azure.com
  # Model deployment name (or set POLIDIFF_NARRATIVE_DEPLOYMENT)
  # deployment: gpt-4o
  api_version: 2024-06-01
  request_timeout_secs: 120
  max_retries: 3
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
