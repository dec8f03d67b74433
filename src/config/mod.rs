//! Runtime configuration.
//!
//! Settings are layered: compiled defaults, then a discovered (or named)
//! `.polidiff.yaml`, then CLI arguments, each overriding the last. Presets
//! bundle common combinations, and every config type can validate itself
//! before a run starts.
//!
//! ```rust,ignore
//! use polidiff::config::{AppConfig, ConfigPreset};
//!
//! let defaults = AppConfig::default();
//! let ci = AppConfig::from_preset(ConfigPreset::CiCd);
//! let custom = AppConfig::builder().fail_on_change(true).quiet(true).build();
//!
//! // Or discover a .polidiff.yaml and fall back to defaults
//! let (config, loaded_from) = polidiff::config::load_or_default(None);
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, CompareConfig, CompareConfigBuilder,
    ComparePaths, InspectConfig, LimitsConfig, NarrativeSettings, OutputConfig,
    NARRATIVE_API_KEY_ENV, NARRATIVE_DEPLOYMENT_ENV, NARRATIVE_ENDPOINT_ENV,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.polidiff.yaml` config files. It can be used by editors for
/// validation and autocompletion.
#[must_use]
pub fn generate_json_schema() -> String {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema).expect("schema serialization should not fail")
}
