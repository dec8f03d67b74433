//! Default configurations and presets for polidiff.
//!
//! Provides named presets for common use cases.

use super::types::{AppConfig, BehaviorConfig, LimitsConfig, NarrativeSettings, OutputConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default balanced settings suitable for most cases
    Default,
    /// CI/CD: machine-readable output, fail on changes and low integrity
    CiCd,
    /// Review: markdown output with a narrative, for human readers
    Review,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::CiCd => "ci-cd",
            Self::Review => "review",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "balanced" => Some(Self::Default),
            "ci-cd" | "ci" | "cd" | "pipeline" => Some(Self::CiCd),
            "review" | "analyst" => Some(Self::Review),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Balanced settings suitable for most document comparisons",
            Self::CiCd => "Machine-readable output with failure modes for CI/CD pipelines",
            Self::Review => "Markdown report with narrative for manual policy review",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::CiCd, Self::Review]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
            ConfigPreset::Review => Self::review_preset(),
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Fail on any change and on low comparison integrity
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        use crate::reports::ReportFormat;

        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                no_color: true,
            },
            behavior: BehaviorConfig {
                fail_on_change: true,
                fail_on_low_integrity: true,
                quiet: true,
                narrative: false,
            },
            limits: LimitsConfig::default(),
            narrative: NarrativeSettings::default(),
        }
    }

    /// Review preset for human readers.
    ///
    /// - Markdown output suitable for sharing
    /// - Narrative requested when the service is configured
    #[must_use]
    pub fn review_preset() -> Self {
        use crate::reports::ReportFormat;

        Self {
            output: OutputConfig {
                format: ReportFormat::Markdown,
                file: None,
                no_color: false,
            },
            behavior: BehaviorConfig {
                fail_on_change: false,
                fail_on_low_integrity: false,
                quiet: false,
                narrative: true,
            },
            limits: LimitsConfig::default(),
            narrative: NarrativeSettings::default(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;

    #[test]
    fn test_preset_names() {
        assert_eq!(ConfigPreset::Default.name(), "default");
        assert_eq!(ConfigPreset::CiCd.name(), "ci-cd");
        assert_eq!(ConfigPreset::Review.name(), "review");
    }

    #[test]
    fn test_preset_from_name() {
        assert_eq!(
            ConfigPreset::from_name("default"),
            Some(ConfigPreset::Default)
        );
        assert_eq!(ConfigPreset::from_name("ci-cd"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("pipeline"), Some(ConfigPreset::CiCd));
        assert_eq!(ConfigPreset::from_name("REVIEW"), Some(ConfigPreset::Review));
        assert_eq!(ConfigPreset::from_name("invalid"), None);
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::ci_cd_preset();
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.behavior.fail_on_change);
        assert!(config.behavior.fail_on_low_integrity);
        assert!(config.behavior.quiet);
        assert!(config.output.no_color);
    }

    #[test]
    fn test_review_preset() {
        let config = AppConfig::review_preset();
        assert_eq!(config.output.format, ReportFormat::Markdown);
        assert!(config.behavior.narrative);
        assert!(!config.behavior.fail_on_change);
    }

    #[test]
    fn test_all_presets() {
        let all = ConfigPreset::all();
        assert_eq!(all.len(), 3);
    }
}
