//! Configuration validation.
//!
//! Every config type reports all of its problems at once instead of
//! stopping at the first, so a bad file can be fixed in one pass.

use super::types::*;
use std::path::Path;

/// One failed validation check, tied to the offending field.
#[derive(Debug, Clone)]
pub struct ConfigError {
    pub field: String,
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Config types that can check themselves.
pub trait Validatable {
    fn validate(&self) -> Vec<ConfigError>;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        [
            self.output.validate(),
            self.behavior.validate(),
            self.limits.validate(),
            self.narrative.validate(),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // The report file itself may not exist yet, but its directory must
        if let Some(parent) = self.file.as_deref().and_then(Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError {
                    field: "output.file".to_string(),
                    message: format!("Parent directory does not exist: {}", parent.display()),
                });
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // only boolean flags, nothing to check
        Vec::new()
    }
}

impl Validatable for LimitsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.max_document_bytes == 0 {
            errors.push(ConfigError {
                field: "limits.max_document_bytes".to_string(),
                message: "Maximum document size must be at least 1 byte".to_string(),
            });
        }
        errors
    }
}

impl Validatable for NarrativeSettings {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.api_version.trim().is_empty() {
            errors.push(ConfigError {
                field: "narrative.api_version".to_string(),
                message: "API version must not be empty".to_string(),
            });
        }

        if self.request_timeout_secs == 0 {
            errors.push(ConfigError {
                field: "narrative.request_timeout_secs".to_string(),
                message: "Request timeout must be at least 1 second".to_string(),
            });
        }

        if let Some(ref endpoint) = self.endpoint {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                errors.push(ConfigError {
                    field: "narrative.endpoint".to_string(),
                    message: format!("Endpoint must be an http(s) URL, got '{endpoint}'"),
                });
            }
        }

        errors
    }
}

impl Validatable for CompareConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate paths exist
        if !self.paths.old.exists() {
            errors.push(ConfigError {
                field: "paths.old".to_string(),
                message: format!("File not found: {}", self.paths.old.display()),
            });
        }
        if !self.paths.new.exists() {
            errors.push(ConfigError {
                field: "paths.new".to_string(),
                message: format!("File not found: {}", self.paths.new.display()),
            });
        }

        errors.extend(self.output.validate());
        errors.extend(self.limits.validate());
        errors.extend(self.narrative.validate());

        errors
    }
}

impl Validatable for InspectConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if !self.path.exists() {
            errors.push(ConfigError {
                field: "path".to_string(),
                message: format!("File not found: {}", self.path.display()),
            });
        }
        errors.extend(self.output.validate());
        errors.extend(self.limits.validate());
        errors
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_limits_validation() {
        let valid = LimitsConfig::default();
        assert!(valid.is_valid());

        let invalid = LimitsConfig {
            max_document_bytes: 0,
        };
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_narrative_settings_validation() {
        let valid = NarrativeSettings::default();
        assert!(valid.is_valid());

        let invalid = NarrativeSettings {
            api_version: String::new(),
            ..NarrativeSettings::default()
        };
        assert!(!invalid.is_valid());

        let bad_endpoint = NarrativeSettings {
            endpoint: Some("ftp://example.com".to_string()),
            ..NarrativeSettings::default()
        };
        let errors = bad_endpoint.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "narrative.endpoint");

        let good_endpoint = NarrativeSettings {
            endpoint: Some("https://example.openai.azure.com".to_string()),
            ..NarrativeSettings::default()
        };
        assert!(good_endpoint.is_valid());
    }

    #[test]
    fn test_compare_config_validation_missing_files() {
        let config = CompareConfig {
            paths: ComparePaths {
                old: PathBuf::from("/nonexistent/a.txt"),
                new: PathBuf::from("/nonexistent/b.txt"),
            },
            output: OutputConfig::default(),
            behavior: BehaviorConfig::default(),
            limits: LimitsConfig::default(),
            narrative: NarrativeSettings::default(),
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().any(|e| e.field == "paths.old"));
        assert!(errors.iter().any(|e| e.field == "paths.new"));
    }

    #[test]
    fn test_config_error_display() {
        let error = ConfigError {
            field: "test_field".to_string(),
            message: "test error message".to_string(),
        };
        assert_eq!(error.to_string(), "test_field: test error message");
    }

    #[test]
    fn test_app_config_validation() {
        let valid = AppConfig::default();
        assert!(valid.is_valid());

        let mut invalid = AppConfig::default();
        invalid.limits.max_document_bytes = 0;
        assert!(!invalid.is_valid());
    }
}
