//! Narrative generation for comparison reports.
//!
//! Turns a structured [`ComparisonReport`] into prose a compliance reviewer
//! can read. Two renderers exist: a chat-completions service client behind
//! the `narrative` feature, and a deterministic fallback that is always
//! available. The service prompt embeds the structured analysis so the
//! model describes the computed changes instead of re-deriving them, and
//! any service failure degrades to the fallback rather than failing the
//! comparison.

#[cfg(feature = "narrative")]
mod http;

#[cfg(feature = "narrative")]
pub use http::HttpNarrativeGenerator;

use crate::diff::ComparisonReport;
use crate::error::Result;

/// Default API version sent to the chat-completions service.
pub const DEFAULT_API_VERSION: &str = "2024-06-01";
/// Default request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 120;
/// Default retry count for failed service requests.
pub const DEFAULT_MAX_RETRIES: u8 = 3;

/// Runtime settings for the narrative service.
///
/// A config is considered usable when `endpoint`, `api_key`, and
/// `deployment` are all present; otherwise only the fallback renderer runs.
#[derive(Debug, Clone)]
pub struct NarrativeConfig {
    /// Service base URL, e.g. `https://example.openai.azure.com`
    pub endpoint: Option<String>,
    /// Service API key, normally sourced from the environment
    pub api_key: Option<String>,
    /// Model deployment name
    pub deployment: Option<String>,
    pub api_version: String,
    pub request_timeout_secs: u64,
    pub max_retries: u8,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            deployment: None,
            api_version: DEFAULT_API_VERSION.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl NarrativeConfig {
    /// True when every field needed to reach the service is present.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.endpoint.is_some() && self.api_key.is_some() && self.deployment.is_some()
    }
}

/// Narrative rendering seam.
pub trait NarrativeGenerator {
    /// Produce a markdown narrative for a comparison report.
    ///
    /// # Errors
    ///
    /// Returns a narrative error when the backing service cannot be
    /// reached or replies with an unusable response.
    fn generate(&self, report: &ComparisonReport, label_a: &str, label_b: &str)
        -> Result<String>;
}

/// System and user halves of a chat-completions prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPrompt {
    pub system: String,
    pub user: String,
}

/// Build the service prompt for a comparison report.
///
/// The structured analysis travels inside the prompt so the narrative is
/// grounded in computed numbers; raw document text is never sent.
#[must_use]
pub fn build_comparison_prompt(
    report: &ComparisonReport,
    label_a: &str,
    label_b: &str,
) -> ComparisonPrompt {
    let system = "You are a policy analyst who explains differences between two versions \
                  of a policy document to compliance reviewers. Base every statement \
                  strictly on the structured analysis provided and do not invent changes. \
                  Answer in markdown."
        .to_string();

    let counts = &report.content_changes.summary;
    let integrity = &report.integrity_assessment;

    let mut user = String::new();
    user.push_str(&format!(
        "Compare the documents '{label_a}' (older) and '{label_b}' (newer).\n\n"
    ));
    user.push_str("Structural analysis:\n");
    user.push_str(&format!(
        "- Older document: {} words, {} characters\n",
        report.statistics.document_a.word_count, report.statistics.document_a.char_count
    ));
    user.push_str(&format!(
        "- Newer document: {} words, {} characters\n",
        report.statistics.document_b.word_count, report.statistics.document_b.char_count
    ));
    user.push_str(&format!(
        "- Word count change: {:+.1}%\n",
        report.statistics.differences.word_percentage
    ));
    user.push_str(&format!(
        "- Sections added: {}, removed: {}, modified: {}, moved: {}\n",
        counts.additions,
        counts.deletions,
        counts.modifications,
        report.movements.len()
    ));
    user.push_str(&format!(
        "- Statistical red flags: {}\n",
        report.statistics.red_flags.len()
    ));
    user.push_str(&format!(
        "- Comparison integrity: {}/100 ({})\n",
        integrity.score,
        integrity.level.as_str()
    ));

    user.push_str("\nChange summary:\n");
    for line in &report.change_summary {
        user.push_str(&format!("- {line}\n"));
    }

    user.push_str("\nIntegrity warnings:\n");
    if integrity.warnings.is_empty() {
        user.push_str("- none\n");
    } else {
        for warning in &integrity.warnings {
            user.push_str(&format!("- {warning}\n"));
        }
    }

    user.push_str(
        "\nWrite a concise narrative for a compliance reviewer covering the overall \
         scale of the change, which sections changed and how, and whether the \
         comparison itself can be trusted. Use markdown headings.\n",
    );

    ComparisonPrompt { system, user }
}

/// Deterministic narrative used when no service is available.
#[must_use]
pub fn fallback_narrative(report: &ComparisonReport, label_a: &str, label_b: &str) -> String {
    let integrity = &report.integrity_assessment;

    let mut out = format!("## Comparison of {label_a} and {label_b}\n\n");
    for line in &report.change_summary {
        out.push_str(&format!("- {line}\n"));
    }

    out.push_str(&format!(
        "\n### Comparison integrity\n\nScore {}/100 ({}). {}\n",
        integrity.score,
        integrity.level.as_str(),
        integrity.recommendation
    ));

    if !report.critical_issues.is_empty() {
        out.push_str("\n### Critical issues\n\n");
        for issue in &report.critical_issues {
            out.push_str(&format!(
                "- **{}**: {} ({})\n",
                issue.severity, issue.message, issue.action_required
            ));
        }
    }

    out.push_str("\n_Generated without language model assistance._\n");
    out
}

/// Fixed narrative for byte-identical document pairs.
#[must_use]
pub fn identical_narrative(label_a: &str, label_b: &str) -> String {
    format!(
        "## Comparison of {label_a} and {label_b}\n\n\
         The documents are identical. No content, structure, or formatting \
         differences were found.\n\n\
         No further analysis is required.\n"
    )
}

/// Render a narrative, degrading to the fallback on any service problem.
#[must_use]
pub fn generate_with_fallback(
    config: &NarrativeConfig,
    report: &ComparisonReport,
    label_a: &str,
    label_b: &str,
) -> String {
    #[cfg(feature = "narrative")]
    {
        if config.is_configured() {
            match HttpNarrativeGenerator::new(config.clone()) {
                Ok(generator) => match generator.generate(report, label_a, label_b) {
                    Ok(text) => return text,
                    Err(err) => {
                        tracing::warn!(error = %err, "narrative service failed, using fallback");
                    }
                },
                Err(err) => {
                    tracing::warn!(error = %err, "narrative client unavailable, using fallback");
                }
            }
        } else {
            tracing::debug!("narrative service not configured, using fallback");
        }
    }
    #[cfg(not(feature = "narrative"))]
    {
        let _ = config;
        tracing::debug!("narrative feature disabled, using fallback");
    }

    fallback_narrative(report, label_a, label_b)
}
