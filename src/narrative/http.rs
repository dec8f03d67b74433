//! Chat-completions service client.
//!
//! Speaks the Azure-style deployments API: the completions URL is built
//! from endpoint, deployment name, and API version, and the key travels in
//! the `api-key` header. Requests are retried with exponential backoff.

use super::{build_comparison_prompt, NarrativeConfig, NarrativeGenerator};
use crate::diff::ComparisonReport;
use crate::error::{NarrativeErrorKind, PolidiffError, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Tokens the service may spend on one narrative.
const MAX_COMPLETION_TOKENS: u32 = 4000;
/// Near-zero temperature keeps the narrative tied to the supplied analysis.
const TEMPERATURE: f64 = 0.05;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: String,
}

/// Service-backed narrative generator.
#[derive(Debug)]
pub struct HttpNarrativeGenerator {
    client: Client,
    endpoint: String,
    api_key: String,
    deployment: String,
    api_version: String,
    max_retries: u8,
}

fn narrative_error(context: &str, kind: NarrativeErrorKind) -> PolidiffError {
    PolidiffError::narrative(context, kind)
}

/// Exponential backoff for retry `attempt` (1-based): 1s, 2s, 4s, ...
/// capped at 64s so large configured retry counts cannot overflow the shift.
fn backoff_delay(attempt: u8) -> Duration {
    Duration::from_secs(1u64 << u32::from(attempt.saturating_sub(1)).min(6))
}

impl HttpNarrativeGenerator {
    /// Build a client from a fully populated config.
    ///
    /// # Errors
    ///
    /// Returns `Unconfigured` when endpoint, key, or deployment is missing,
    /// and a network error when the HTTP client cannot be constructed.
    pub fn new(config: NarrativeConfig) -> Result<Self> {
        let unconfigured =
            || narrative_error("building client", NarrativeErrorKind::Unconfigured);
        let endpoint = config.endpoint.clone().ok_or_else(unconfigured)?;
        let api_key = config.api_key.clone().ok_or_else(unconfigured)?;
        let deployment = config.deployment.clone().ok_or_else(unconfigured)?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .map_err(|e| {
                narrative_error(
                    "building HTTP client",
                    NarrativeErrorKind::Network(e.to_string()),
                )
            })?;

        Ok(Self {
            client,
            endpoint,
            api_key,
            deployment,
            api_version: config.api_version,
            max_retries: config.max_retries,
        })
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.trim_end_matches('/'),
            self.deployment,
            self.api_version
        )
    }

    /// Send one request and extract the completion text.
    fn send_request(&self, url: &str, request: &ChatRequest<'_>) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("api-key", &self.api_key)
            .json(request)
            .send()
            .map_err(|e| {
                let kind = if e.is_timeout() {
                    NarrativeErrorKind::Timeout
                } else {
                    NarrativeErrorKind::Network(e.to_string())
                };
                narrative_error("chat completion request", kind)
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(narrative_error(
                "chat completion request",
                NarrativeErrorKind::Http {
                    status: status.as_u16(),
                },
            ));
        }

        let chat: ChatResponse = response.json().map_err(|e| {
            narrative_error(
                "parsing response",
                NarrativeErrorKind::MalformedResponse(e.to_string()),
            )
        })?;

        chat.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or_else(|| {
                narrative_error(
                    "parsing response",
                    NarrativeErrorKind::MalformedResponse(
                        "no completion choices returned".to_string(),
                    ),
                )
            })
    }
}

impl NarrativeGenerator for HttpNarrativeGenerator {
    fn generate(
        &self,
        report: &ComparisonReport,
        label_a: &str,
        label_b: &str,
    ) -> Result<String> {
        let prompt = build_comparison_prompt(report, label_a, label_b);
        let url = self.completions_url();
        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: &prompt.system,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt.user,
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };

        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                let delay = backoff_delay(attempt);
                std::thread::sleep(delay);
                tracing::debug!("Retry attempt {} after {:?}", attempt, delay);
            }

            match self.send_request(&url, &request) {
                Ok(text) => return Ok(text),
                Err(e) => {
                    tracing::debug!("Narrative request attempt {} failed: {}", attempt + 1, e);
                    last_error = Some(e);
                }
            }
        }

        Err(last_error.unwrap_or_else(|| {
            narrative_error(
                "chat completion request",
                NarrativeErrorKind::RetriesExhausted {
                    attempts: u32::from(self.max_retries) + 1,
                },
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn configured() -> NarrativeConfig {
        NarrativeConfig {
            endpoint: Some("https://svc.example.com/".to_string()),
            api_key: Some("test-key".to_string()),
            deployment: Some("gpt-4o".to_string()),
            ..NarrativeConfig::default()
        }
    }

    #[test]
    fn test_completions_url_shape() {
        let generator = HttpNarrativeGenerator::new(configured()).unwrap();
        assert_eq!(
            generator.completions_url(),
            "https://svc.example.com/openai/deployments/gpt-4o/chat/completions?api-version=2024-06-01"
        );
    }

    #[test]
    fn test_missing_fields_reject_construction() {
        let mut config = configured();
        config.deployment = None;

        let err = HttpNarrativeGenerator::new(config).unwrap_err();
        assert!(matches!(
            err,
            PolidiffError::Narrative {
                source: NarrativeErrorKind::Unconfigured,
                ..
            }
        ));
    }

    #[test]
    fn test_backoff_delay_doubles_then_caps() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(2));
        assert_eq!(backoff_delay(3), Duration::from_secs(4));
        assert_eq!(backoff_delay(7), Duration::from_secs(64));
        // Large configured retry counts stay at the cap instead of
        // overflowing the shift
        assert_eq!(backoff_delay(100), Duration::from_secs(64));
        assert_eq!(backoff_delay(u8::MAX), Duration::from_secs(64));
    }

    #[test]
    fn test_request_serialization() {
        let request = ChatRequest {
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: "sys",
                },
                ChatMessage {
                    role: "user",
                    content: "usr",
                },
            ],
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: TEMPERATURE,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["max_tokens"], 4000);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "usr");
        assert!((json["temperature"].as_f64().unwrap() - 0.05).abs() < f64::EPSILON);
    }
}
