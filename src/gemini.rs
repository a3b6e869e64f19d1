use crate::types::{PipelineError, Result};
use async_trait::async_trait;
use backoff::{backoff::Backoff, exponential::ExponentialBackoff};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Opaque text-generation capability behind the semantic scorer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable name of the backing model or stub.
    fn generator_name(&self) -> String;

    /// Produce a completion for the prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Configuration for the Gemini-backed generator.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_delay_seconds: u64,
    pub user_agent: String,
}

impl GeminiConfig {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            model: "gemini-1.5-flash".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
            retry_delay_seconds: 2,
            user_agent: "timestamp-finder/0.1".to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

/// Gemini `generateContent` client implementing [`TextGenerator`].
pub struct GeminiGenerator {
    client: Client,
    config: GeminiConfig,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

impl GeminiGenerator {
    pub fn new(config: GeminiConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.config.model
        )
    }

    async fn request_once(&self, prompt: &str) -> Result<String> {
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.config.api_key.as_str())])
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PipelineError::Generation(format!(
                "HTTP {}: {}",
                status,
                status.canonical_reason().unwrap_or("Unknown")
            )));
        }

        let parsed: GenerateResponse = response.json().await?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| PipelineError::Generation("no candidates in response".to_string()))
    }
}

#[async_trait]
impl TextGenerator for GeminiGenerator {
    fn generator_name(&self) -> String {
        format!("Gemini ({})", self.config.model)
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let mut backoff: ExponentialBackoff<backoff::SystemClock> = ExponentialBackoff {
            current_interval: Duration::from_secs(self.config.retry_delay_seconds),
            initial_interval: Duration::from_secs(self.config.retry_delay_seconds),
            max_interval: Duration::from_secs(self.config.retry_delay_seconds * 16),
            multiplier: 2.0,
            max_elapsed_time: Some(Duration::from_secs(self.config.retry_delay_seconds * 60)),
            ..Default::default()
        };

        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            match self.request_once(prompt).await {
                Ok(text) => {
                    debug!("generation succeeded ({} chars)", text.len());
                    return Ok(text);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < self.config.max_retries {
                        if let Some(delay) = backoff.next_backoff() {
                            warn!(
                                "generation attempt {} failed, retrying in {:?}",
                                attempt + 1,
                                delay
                            );
                            tokio::time::sleep(delay).await;
                        }
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| PipelineError::Generation("no attempts were made".to_string())))
    }
}

/// Generator that replays canned responses keyed by a prompt substring.
/// Used by tests and offline demos in place of the real model.
pub struct CannedGenerator {
    responses: Vec<(String, String)>,
    fallback: String,
}

impl CannedGenerator {
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            responses: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Reply with `response` whenever the prompt contains `needle`.
    pub fn with_response(mut self, needle: impl Into<String>, response: impl Into<String>) -> Self {
        self.responses.push((needle.into(), response.into()));
        self
    }
}

#[async_trait]
impl TextGenerator for CannedGenerator {
    fn generator_name(&self) -> String {
        "canned".to_string()
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let reply = self
            .responses
            .iter()
            .find(|(needle, _)| prompt.contains(needle.as_str()))
            .map(|(_, response)| response.clone())
            .unwrap_or_else(|| self.fallback.clone());
        Ok(reply)
    }
}
