use crate::types::{Result, SummarizerConfig, SummarizerError};
use crate::utils;
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::collections::VecDeque;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Returned in place of a summary when no API key is configured.
pub const NO_API_KEY_SENTINEL: &str =
    "No API key provided. Please enter your Hugging Face key.";

/// Returned in place of a summary when the endpoint fails or answers with an
/// unexpected shape.
pub const SUMMARY_UNAVAILABLE_SENTINEL: &str = "Summary not available.";

/// Trait for summarization backends.
#[async_trait]
pub trait Summarize: Send + Sync {
    /// Human-readable name for this backend
    fn name(&self) -> String;

    /// Produce a summary for `text`. The hosted backend degrades to sentinel
    /// strings instead of erroring; `Err` is reserved for backends that can
    /// fail outright, which the pipeline renders as a placeholder line.
    async fn summarize(&self, text: &str) -> Result<String>;
}

#[derive(Serialize)]
struct SummarizeRequest<'a> {
    inputs: &'a str,
}

/// Client for the hosted BART summarization endpoint.
pub struct HfSummarizer {
    client: Client,
    config: SummarizerConfig,
}

impl HfSummarizer {
    pub fn new(config: SummarizerConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    async fn request_summary(&self, api_key: &str, text: &str) -> Result<String> {
        let inputs = utils::truncate_chars(text, self.config.max_input_chars);
        debug!(
            "Requesting summary for {} chars from {}",
            inputs.chars().count(),
            self.config.endpoint
        );

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&SummarizeRequest { inputs })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                url: self.config.endpoint.clone(),
            });
        }

        let body: Value = response.json().await?;
        extract_summary_text(&body)
    }
}

/// The endpoint answers with a JSON array whose first element carries
/// `summary_text`; error objects and any other shape are rejected.
fn extract_summary_text(body: &Value) -> Result<String> {
    if let Some(error) = body.get("error") {
        return Err(SummarizerError::Parse(format!(
            "Summarization endpoint error: {}",
            error
        )));
    }

    body.as_array()
        .and_then(|candidates| candidates.first())
        .and_then(|first| first.get("summary_text"))
        .and_then(|text| text.as_str())
        .map(|text| text.to_string())
        .ok_or_else(|| SummarizerError::Parse("Missing summary_text in response".to_string()))
}

#[async_trait]
impl Summarize for HfSummarizer {
    fn name(&self) -> String {
        format!("Hugging Face ({})", self.config.endpoint)
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let api_key = match self
            .config
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
        {
            Some(key) => key.to_string(),
            None => {
                warn!("No Hugging Face API key provided");
                return Ok(NO_API_KEY_SENTINEL.to_string());
            }
        };

        match self.request_summary(&api_key, text).await {
            Ok(summary) => Ok(summary),
            Err(e) => {
                warn!("Summarization request failed: {}", e);
                Ok(SUMMARY_UNAVAILABLE_SENTINEL.to_string())
            }
        }
    }
}

/// Scripted summarizer for tests and offline runs. Pops pre-seeded responses
/// in order (`None` entries fail) and echoes the input once the script runs dry.
pub struct FixedSummarizer {
    script: Mutex<VecDeque<Option<String>>>,
}

impl FixedSummarizer {
    pub fn new() -> Self {
        Self {
            script: Mutex::new(VecDeque::new()),
        }
    }

    pub fn with_script(script: Vec<Option<String>>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl Default for FixedSummarizer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Summarize for FixedSummarizer {
    fn name(&self) -> String {
        "Fixed Summarizer".to_string()
    }

    async fn summarize(&self, text: &str) -> Result<String> {
        let scripted = self.script.lock().await.pop_front();
        match scripted {
            Some(Some(summary)) => Ok(summary),
            Some(None) => Err(SummarizerError::Parse(
                "Scripted summarization failure".to_string(),
            )),
            None => Ok(format!("Summary of: {}", text)),
        }
    }
}
