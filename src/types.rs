use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single article extracted from the search feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleEntry {
    pub title: String,
    pub link: String,
    /// Tag-stripped body from the feed's content/summary, when the entry carries one.
    pub body: Option<String>,
}

/// Per-article outcome of one pipeline run. `failed` marks placeholder lines
/// (unreadable entries or summarization failures).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub index: usize,
    pub entry: Option<ArticleEntry>,
    pub summary: String,
    pub failed: bool,
}

/// Everything produced by one run. Summary state lives here and nowhere else;
/// a new run starts from a fresh report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    pub run_id: Uuid,
    pub topic: String,
    pub generated_at: DateTime<Utc>,
    pub articles: Vec<ArticleSummary>,
    pub consolidated: String,
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    pub follow_redirects: bool,
    pub max_redirects: usize,
    /// Search feed endpoint; the topic is appended as the `q` query parameter.
    pub search_endpoint: String,
    /// Relay proxy wrapping the search URL, mirroring the reference client.
    /// `None` fetches the search endpoint directly.
    pub proxy_endpoint: Option<String>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Reddit-Summarizer/1.0".to_string(),
            timeout_seconds: 30,
            follow_redirects: true,
            max_redirects: 5,
            search_endpoint: "https://www.reddit.com/search.rss".to_string(),
            proxy_endpoint: Some("https://api.allorigins.win/raw".to_string()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    pub endpoint: String,
    pub api_key: Option<String>,
    /// Character budget the endpoint accepts; input is truncated to this.
    pub max_input_chars: usize,
    pub timeout_seconds: u64,
    pub user_agent: String,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://api-inference.huggingface.co/models/facebook/bart-large-cnn"
                .to_string(),
            api_key: None,
            max_input_chars: 1024,
            timeout_seconds: 30,
            user_agent: "Reddit-Summarizer/1.0".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SummarizerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    #[error("Feed parse error: {0}")]
    Parse(String),

    #[error("No articles found for topic \"{topic}\"")]
    EmptyFeed { topic: String },

    #[error("Topic must not be empty")]
    EmptyTopic,

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SummarizerError>;
