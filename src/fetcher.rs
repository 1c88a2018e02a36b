use crate::types::{FetchConfig, Result, SummarizerError};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Fetches the raw search feed for a topic.
pub struct FeedFetcher {
    client: Client,
    config: FetchConfig,
}

impl FeedFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let redirect_policy = if config.follow_redirects {
            reqwest::redirect::Policy::limited(config.max_redirects)
        } else {
            reqwest::redirect::Policy::none()
        };

        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .redirect(redirect_policy)
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Build the request URL for a topic: the search endpoint with the topic as
    /// the `q` parameter, wrapped in the relay proxy when one is configured.
    /// An empty topic is rejected before anything is built.
    pub fn search_url(&self, topic: &str) -> Result<String> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(SummarizerError::EmptyTopic);
        }

        let mut search = Url::parse(&self.config.search_endpoint)?;
        search.query_pairs_mut().append_pair("q", topic);

        match &self.config.proxy_endpoint {
            Some(proxy) => {
                let mut proxied = Url::parse(proxy)?;
                proxied.query_pairs_mut().append_pair("url", search.as_str());
                Ok(proxied.into())
            }
            None => Ok(search.into()),
        }
    }

    /// Perform the GET and return the raw feed text. Non-success status is an
    /// error; there is no retry.
    pub async fn fetch_search_feed(&self, topic: &str) -> Result<String> {
        let request_url = self.search_url(topic)?;
        debug!("Fetching search feed: {}", request_url);

        let response = self.client.get(&request_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SummarizerError::Status {
                status: status.as_u16(),
                url: request_url,
            });
        }

        let content = response.text().await?;
        info!(
            "Fetched search feed for \"{}\" ({} bytes)",
            topic,
            content.len()
        );
        Ok(content)
    }
}
