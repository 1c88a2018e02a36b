use crate::types::{ArticleEntry, Result, SummarizerError};
use crate::utils;
use feed_rs::parser;
use tracing::{debug, info};

pub const DEFAULT_ARTICLE_LIMIT: usize = 5;

/// Parses RSS/Atom text into article slots, capped at the configured limit.
pub struct FeedParser {
    limit: usize,
}

impl FeedParser {
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// Parse the feed and return one slot per entry, at most `limit` of them.
    /// A slot is `None` when the entry has no usable link; the pipeline renders
    /// those as placeholder lines instead of dropping them. A feed with zero
    /// entries is an error.
    pub fn parse_entries(&self, content: &str, topic: &str) -> Result<Vec<Option<ArticleEntry>>> {
        debug!("Parsing feed content ({} bytes)", content.len());

        let feed = parser::parse(content.as_bytes())
            .map_err(|e| SummarizerError::Parse(format!("Failed to parse feed: {}", e)))?;

        if feed.entries.is_empty() {
            return Err(SummarizerError::EmptyFeed {
                topic: topic.to_string(),
            });
        }

        let total = feed.entries.len();
        let slots: Vec<Option<ArticleEntry>> = feed
            .entries
            .into_iter()
            .take(self.limit)
            .map(Self::parse_entry)
            .collect();

        info!("Parsed {} of {} feed entries", slots.len(), total);
        Ok(slots)
    }

    fn parse_entry(entry: feed_rs::model::Entry) -> Option<ArticleEntry> {
        let link = entry.links.first()?.href.clone();
        let title = entry
            .title
            .map(|t| t.content)
            .unwrap_or_else(|| "No title".to_string());

        // Prefer content over summary; both arrive as HTML snippets.
        let body = entry
            .content
            .and_then(|c| c.body)
            .or_else(|| entry.summary.map(|s| s.content))
            .map(|html| utils::strip_html_tags(&html))
            .filter(|text| !text.is_empty());

        Some(ArticleEntry { title, link, body })
    }
}

impl Default for FeedParser {
    fn default() -> Self {
        Self::new(DEFAULT_ARTICLE_LIMIT)
    }
}
