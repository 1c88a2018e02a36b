use crate::digest;
use crate::fetcher::FeedFetcher;
use crate::parser::FeedParser;
use crate::summarizer::{HfSummarizer, Summarize};
use crate::types::{
    ArticleEntry, ArticleSummary, FetchConfig, Result, RunReport, SummarizerConfig,
};
use chrono::Utc;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

/// Placeholder line for an article whose summarization failed.
pub const SUMMARY_FAILED_PLACEHOLDER: &str = "Summary could not be generated.";

/// Placeholder line for a feed entry that could not be read.
pub const UNREADABLE_ARTICLE_PLACEHOLDER: &str = "Unable to load this article.";

/// Summarizer input for one article: the feed-provided body when the entry has
/// one, otherwise the stub text the search feed forces on us.
fn article_text(entry: &ArticleEntry) -> String {
    match &entry.body {
        Some(body) => format!("{} - {}", entry.title, body),
        None => format!(
            "{} - This is a simulated full article content for testing summarization.",
            entry.title
        ),
    }
}

/// Orchestrates one fetch/parse/summarize/consolidate run for a topic.
pub struct TopicAggregator {
    fetcher: FeedFetcher,
    parser: FeedParser,
    summarizer: Arc<dyn Summarize>,
}

impl TopicAggregator {
    pub fn new(
        fetch_config: FetchConfig,
        summarizer_config: SummarizerConfig,
        limit: usize,
    ) -> Self {
        Self {
            fetcher: FeedFetcher::new(fetch_config),
            parser: FeedParser::new(limit),
            summarizer: Arc::new(HfSummarizer::new(summarizer_config)),
        }
    }

    /// Swap the summarization backend, keeping the fetch and parse wiring.
    pub fn with_summarizer(mut self, summarizer: Arc<dyn Summarize>) -> Self {
        self.summarizer = summarizer;
        self
    }

    /// Run the pipeline for one topic. Each article is summarized sequentially;
    /// a failed article degrades to a placeholder line rather than aborting the
    /// run. All summary state lives in the returned report.
    pub async fn run(&self, topic: &str) -> Result<RunReport> {
        let topic = topic.trim();
        let content = self.fetcher.fetch_search_feed(topic).await?;
        let slots = self.parser.parse_entries(&content, topic)?;

        let mut articles = Vec::with_capacity(slots.len());
        for (index, slot) in slots.into_iter().enumerate() {
            match slot {
                Some(entry) => {
                    let text = article_text(&entry);
                    match self.summarizer.summarize(&text).await {
                        Ok(summary) => {
                            info!("Summarized article {}: {}", index + 1, entry.title);
                            articles.push(ArticleSummary {
                                index,
                                entry: Some(entry),
                                summary,
                                failed: false,
                            });
                        }
                        Err(e) => {
                            warn!(
                                "Failed to summarize article {} ({}): {}",
                                index + 1,
                                entry.link,
                                e
                            );
                            articles.push(ArticleSummary {
                                index,
                                entry: Some(entry),
                                summary: SUMMARY_FAILED_PLACEHOLDER.to_string(),
                                failed: true,
                            });
                        }
                    }
                }
                None => {
                    warn!("Failed to read feed entry {}", index + 1);
                    articles.push(ArticleSummary {
                        index,
                        entry: None,
                        summary: UNREADABLE_ARTICLE_PLACEHOLDER.to_string(),
                        failed: true,
                    });
                }
            }
        }

        let consolidated = digest::consolidate(self.summarizer.as_ref(), &articles).await?;
        info!(
            "Consolidated {} article summaries for \"{}\"",
            articles.iter().filter(|a| !a.failed).count(),
            topic
        );

        Ok(RunReport {
            run_id: Uuid::new_v4(),
            topic: topic.to_string(),
            generated_at: Utc::now(),
            articles,
            consolidated,
        })
    }
}
