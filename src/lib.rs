pub mod aggregator;
pub mod digest;
pub mod export;
pub mod fetcher;
pub mod parser;
pub mod summarizer;
pub mod types;
pub mod utils;

pub use aggregator::{TopicAggregator, SUMMARY_FAILED_PLACEHOLDER, UNREADABLE_ARTICLE_PLACEHOLDER};
pub use fetcher::FeedFetcher;
pub use parser::{FeedParser, DEFAULT_ARTICLE_LIMIT};
pub use summarizer::{
    FixedSummarizer, HfSummarizer, Summarize, NO_API_KEY_SENTINEL, SUMMARY_UNAVAILABLE_SENTINEL,
};
pub use types::*;
