use crate::summarizer::Summarize;
use crate::types::{ArticleSummary, Result, RunReport};
use tracing::debug;

/// Prompt prepended to the joined per-article summaries for the final pass.
pub const CONSOLIDATION_PROMPT: &str =
    "Combine and summarize the following article summaries into one concise paragraph:";

/// Join the successful summaries with ordinal prefixes. Ordinals are assigned
/// over the successful summaries only, not over feed positions.
pub fn combine_summaries(articles: &[ArticleSummary]) -> String {
    articles
        .iter()
        .filter(|article| !article.failed)
        .enumerate()
        .map(|(i, article)| format!("{}. {}", i + 1, article.summary))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Issue the one further summarization pass over the joined summaries.
pub async fn consolidate(
    summarizer: &dyn Summarize,
    articles: &[ArticleSummary],
) -> Result<String> {
    let combined = combine_summaries(articles);
    debug!(
        "Consolidating {} combined chars via {}",
        combined.len(),
        summarizer.name()
    );
    summarizer
        .summarize(&format!("{}\n\n{}", CONSOLIDATION_PROMPT, combined))
        .await
}

/// Render the exportable report text.
pub fn compose_report(report: &RunReport) -> String {
    let mut text = String::new();
    text.push_str(&format!("Top Reddit News for \"{}\":\n\n", report.topic));

    for article in &report.articles {
        match &article.entry {
            Some(entry) => {
                text.push_str(&format!("{}. {}\n", article.index + 1, entry.title));
                text.push_str(&format!("   {}\n", entry.link));
                text.push_str(&format!("   Summary: {}\n\n", article.summary));
            }
            None => {
                text.push_str(&format!("{}. {}\n\n", article.index + 1, article.summary));
            }
        }
    }

    text.push_str("Consolidated Summary:\n");
    text.push_str(&report.consolidated);
    text.push('\n');
    text
}
