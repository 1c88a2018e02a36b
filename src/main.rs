use clap::Parser;
use reddit_summarizer::{digest, export, FetchConfig, SummarizerConfig, TopicAggregator};
use std::env;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "reddit-summarizer",
    version,
    about = "Summarize Reddit search results for a topic"
)]
struct Cli {
    /// Topic to search for
    topic: String,

    /// Hugging Face API key (falls back to the HF_API_KEY environment variable)
    #[arg(long)]
    api_key: Option<String>,

    /// Maximum number of articles to summarize
    #[arg(long, default_value_t = 5)]
    limit: usize,

    /// Write the report to this file
    #[arg(long)]
    output: Option<PathBuf>,

    /// Print a pre-filled mail-compose link for the report
    #[arg(long)]
    email: bool,

    /// Fetch the search feed directly instead of through the relay proxy
    #[arg(long)]
    direct: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let api_key = cli.api_key.or_else(|| env::var("HF_API_KEY").ok());

    let mut fetch_config = FetchConfig::default();
    if cli.direct {
        fetch_config.proxy_endpoint = None;
    }
    let summarizer_config = SummarizerConfig {
        api_key,
        ..SummarizerConfig::default()
    };

    let aggregator = TopicAggregator::new(fetch_config, summarizer_config, cli.limit);
    let report = aggregator.run(&cli.topic).await?;
    let report_text = digest::compose_report(&report);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report_text);
    }

    if let Some(path) = &cli.output {
        export::write_report(&report_text, path)?;
        println!("Saved report to {}", path.display());
    }

    if cli.email {
        println!("Compose email: {}", export::mail_compose_link(&report_text));
    }

    info!("Run {} complete", report.run_id);
    Ok(())
}
