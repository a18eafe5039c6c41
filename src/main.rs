//! ideosearch: command-line client for the ideologies search service.

use anyhow::Result;
use clap::Parser;
use ideosearch::config::SearchConfig;
use ideosearch::controller::SearchController;
use ideosearch::types::RankingAlgorithm;
use ideosearch::{view, SearchClient};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Search the ideologies index and compare against Google and Bing.
#[derive(Debug, Parser)]
#[command(name = "ideosearch", version, about)]
struct Cli {
    /// Search query. Empty is permitted and forwarded as-is.
    #[arg(default_value = "")]
    query: String,

    /// Ranking algorithm: vector_space, pagerank, or hits
    #[arg(short, long, default_value = "vector_space")]
    ranking: RankingAlgorithm,

    /// Base URL of the search service
    #[arg(long, default_value = ideosearch::config::DEFAULT_BASE_URL)]
    endpoint: String,

    /// HTTP request timeout in seconds
    #[arg(long, default_value = "30")]
    timeout: u64,

    /// Render every snippet in full instead of the 30-word preview
    #[arg(long)]
    expand: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging goes to stderr so pane output stays clean on stdout.
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config = SearchConfig {
        base_url: cli.endpoint,
        timeout_seconds: cli.timeout,
        user_agent: None,
    };
    let client = SearchClient::new(&config)?;
    let controller = SearchController::new(client);

    controller.set_query(cli.query);
    controller.set_ranking(cli.ranking);

    eprintln!("{}", view::LOADING_LINE);
    if let Err(err) = controller.submit_search().await {
        eprintln!("search failed: {err}");
        std::process::exit(1);
    }

    print!("{}", view::render_result_set(&controller.results(), cli.expand));
    Ok(())
}
