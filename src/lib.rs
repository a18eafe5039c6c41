//! # ideosearch
//!
//! Terminal client for the ideologies search service.
//!
//! This crate submits a user query plus a ranking-algorithm selector as a
//! single JSON POST and renders the service's response as three parallel
//! result panes: the service's own index plus pre-normalised Google and
//! Bing comparison results.
//!
//! ## Design
//!
//! - [`controller::SearchController`] owns all session state (query,
//!   ranking, result set, busy flag, last error); the view only reads
//! - [`client::SearchClient`] speaks the one-endpoint wire contract
//! - [`disclosure::ResultDisclosure`] truncates long snippets to a
//!   30-word preview with an expand/collapse toggle, one instance per
//!   rendered result
//! - Overlapping submissions are sequence-numbered so a stale response
//!   never overwrites newer results
//!
//! The service does the ranking; this client does not rank, cache, retry,
//! or paginate.

pub mod client;
pub mod config;
pub mod controller;
pub mod disclosure;
pub mod error;
pub mod types;
pub mod view;

pub use client::SearchClient;
pub use config::SearchConfig;
pub use controller::SearchController;
pub use disclosure::ResultDisclosure;
pub use error::{Result, SearchError};
pub use types::{RankingAlgorithm, ResultSet, SearchResult, Source};

/// Submit one search against the given configuration.
///
/// Convenience wrapper for callers that do not need session state:
/// validates the config, builds a client, and performs a single request.
///
/// # Errors
///
/// Returns [`SearchError::Config`] for an invalid configuration,
/// [`SearchError::Http`] if the request fails or the service answers with
/// a non-success status, and [`SearchError::Decode`] for a malformed
/// response body.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> ideosearch::Result<()> {
/// let config = ideosearch::SearchConfig::default();
/// let results = ideosearch::search("liberty", ideosearch::RankingAlgorithm::Pagerank, &config).await?;
/// for result in &results.custom {
///     println!("{}: {}", result.title, result.url);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search(
    query: &str,
    ranking: RankingAlgorithm,
    config: &SearchConfig,
) -> Result<ResultSet> {
    let client = SearchClient::new(config)?;
    client.submit(query, ranking).await
}
