//! HTTP client for the search service.
//!
//! [`SearchClient`] wraps a configured [`reqwest::Client`] and speaks the
//! service's one endpoint: a JSON POST carrying the query and ranking
//! algorithm, answered with the three-way result partition.

use std::time::Duration;

use url::Url;

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::types::{RankingAlgorithm, ResultSet, SearchRequest};

/// Path of the search endpoint, relative to the configured base URL.
const SEARCH_PATH: &str = "/api/search";

/// Default User-Agent when the config does not override it.
fn default_user_agent() -> String {
    format!("ideosearch/{}", env!("CARGO_PKG_VERSION"))
}

/// Client for the search service's request/response contract.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    /// Build a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Config`] if the configuration is invalid,
    /// or [`SearchError::Http`] if the underlying HTTP client cannot be
    /// constructed.
    pub fn new(config: &SearchConfig) -> Result<Self, SearchError> {
        config.validate()?;

        let base = Url::parse(&config.base_url)
            .map_err(|e| SearchError::Config(format!("base_url is not a valid URL: {e}")))?;
        let endpoint = base
            .join(SEARCH_PATH)
            .map_err(|e| SearchError::Config(format!("cannot build endpoint URL: {e}")))?;

        let ua = config
            .user_agent
            .clone()
            .unwrap_or_else(default_user_agent);

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(ua)
            .build()
            .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { http, endpoint })
    }

    /// Submit one search request and return the parsed result set.
    ///
    /// The body is exactly `{"query": ..., "ranking_algorithm": ...}`.
    /// Panes missing from the response deserialize to empty vectors.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::Http`] if the request fails or the service
    /// answers with a non-success status, and [`SearchError::Decode`] if
    /// the body is not a valid result set.
    pub async fn submit(
        &self,
        query: &str,
        ranking: RankingAlgorithm,
    ) -> Result<ResultSet, SearchError> {
        tracing::trace!(query, ranking = %ranking, "submitting search");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&SearchRequest {
                query,
                ranking_algorithm: ranking,
            })
            .send()
            .await
            .map_err(|e| SearchError::Http(format!("search request failed: {e}")))?
            .error_for_status()
            .map_err(|e| SearchError::Http(format!("search service error: {e}")))?;

        let results: ResultSet = response
            .json()
            .await
            .map_err(|e| SearchError::Decode(format!("malformed search response: {e}")))?;

        tracing::debug!(
            custom = results.custom.len(),
            google = results.google.len(),
            bing = results.bing.len(),
            "search response parsed"
        );

        Ok(results)
    }

    /// The resolved endpoint URL this client posts to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
