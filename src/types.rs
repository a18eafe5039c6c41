//! Core types for the search request/response contract.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;

/// Ranking algorithm the search service should apply to its own index.
///
/// Opaque to this client — the value is passed through on the wire and
/// never interpreted locally. Serializes to the service's identifiers
/// (`vector_space`, `pagerank`, `hits`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingAlgorithm {
    /// TF-IDF vector space model (service default).
    #[default]
    VectorSpace,
    /// PageRank over the crawled link graph.
    Pagerank,
    /// Hyperlink-Induced Topic Search.
    Hits,
}

impl RankingAlgorithm {
    /// Returns the human-readable label for this algorithm.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VectorSpace => "Vector Space",
            Self::Pagerank => "PageRank",
            Self::Hits => "HITS",
        }
    }

    /// Returns the identifier sent on the wire.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::VectorSpace => "vector_space",
            Self::Pagerank => "pagerank",
            Self::Hits => "hits",
        }
    }

    /// Returns all selectable algorithms.
    pub fn all() -> &'static [RankingAlgorithm] {
        &[Self::VectorSpace, Self::Pagerank, Self::Hits]
    }
}

impl fmt::Display for RankingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RankingAlgorithm {
    type Err = SearchError;

    /// Parses a wire identifier, as accepted on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "vector_space" => Ok(Self::VectorSpace),
            "pagerank" => Ok(Self::Pagerank),
            "hits" => Ok(Self::Hits),
            other => Err(SearchError::Config(format!(
                "unknown ranking algorithm '{other}' (expected vector_space, pagerank, or hits)"
            ))),
        }
    }
}

/// A single search result as returned by the service.
///
/// Results are produced only by the service and never constructed or
/// mutated locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The title of the result page.
    pub title: String,
    /// The URL of the result, used as the link target when rendering.
    pub url: String,
    /// Free-text snippet summarising the page content.
    pub snippet: String,
}

/// One of the three result panes the service partitions results into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Source {
    /// The service's own index.
    Custom,
    /// Google results, pre-normalised by the service.
    Google,
    /// Bing results, pre-normalised by the service.
    Bing,
}

impl Source {
    /// Returns the pane heading for this source.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Custom => "Custom Results",
            Self::Google => "Google Results",
            Self::Bing => "Bing Results",
        }
    }

    /// Returns the three sources in pane order.
    pub fn all() -> &'static [Source] {
        &[Self::Custom, Self::Google, Self::Bing]
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The three-way partition of results returned by one search request.
///
/// Invariant: all three sequences are always present. A response that
/// omits a key deserializes to an empty vector for that pane, so
/// rendering never branches on missing keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResultSet {
    /// Results from the service's own index.
    #[serde(default)]
    pub custom: Vec<SearchResult>,
    /// Results from Google.
    #[serde(default)]
    pub google: Vec<SearchResult>,
    /// Results from Bing.
    #[serde(default)]
    pub bing: Vec<SearchResult>,
}

impl ResultSet {
    /// Returns the results for one pane.
    pub fn pane(&self, source: Source) -> &[SearchResult] {
        match source {
            Source::Custom => &self.custom,
            Source::Google => &self.google,
            Source::Bing => &self.bing,
        }
    }

    /// Returns true if all three panes are empty.
    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.google.is_empty() && self.bing.is_empty()
    }
}

/// Wire body for a search request. Exactly two fields.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest<'a> {
    /// The user-entered query text, forwarded as-is (empty permitted).
    pub query: &'a str,
    /// The selected ranking algorithm identifier.
    pub ranking_algorithm: RankingAlgorithm,
}
