//! Session state and the search submission pipeline.
//!
//! [`SearchController`] owns all session-scoped state: the current query
//! text, the selected ranking algorithm, the last-fetched result set, the
//! last error, and a busy indicator. The view layer holds a shared
//! reference and only reads; every mutation goes through the controller.
//!
//! # Overlapping submissions
//!
//! `submit_search` takes `&self`, so nothing prevents a second submission
//! while one is in flight and the busy flag deliberately does not block
//! resubmission. Each request is tagged with a monotonically increasing
//! sequence number; a response is installed only if its request is at
//! least as new as the last one installed, so a slow early response can
//! never clobber results from a later request.

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard};

use crate::client::SearchClient;
use crate::error::SearchError;
use crate::types::{RankingAlgorithm, ResultSet};

/// Session state guarded by the controller's mutex.
#[derive(Debug, Default)]
struct SessionState {
    /// Current query text, updated on every edit. Empty is permitted.
    query: String,
    /// Selected ranking algorithm, passed through to the service.
    ranking: RankingAlgorithm,
    /// Last installed result set. Replaced wholesale, never merged.
    results: ResultSet,
    /// Display string of the most recent failure, cleared on success.
    last_error: Option<String>,
    /// Sequence number of the request whose outcome is installed.
    applied: u64,
}

/// Owns session state and issues search requests.
#[derive(Debug)]
pub struct SearchController {
    client: SearchClient,
    state: Mutex<SessionState>,
    /// Number of requests currently in flight. Busy while non-zero.
    in_flight: AtomicUsize,
    /// Sequence counter for issued requests.
    issued: AtomicU64,
}

impl SearchController {
    /// Create a controller with empty query, default ranking, and an
    /// empty result set.
    pub fn new(client: SearchClient) -> Self {
        Self {
            client,
            state: Mutex::new(SessionState::default()),
            in_flight: AtomicUsize::new(0),
            issued: AtomicU64::new(0),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the current query text. Synchronous; no request is issued.
    pub fn set_query(&self, query: impl Into<String>) {
        self.lock().query = query.into();
    }

    /// Replace the selected ranking algorithm. Synchronous.
    pub fn set_ranking(&self, ranking: RankingAlgorithm) {
        self.lock().ranking = ranking;
    }

    /// The current query text.
    pub fn query(&self) -> String {
        self.lock().query.clone()
    }

    /// The currently selected ranking algorithm.
    pub fn ranking(&self) -> RankingAlgorithm {
        self.lock().ranking
    }

    /// True exactly while at least one request is in flight. Drives the
    /// loading indicator and nothing else.
    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst) > 0
    }

    /// Snapshot of the last installed result set.
    pub fn results(&self) -> ResultSet {
        self.lock().results.clone()
    }

    /// Display string of the last failure, if the most recent resolved
    /// request failed.
    pub fn last_error(&self) -> Option<String> {
        self.lock().last_error.clone()
    }

    /// Submit the current query and ranking to the service and install
    /// the response.
    ///
    /// Busy is set for the duration of the request and cleared on every
    /// path. On success the stored result set is replaced entirely; on
    /// failure it keeps its previous value and the error is recorded for
    /// display. Stale responses (from a request older than the newest
    /// installed one) are dropped.
    ///
    /// # Errors
    ///
    /// Propagates the [`SearchError`] from the underlying request. The
    /// error is also recorded in session state unless it is stale.
    pub async fn submit_search(&self) -> Result<(), SearchError> {
        let (query, ranking) = {
            let state = self.lock();
            (state.query.clone(), state.ranking)
        };
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;

        self.in_flight.fetch_add(1, Ordering::SeqCst);
        let outcome = self.client.submit(&query, ranking).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        let mut state = self.lock();
        match outcome {
            Ok(results) => {
                if ticket >= state.applied {
                    state.applied = ticket;
                    state.results = results;
                    state.last_error = None;
                } else {
                    tracing::debug!(ticket, applied = state.applied, "dropping stale response");
                }
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "search request failed");
                if ticket >= state.applied {
                    state.applied = ticket;
                    state.last_error = Some(err.to_string());
                }
                Err(err)
            }
        }
    }
}
