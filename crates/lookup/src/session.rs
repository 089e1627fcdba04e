//! Last-request-wins search sessions.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::service::LookupService;

/// Result of a session search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<T> {
    /// Candidates for the latest query (possibly empty — a provider failure
    /// or a too-short query also lands here).
    Candidates(Vec<T>),
    /// A newer search was issued while this one was in flight; discard.
    Superseded,
}

impl<T> SearchOutcome<T> {
    pub fn is_superseded(&self) -> bool {
        matches!(self, SearchOutcome::Superseded)
    }

    pub fn candidates(self) -> Option<Vec<T>> {
        match self {
            SearchOutcome::Candidates(c) => Some(c),
            SearchOutcome::Superseded => None,
        }
    }
}

/// One search session per form field.
///
/// Every call to [`search`](Self::search) takes a fresh generation ticket;
/// when the provider answers, the result is kept only if no newer ticket was
/// issued in the meantime. Debouncing at the call site remains a UI concern —
/// correctness does not depend on it.
#[derive(Debug)]
pub struct SearchSession<S> {
    service: Arc<S>,
    generation: AtomicU64,
}

impl<S: LookupService> SearchSession<S> {
    pub fn new(service: Arc<S>) -> Self {
        Self {
            service,
            generation: AtomicU64::new(0),
        }
    }

    /// Run a search for the current keystroke state of the field.
    pub async fn search(&self, query: &str, limit: usize) -> SearchOutcome<S::Candidate> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if query.trim().len() < S::MIN_QUERY_LEN {
            return SearchOutcome::Candidates(Vec::new());
        }

        let result = self.service.search(query, limit).await;

        if self.generation.load(Ordering::SeqCst) != ticket {
            tracing::debug!(query, "discarding superseded lookup result");
            return SearchOutcome::Superseded;
        }

        match result {
            Ok(candidates) => SearchOutcome::Candidates(candidates),
            Err(err) => {
                tracing::warn!(%err, query, "lookup failed; degrading to no suggestions");
                SearchOutcome::Candidates(Vec::new())
            }
        }
    }
}
