//! The lookup provider trait.

use async_trait::async_trait;
use thiserror::Error;

/// Failure inside a lookup provider's transport layer.
///
/// Callers are expected to degrade these to an empty candidate list; see
/// [`SearchSession`](crate::session::SearchSession).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("lookup transport failed: {0}")]
    Transport(String),

    #[error("lookup provider returned an unusable response: {0}")]
    InvalidResponse(String),
}

/// A candidate-search provider (address, company or vehicle registry).
///
/// Implementations own their transport and timeouts; this crate only defines
/// the seam. Queries shorter than [`MIN_QUERY_LEN`](Self::MIN_QUERY_LEN) are
/// not worth a round-trip and callers short-circuit them to empty results.
#[async_trait]
pub trait LookupService: Send + Sync {
    type Candidate: Send;

    /// Minimum query length before a provider round-trip is attempted.
    const MIN_QUERY_LEN: usize = 3;

    async fn search(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<Self::Candidate>, LookupError>;
}
