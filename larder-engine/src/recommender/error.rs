//! Errors surfaced by [`Recommender`](super::Recommender).

use larder_core::StoreError;
use thiserror::Error;

/// Failure of a single recommendation call.
///
/// Store failures pass through unchanged. Finding nothing to recommend is not
/// an error; it yields an empty list.
#[derive(Debug, Error)]
pub enum RecommendError {
    /// The item store could not serve a read.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl RecommendError {
    /// Report whether the requested user does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(StoreError::NotFound { .. }))
    }
}
