//! Order-preserving removal of repeated item ids.

use std::collections::HashSet;

use larder_core::ScoredCandidate;

/// Keep the first candidate for each item id, preserving order.
///
/// Applying the function twice gives the same result as applying it once.
///
/// # Examples
/// ```
/// use larder_core::{Item, ScoredCandidate};
/// use larder_engine::dedup_by_id;
///
/// let a = Item::titled("a", "Cake", ["flour"]);
/// let b = Item::titled("b", "Bread", ["flour"]);
/// let merged = vec![
///     ScoredCandidate::similarity(&a, 0.5),
///     ScoredCandidate::random(&b),
///     ScoredCandidate::random(&a),
/// ];
/// let unique = dedup_by_id(merged);
/// let ids: Vec<_> = unique.iter().map(|c| c.id().as_str()).collect();
/// assert_eq!(ids, ["a", "b"]);
/// ```
#[must_use]
pub fn dedup_by_id(candidates: Vec<ScoredCandidate<'_>>) -> Vec<ScoredCandidate<'_>> {
    let mut seen = HashSet::with_capacity(candidates.len());
    candidates
        .into_iter()
        .filter(|candidate| seen.insert(candidate.id()))
        .collect()
}
