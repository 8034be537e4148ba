//! Compare the feature sets of two items.
//!
//! The `SimilarityScorer` trait assigns an overlap score to a candidate's
//! [`FeatureSet`](crate::FeatureSet) relative to a reference set, typically
//! the features of one item the user has saved.

use crate::FeatureSet;

/// Calculate a similarity score between two feature sets.
///
/// Higher scores indicate a stronger overlap. Implementations must be
/// thread-safe (`Send` + `Sync`) so a single scorer can serve concurrent
/// recommendation calls.
/// The method is infallible; implementers must return `0.0` when either set
/// is empty rather than dividing by zero.
///
/// Implementations must:
/// - Produce finite (`f32::is_finite`) scores.
/// - Return non-negative values.
/// - Normalise results to the range `0.0..=1.0`.
///
/// Use [`SimilarityScorer::sanitise`] to apply these guards.
///
/// # Examples
///
/// ```rust
/// use larder_core::{FeatureSet, SimilarityScorer};
///
/// struct AnyShared;
///
/// impl SimilarityScorer for AnyShared {
///     fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f32 {
///         if reference.shared_count(candidate) > 0 { 1.0 } else { 0.0 }
///     }
/// }
///
/// let saved = FeatureSet::new(["flour", "egg"]);
/// let other = FeatureSet::new(["egg"]);
/// assert_eq!(AnyShared.score(&saved, &other), 1.0);
/// ```
pub trait SimilarityScorer: Send + Sync {
    /// Return a score for `candidate` measured against `reference`.
    fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f32;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    fn sanitise(score: f32) -> f32
    where
        Self: Sized,
    {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

impl<T: SimilarityScorer + ?Sized> SimilarityScorer for &T {
    fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f32 {
        (**self).score(reference, candidate)
    }
}
