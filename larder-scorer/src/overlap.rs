//! Shared-feature count over the larger set size.

use larder_core::{FeatureSet, SimilarityScorer};

/// Scores the fraction of `reference` features found in `candidate`,
/// divided by the size of the larger of the two sets.
///
/// The divisor is `max(|reference|, |candidate|)`, not the size of the
/// union, so the score is symmetric only when both sets have equal length.
/// Either set being empty yields `0.0`.
///
/// # Examples
/// ```
/// use larder_core::{FeatureSet, SimilarityScorer};
/// use larder_scorer::OverlapScorer;
///
/// let cake = FeatureSet::new(["flour", "egg"]);
/// let biscuits = FeatureSet::new(["flour", "sugar", "butter"]);
/// let score = OverlapScorer.score(&cake, &biscuits);
/// assert!((score - 1.0 / 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OverlapScorer;

impl SimilarityScorer for OverlapScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity is a ratio of set sizes"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "feature sets never approach 2^24 entries"
    )]
    fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f32 {
        let divisor = reference.len().max(candidate.len());
        if divisor == 0 {
            return 0.0;
        }
        let shared = reference.shared_count(candidate);
        Self::sanitise(shared as f32 / divisor as f32)
    }
}
