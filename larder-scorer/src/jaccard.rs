//! Union-based similarity for callers that opt in.

use larder_core::{FeatureSet, SimilarityScorer};

/// Scores `|A ∩ B| / |A ∪ B|`.
///
/// This ranks candidates differently from [`OverlapScorer`](crate::OverlapScorer)
/// whenever set sizes differ. It is never selected implicitly.
///
/// # Examples
/// ```
/// use larder_core::{FeatureSet, SimilarityScorer};
/// use larder_scorer::JaccardScorer;
///
/// let cake = FeatureSet::new(["flour", "egg"]);
/// let biscuits = FeatureSet::new(["flour", "sugar"]);
/// let score = JaccardScorer.score(&cake, &biscuits);
/// assert!((score - 1.0 / 3.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JaccardScorer;

impl SimilarityScorer for JaccardScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "similarity is a ratio of set sizes"
    )]
    #[expect(
        clippy::cast_precision_loss,
        reason = "feature sets never approach 2^24 entries"
    )]
    fn score(&self, reference: &FeatureSet, candidate: &FeatureSet) -> f32 {
        if reference.is_empty() || candidate.is_empty() {
            return 0.0;
        }
        let shared = reference.shared_count(candidate);
        let union = reference.len() + candidate.len() - shared;
        Self::sanitise(shared as f32 / union as f32)
    }
}
