//! Rank unsaved catalog items by their best match against saved items.

use std::collections::HashSet;

use larder_core::{Item, ItemId, ScoredCandidate, SimilarityScorer};
use log::debug;

use crate::OverlapScorer;

/// Scores catalog items against a user's saved items.
///
/// Each unsaved item receives the highest score it achieves against any
/// single saved item, so one strong match outweighs many weak ones. Items
/// scoring exactly zero are dropped. The result is sorted by score,
/// descending, with ties left in catalog order.
#[derive(Debug, Clone)]
pub struct CandidateRanker<C = OverlapScorer> {
    scorer: C,
}

impl Default for CandidateRanker {
    fn default() -> Self {
        Self::new(OverlapScorer)
    }
}

impl<C> CandidateRanker<C> {
    /// Create a ranker using `scorer` to compare feature sets.
    pub const fn new(scorer: C) -> Self {
        Self { scorer }
    }

    /// Borrow the underlying scorer.
    pub const fn scorer(&self) -> &C {
        &self.scorer
    }
}

impl<C: SimilarityScorer> CandidateRanker<C> {
    /// Rank `catalog` against `saved`.
    ///
    /// Candidates borrow from `catalog`. Items whose id appears in `saved`
    /// are never returned, and when the catalog repeats an id only its first
    /// occurrence is scored. An empty catalog or saved set yields an empty
    /// ranking.
    ///
    /// # Examples
    /// ```
    /// use larder_core::{Item, Source};
    /// use larder_scorer::CandidateRanker;
    ///
    /// let catalog = vec![
    ///     Item::titled("bread", "Bread", ["flour", "yeast", "salt"]),
    ///     Item::titled("pizza", "Pizza", ["flour", "yeast", "tomato"]),
    ///     Item::titled("salad", "Salad", ["lettuce"]),
    /// ];
    /// let saved = vec![catalog[0].clone()];
    ///
    /// let ranked = CandidateRanker::default().rank(&catalog, &saved);
    /// let ids: Vec<_> = ranked.iter().map(|c| c.id().as_str()).collect();
    /// assert_eq!(ids, ["pizza"]);
    /// assert_eq!(ranked[0].source, Source::Similarity);
    /// ```
    #[must_use]
    pub fn rank<'a>(&self, catalog: &'a [Item], saved: &[Item]) -> Vec<ScoredCandidate<'a>> {
        if saved.is_empty() {
            return Vec::new();
        }

        let saved_ids: HashSet<&ItemId> = saved.iter().map(|item| &item.id).collect();
        let mut seen: HashSet<&'a ItemId> = HashSet::with_capacity(catalog.len());
        let mut ranked = Vec::new();
        for item in catalog {
            if saved_ids.contains(&item.id) || !seen.insert(&item.id) {
                continue;
            }
            let best = self.best_score(item, saved);
            if best > 0.0 {
                ranked.push(ScoredCandidate::similarity(item, best));
            }
        }

        ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
        debug!(
            "ranked {} of {} catalog items against {} saved items",
            ranked.len(),
            catalog.len(),
            saved.len()
        );
        ranked
    }

    fn best_score(&self, candidate: &Item, saved: &[Item]) -> f32 {
        saved
            .iter()
            .map(|reference| self.scorer.score(&reference.features, &candidate.features))
            .fold(0.0, f32::max)
    }
}
