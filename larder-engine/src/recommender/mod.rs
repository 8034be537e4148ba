//! The recommendation orchestrator.
//!
//! A call reads the user's saved items before the catalog so unknown users
//! fail fast, then works from that single catalog snapshot for both ranking
//! and backfill.

use std::collections::HashSet;
use std::num::NonZeroUsize;

use larder_core::{
    Item, ItemId, ItemStore, RecommendRequest, Recommendation, ScoredCandidate, SimilarityScorer,
    UserId,
};
use larder_scorer::{CandidateRanker, OverlapScorer};
use log::debug;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{RandomBackfiller, dedup_by_id};

mod error;

pub use error::RecommendError;


/// Content-based recommender over an [`ItemStore`].
///
/// The recommender holds no per-call state, so one instance can serve
/// concurrent calls for any users.
///
/// # Examples
/// ```
/// use larder_core::test_support::MemoryStore;
/// use larder_core::{Item, RecommendRequest, Source};
/// use larder_engine::Recommender;
///
/// let store = MemoryStore::with_items([
///     Item::titled("a", "Cake", ["flour", "egg"]),
///     Item::titled("b", "Biscuits", ["flour", "sugar"]),
///     Item::titled("c", "Risotto", ["rice"]),
/// ])
/// .with_user("cook", ["a"]);
///
/// let recommender = Recommender::new(store);
/// let picks = recommender.recommend(&RecommendRequest::new("cook").with_seed(1))?;
/// assert_eq!(picks.len(), 2);
/// assert_eq!(picks[0].item.id.as_str(), "b");
/// assert_eq!(picks[0].source, Source::Similarity);
/// assert_eq!(picks[1].source, Source::Random);
/// # Ok::<(), larder_engine::RecommendError>(())
/// ```
#[derive(Debug)]
pub struct Recommender<S, C = OverlapScorer>
where
    S: ItemStore,
    C: SimilarityScorer,
{
    store: S,
    ranker: CandidateRanker<C>,
    backfiller: RandomBackfiller,
}

impl<S> Recommender<S, OverlapScorer>
where
    S: ItemStore,
{
    /// Construct a recommender using the overlap scorer.
    pub fn new(store: S) -> Self {
        Self::with_scorer(store, OverlapScorer)
    }
}

impl<S, C> Recommender<S, C>
where
    S: ItemStore,
    C: SimilarityScorer,
{
    /// Construct a recommender with an explicit similarity scorer.
    pub const fn with_scorer(store: S, scorer: C) -> Self {
        Self {
            store,
            ranker: CandidateRanker::new(scorer),
            backfiller: RandomBackfiller,
        }
    }

    /// Borrow the underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Produce recommendations for `request`.
    ///
    /// A request seed makes the random backfill reproducible; without one the
    /// generator is seeded from OS entropy.
    ///
    /// # Errors
    /// Returns [`RecommendError::Store`] when the user does not exist or the
    /// store fails to serve either read.
    pub fn recommend(
        &self,
        request: &RecommendRequest,
    ) -> Result<Vec<Recommendation>, RecommendError> {
        let mut rng = request
            .seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64);
        self.recommend_with_rng(&request.user_id, request.output_size, &mut rng)
    }

    /// Produce up to `output_size` recommendations using `rng` for backfill.
    ///
    /// Similarity matches come first, best score first; random picks fill
    /// any remaining slots. Saved items never appear in the result and no
    /// item appears twice.
    ///
    /// # Errors
    /// Returns [`RecommendError::Store`] when the user does not exist or the
    /// store fails to serve either read.
    pub fn recommend_with_rng<R>(
        &self,
        user_id: &UserId,
        output_size: NonZeroUsize,
        rng: &mut R,
    ) -> Result<Vec<Recommendation>, RecommendError>
    where
        R: Rng + ?Sized,
    {
        let saved = self.store.get_user_saved_items(user_id)?;
        let catalog = self.store.list_all_items()?;
        let candidates = self.select(&catalog, &saved, output_size.get(), rng);
        debug!(
            "recommending {} items to {user_id} from {} catalog items and {} saved",
            candidates.len(),
            catalog.len(),
            saved.len()
        );
        Ok(candidates.into_iter().map(Recommendation::from).collect())
    }

    fn select<'a, R>(
        &self,
        catalog: &'a [Item],
        saved: &[Item],
        size: usize,
        rng: &mut R,
    ) -> Vec<ScoredCandidate<'a>>
    where
        R: Rng + ?Sized,
    {
        if saved.is_empty() {
            return self
                .backfiller
                .sample(catalog, size, &HashSet::new(), rng)
                .into_iter()
                .map(ScoredCandidate::random)
                .collect();
        }

        let mut merged = self.ranker.rank(catalog, saved);
        let shortfall = size.saturating_sub(merged.len());
        if shortfall > 0 {
            let exclude: HashSet<&ItemId> = saved
                .iter()
                .map(|item| &item.id)
                .chain(merged.iter().map(|candidate| candidate.id()))
                .collect();
            let fill = self.backfiller.sample(catalog, shortfall, &exclude, rng);
            debug!(
                "backfilling {} of {shortfall} missing slots after {} similarity matches",
                fill.len(),
                merged.len()
            );
            merged.extend(fill.into_iter().map(ScoredCandidate::random));
        }

        let mut unique = dedup_by_id(merged);
        unique.truncate(size);
        unique
    }
}
