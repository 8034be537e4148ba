//! Uniform random sampling used to top up a short ranking.

use std::collections::HashSet;
use std::hash::BuildHasher;

use larder_core::{Item, ItemId};
use rand::Rng;

/// Draws duplicate-free random samples from a candidate pool.
///
/// Sampling is a partial Fisher–Yates shuffle over the filtered pool, so every
/// eligible item is equally likely to appear at every output position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RandomBackfiller;

impl RandomBackfiller {
    /// Return up to `count` items from `pool`, skipping ids in `exclude`.
    ///
    /// Items repeating an id already seen in `pool` are skipped, so the
    /// result never holds two items with the same id. An empty filtered pool
    /// or a `count` of zero yields an empty vector.
    ///
    /// # Examples
    /// ```
    /// use std::collections::HashSet;
    ///
    /// use larder_core::{Item, ItemId};
    /// use larder_engine::RandomBackfiller;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let pool = vec![
    ///     Item::titled("a", "Cake", ["flour"]),
    ///     Item::titled("b", "Bread", ["flour"]),
    ///     Item::titled("c", "Soup", ["stock"]),
    /// ];
    /// let saved = ItemId::from("a");
    /// let exclude = HashSet::from([&saved]);
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    ///
    /// let picks = RandomBackfiller.sample(&pool, 5, &exclude, &mut rng);
    /// assert_eq!(picks.len(), 2);
    /// assert!(picks.iter().all(|item| item.id != saved));
    /// ```
    pub fn sample<'a, H, R>(
        &self,
        pool: &'a [Item],
        count: usize,
        exclude: &HashSet<&ItemId, H>,
        rng: &mut R,
    ) -> Vec<&'a Item>
    where
        H: BuildHasher,
        R: Rng + ?Sized,
    {
        if count == 0 {
            return Vec::new();
        }

        let mut seen: HashSet<&'a ItemId> = HashSet::with_capacity(pool.len());
        let mut eligible: Vec<&'a Item> = pool
            .iter()
            .filter(|item| !exclude.contains(&item.id) && seen.insert(&item.id))
            .collect();

        let take = count.min(eligible.len());
        for position in 0..take {
            let pick = rng.gen_range(position..eligible.len());
            eligible.swap(position, pick);
        }
        eligible.truncate(take);
        eligible
    }
}
