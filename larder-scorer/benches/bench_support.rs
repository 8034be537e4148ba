//! Benchmark support utilities for ranking.
//!
//! Generates deterministic recipe catalogs whose ingredient lists are drawn
//! from a fixed pantry, so overlaps are frequent and realistic.

use larder_core::{FeatureSet, Item, RecipeDetails};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seed for deterministic random number generation in benchmarks.
pub const BENCHMARK_SEED: u64 = 42;

/// Ingredients recipes are assembled from.
const PANTRY: [&str; 24] = [
    "flour", "egg", "sugar", "butter", "milk", "rice", "salt", "pepper", "yeast", "tomato",
    "basil", "garlic", "onion", "olive oil", "cheese", "chicken", "lemon", "thyme", "cream",
    "potato", "carrot", "stock", "honey", "vanilla",
];

/// Largest ingredient list generated for a recipe.
const MAX_INGREDIENTS: usize = 10;

/// Generate `count` recipes with between one and ten pantry ingredients.
#[must_use]
pub fn generate_catalog(count: usize, seed: u64) -> Vec<Item> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|idx| {
            let size = rng.gen_range(1..=MAX_INGREDIENTS);
            let features: FeatureSet = (0..size)
                .map(|_| PANTRY[rng.gen_range(0..PANTRY.len())])
                .collect();
            Item::new(
                format!("recipe-{idx}"),
                features,
                RecipeDetails::titled(format!("Recipe {idx}")),
            )
        })
        .collect()
}
