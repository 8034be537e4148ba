//! Property-based tests for scorers and the candidate ranker.
//!
//! # Invariants tested
//!
//! - **Range:** scores are finite and within `0.0..=1.0`.
//! - **Identity:** identical non-empty sets score `1.0`; empty sets score `0.0`.
//! - **Exclusion:** ranked candidates never include a saved id.
//! - **Ordering:** ranked scores are positive and non-increasing.

use std::collections::HashSet;

use larder_core::{FeatureSet, Item, SimilarityScorer};
use larder_scorer::{CandidateRanker, JaccardScorer, OverlapScorer};
use proptest::prelude::*;

const VOCABULARY: &[&str] = &[
    "flour", "egg", "sugar", "butter", "milk", "rice", "salt", "yeast", "tomato", "basil",
];

fn feature_set_strategy() -> impl Strategy<Value = FeatureSet> {
    proptest::sample::subsequence(VOCABULARY, 0..=VOCABULARY.len())
        .prop_map(FeatureSet::new)
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Item>> {
    proptest::collection::vec(feature_set_strategy(), 0..24).prop_map(|sets| {
        sets.into_iter()
            .enumerate()
            .map(|(idx, features)| {
                Item::new(
                    format!("item-{idx}"),
                    features,
                    larder_core::RecipeDetails::titled(format!("Recipe {idx}")),
                )
            })
            .collect()
    })
}

fn assert_in_range(score: f32) -> Result<(), TestCaseError> {
    prop_assert!(score.is_finite(), "score {score} must be finite");
    prop_assert!((0.0..=1.0).contains(&score), "score {score} out of range");
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: every scorer stays within the unit interval.
    #[test]
    fn scores_stay_in_unit_range(
        left in feature_set_strategy(),
        right in feature_set_strategy(),
    ) {
        assert_in_range(OverlapScorer.score(&left, &right))?;
        assert_in_range(JaccardScorer.score(&left, &right))?;
    }

    /// Property: a set matches itself perfectly unless it is empty.
    #[test]
    fn identical_sets_score_one(set in feature_set_strategy()) {
        let expected = if set.is_empty() { 0.0 } else { 1.0 };
        prop_assert_eq!(OverlapScorer.score(&set, &set), expected);
        prop_assert_eq!(JaccardScorer.score(&set, &set), expected);
    }

    /// Property: overlap never ranks below the union-based index.
    #[test]
    fn overlap_dominates_jaccard(
        left in feature_set_strategy(),
        right in feature_set_strategy(),
    ) {
        prop_assert!(OverlapScorer.score(&left, &right) >= JaccardScorer.score(&left, &right));
    }

    /// Property: saved items never appear in the ranking and scores descend.
    #[test]
    fn ranking_excludes_saved_and_descends(
        catalog in catalog_strategy(),
        saved_mask in proptest::collection::vec(any::<bool>(), 24),
    ) {
        let saved: Vec<Item> = catalog
            .iter()
            .zip(&saved_mask)
            .filter(|(_, keep)| **keep)
            .map(|(item, _)| item.clone())
            .collect();
        let saved_ids: HashSet<_> = saved.iter().map(|item| &item.id).collect();

        let ranked = CandidateRanker::default().rank(&catalog, &saved);

        let mut seen = HashSet::new();
        for candidate in &ranked {
            prop_assert!(!saved_ids.contains(candidate.id()));
            prop_assert!(seen.insert(candidate.id()), "duplicate id {}", candidate.id());
            prop_assert!(candidate.score > 0.0);
            assert_in_range(candidate.score)?;
        }
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }
}
