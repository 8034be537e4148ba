//! Similarity scoring and candidate ranking for Larder.
//!
//! The crate provides the two pure building blocks of a recommendation:
//! - [`OverlapScorer`] measures how many features two items share, divided by
//!   the size of the larger set. [`JaccardScorer`] is available for callers
//!   who prefer a union-based index; it ranks differently and is never the
//!   default.
//! - [`CandidateRanker`] scores every unsaved catalog item against the user's
//!   saved items, keeps each item's best match, and orders the survivors.
//!
//! # Examples
//!
//! ```
//! use larder_core::Item;
//! use larder_scorer::CandidateRanker;
//!
//! let catalog = vec![
//!     Item::titled("a", "Cake", ["flour", "egg"]),
//!     Item::titled("b", "Biscuits", ["flour", "sugar"]),
//!     Item::titled("c", "Risotto", ["rice"]),
//! ];
//! let saved = vec![catalog[0].clone()];
//!
//! let ranked = CandidateRanker::default().rank(&catalog, &saved);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].id().as_str(), "b");
//! assert_eq!(ranked[0].score, 0.5);
//! ```

#![forbid(unsafe_code)]

mod jaccard;
mod overlap;
mod ranker;

pub use jaccard::JaccardScorer;
pub use overlap::OverlapScorer;
pub use ranker::CandidateRanker;
