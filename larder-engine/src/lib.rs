//! Recommendation orchestration for Larder.
//!
//! [`Recommender`] ties a [`larder_core::ItemStore`] to a
//! [`larder_scorer::CandidateRanker`] and a [`RandomBackfiller`]. Each call
//! reads the user's saved items and one catalog snapshot, ranks the unsaved
//! items by similarity, tops the list up with random picks when ranking
//! falls short, and truncates to the requested size.
//!
//! The random source is injectable. [`Recommender::recommend`] seeds a
//! ChaCha generator from [`larder_core::RecommendRequest::seed`] (or OS
//! entropy), while [`Recommender::recommend_with_rng`] accepts any
//! [`rand::Rng`].

#![forbid(unsafe_code)]

mod backfill;
mod dedup;
mod recommender;

pub use backfill::RandomBackfiller;
pub use dedup::dedup_by_id;
pub use recommender::{RecommendError, Recommender};
