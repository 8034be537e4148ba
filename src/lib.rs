//! Facade crate for the Larder recipe recommender.
//!
//! This crate re-exports the core domain types, the scorers and ranker, and
//! the recommender. The SQLite store and catalog import sit behind the
//! `store-sqlite` feature.
//!
//! # Examples
//!
//! ```
//! use larder::{Item, ItemStore, RecommendRequest, Recommender, Source, StoreError, UserId};
//!
//! struct Kitchen {
//!     catalog: Vec<Item>,
//! }
//!
//! impl ItemStore for Kitchen {
//!     fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
//!         Ok(self.catalog.clone())
//!     }
//!
//!     fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
//!         match user_id.as_str() {
//!             "cook" => Ok(self.catalog.iter().take(1).cloned().collect()),
//!             _ => Err(StoreError::not_found(user_id)),
//!         }
//!     }
//! }
//!
//! let store = Kitchen {
//!     catalog: vec![
//!         Item::titled("cake", "Cake", ["flour", "egg", "sugar"]),
//!         Item::titled("biscuits", "Biscuits", ["flour", "sugar"]),
//!         Item::titled("risotto", "Risotto", ["rice", "stock"]),
//!     ],
//! };
//!
//! let picks = Recommender::new(store).recommend(&RecommendRequest::new("cook").with_seed(3))?;
//! assert_eq!(picks[0].item.id.as_str(), "biscuits");
//! assert_eq!(picks[0].source, Source::Similarity);
//! assert_eq!(picks.len(), 2);
//! # Ok::<(), larder::RecommendError>(())
//! ```

#![forbid(unsafe_code)]

pub use larder_core::{
    DEFAULT_OUTPUT_SIZE, FeatureSet, Item, ItemId, ItemStore, RecipeDetails, RecommendRequest,
    Recommendation, ScoredCandidate, SimilarityScorer, Source, StoreError, UserId,
};

#[cfg(feature = "store-sqlite")]
pub use larder_core::{
    Catalog, CatalogUser, PersistCatalogError, SqliteItemStore, SqliteItemStoreError,
    persist_catalog,
};

pub use larder_engine::{RandomBackfiller, RecommendError, Recommender, dedup_by_id};
pub use larder_scorer::{CandidateRanker, JaccardScorer, OverlapScorer};
