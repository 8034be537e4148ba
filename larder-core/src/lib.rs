//! Core domain types for the Larder recommendation engine.
//!
//! The crate defines the catalog model ([`Item`], [`FeatureSet`]), the
//! request-scoped recommendation types, and the two seams the engine is
//! generic over: a read-only [`ItemStore`] supplying the catalog and a user's
//! saved items, and a [`SimilarityScorer`] comparing feature sets.
//!
//! Nothing here retains state between calls. Every type produced while
//! ranking is built from a fresh catalog snapshot and dropped once the
//! recommendation list has been returned.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod id;
pub mod item;
pub mod recommendation;
pub mod scorer;
pub mod store;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use id::{ItemId, UserId};
pub use item::{FeatureSet, Item, RecipeDetails};
pub use recommendation::{
    DEFAULT_OUTPUT_SIZE, RecommendRequest, Recommendation, ScoredCandidate, Source,
};
pub use scorer::SimilarityScorer;
pub use store::{ItemStore, StoreError};

#[cfg(feature = "store-sqlite")]
pub use store::{
    Catalog, CatalogUser, PersistCatalogError, SqliteItemStore, SqliteItemStoreError,
    persist_catalog,
};
