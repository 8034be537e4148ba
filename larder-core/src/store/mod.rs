//! Data access traits for catalog items and saved lists.
//!
//! The `ItemStore` trait defines the two read-only queries the recommender
//! needs: the full catalog and the items a given user has saved. Both return
//! owned snapshots so the caller can rank and sample without holding any
//! store lock.

use std::error::Error as StdError;

use thiserror::Error;

use crate::{Item, UserId};

#[cfg(feature = "store-sqlite")]
mod persist;
#[cfg(feature = "store-sqlite")]
mod sqlite;

#[cfg(feature = "store-sqlite")]
pub use persist::{Catalog, CatalogUser, PersistCatalogError, persist_catalog};
#[cfg(feature = "store-sqlite")]
pub use sqlite::{SqliteItemStore, SqliteItemStoreError};

/// Boxed error raised by a store backend.
pub type BackendError = Box<dyn StdError + Send + Sync + 'static>;

/// Errors returned by [`ItemStore`] queries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The referenced user does not exist.
    #[error("user {user_id} was not found")]
    NotFound {
        /// Identifier that failed to resolve.
        user_id: UserId,
    },
    /// The backend failed while serving a read.
    #[error("failed to {operation}")]
    DataAccess {
        /// Description of the failed read.
        operation: &'static str,
        /// Error reported by the backend.
        #[source]
        source: BackendError,
    },
}

impl StoreError {
    /// Build a [`StoreError::NotFound`] for `user_id`.
    pub fn not_found(user_id: &UserId) -> Self {
        Self::NotFound {
            user_id: user_id.clone(),
        }
    }

    /// Wrap a backend failure raised while performing `operation`.
    pub fn data_access(operation: &'static str, source: impl Into<BackendError>) -> Self {
        Self::DataAccess {
            operation,
            source: source.into(),
        }
    }
}

/// Read-only access to the item catalog and users' saved items.
///
/// Implementations must be `Send + Sync` so one store can serve concurrent
/// recommendation calls. Neither query mutates the store, so callers may
/// issue them in any order.
///
/// # Examples
///
/// ```rust
/// use larder_core::{Item, ItemStore, StoreError, UserId};
///
/// struct SingleUser {
///     catalog: Vec<Item>,
/// }
///
/// impl ItemStore for SingleUser {
///     fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
///         Ok(self.catalog.clone())
///     }
///
///     fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
///         if user_id.as_str() == "me" {
///             Ok(Vec::new())
///         } else {
///             Err(StoreError::not_found(user_id))
///         }
///     }
/// }
///
/// let store = SingleUser { catalog: vec![Item::titled("a", "Toast", ["bread"])] };
/// assert_eq!(store.list_all_items()?.len(), 1);
/// assert!(matches!(
///     store.get_user_saved_items(&UserId::from("you")),
///     Err(StoreError::NotFound { .. })
/// ));
/// # Ok::<(), StoreError>(())
/// ```
pub trait ItemStore: Send + Sync {
    /// Return every item in the catalog, in the store's natural order.
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError>;

    /// Return the items `user_id` has saved.
    ///
    /// Implementations must return [`StoreError::NotFound`] when the user
    /// does not exist. An existing user with nothing saved yields an empty
    /// vector.
    fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError>;
}

impl<T: ItemStore + ?Sized> ItemStore for &T {
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_all_items()
    }

    fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
        (**self).get_user_saved_items(user_id)
    }
}

impl<T: ItemStore + ?Sized> ItemStore for Box<T> {
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
        (**self).list_all_items()
    }

    fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
        (**self).get_user_saved_items(user_id)
    }
}
