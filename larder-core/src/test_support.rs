//! In-memory `ItemStore` implementations used by unit and behaviour tests.

use std::collections::HashMap;

use log::warn;

use crate::{Item, ItemId, ItemStore, StoreError, UserId};

/// In-memory `ItemStore` holding a catalog and per-user saved lists.
///
/// Saved ids that do not resolve to a catalog item are skipped, mirroring a
/// document store whose references outlive the documents they point at.
#[derive(Default, Debug, Clone)]
pub struct MemoryStore {
    items: Vec<Item>,
    saved: HashMap<UserId, Vec<ItemId>>,
}

impl MemoryStore {
    /// Create a store from a catalog with no users.
    #[must_use]
    pub fn with_items<I>(items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        Self {
            items: items.into_iter().collect(),
            saved: HashMap::new(),
        }
    }

    /// Register `user_id` with the given saved item ids.
    #[must_use]
    pub fn with_user<U, I, S>(mut self, user_id: U, saved: I) -> Self
    where
        U: Into<UserId>,
        I: IntoIterator<Item = S>,
        S: Into<ItemId>,
    {
        self.saved
            .insert(user_id.into(), saved.into_iter().map(Into::into).collect());
        self
    }
}

impl ItemStore for MemoryStore {
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
        Ok(self.items.clone())
    }

    fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
        let ids = self
            .saved
            .get(user_id)
            .ok_or_else(|| StoreError::not_found(user_id))?;
        Ok(ids
            .iter()
            .filter_map(|id| {
                let found = self.items.iter().find(|item| &item.id == id);
                if found.is_none() {
                    warn!("user {user_id} saved unknown item {id}; skipping");
                }
                found
            })
            .cloned()
            .collect())
    }
}

/// Store whose reads fail, for exercising error propagation.
#[derive(Debug, Clone, Copy, Default)]
pub struct FailingStore {
    fail_catalog: bool,
    fail_history: bool,
}

impl FailingStore {
    /// Fail the catalog read only; every user exists with nothing saved.
    #[must_use]
    pub const fn catalog() -> Self {
        Self {
            fail_catalog: true,
            fail_history: false,
        }
    }

    /// Fail the saved-items read only; the catalog is empty.
    #[must_use]
    pub const fn history() -> Self {
        Self {
            fail_catalog: false,
            fail_history: true,
        }
    }
}

impl ItemStore for FailingStore {
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
        if self.fail_catalog {
            return Err(StoreError::data_access(
                "list catalog items",
                "catalog backend unavailable",
            ));
        }
        Ok(Vec::new())
    }

    fn get_user_saved_items(&self, _user_id: &UserId) -> Result<Vec<Item>, StoreError> {
        if self.fail_history {
            return Err(StoreError::data_access(
                "load saved items",
                "history backend unavailable",
            ));
        }
        Ok(Vec::new())
    }
}
