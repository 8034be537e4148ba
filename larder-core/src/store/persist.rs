//! Persist an imported catalog and saved lists to SQLite.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs_utf8};
use log::{debug, info};
use rusqlite::{Connection, Error as SqliteError, Transaction};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Item, ItemId, UserId};

/// Catalog document accepted by [`persist_catalog`].
///
/// # Examples
/// ```
/// use larder_core::Catalog;
///
/// let catalog: Catalog = serde_json::from_str(
///     r#"{
///         "items": [{"id": "a", "title": "Cake", "ingredients": ["flour", "egg"]}],
///         "users": [{"id": "cook", "saved": ["a"]}]
///     }"#,
/// )?;
/// assert_eq!(catalog.items.len(), 1);
/// assert_eq!(catalog.users[0].saved.len(), 1);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Catalog {
    /// Items in catalog order.
    #[serde(default)]
    pub items: Vec<Item>,
    /// Users and the items each has saved.
    #[serde(default)]
    pub users: Vec<CatalogUser>,
}

/// A user entry in a [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogUser {
    /// User identifier.
    pub id: UserId,
    /// Saved item ids in the order the user saved them.
    #[serde(default)]
    pub saved: Vec<ItemId>,
}

/// Errors raised when persisting a catalog to SQLite.
#[derive(Debug, Error)]
pub enum PersistCatalogError {
    /// Failed to create the parent directory for the database.
    #[error("failed to create parent directory {path}")]
    CreateDirectory {
        /// Path of the directory that could not be created.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}")]
    Open {
        /// Destination database path.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Enabling SQLite foreign keys failed.
    #[error("failed to enable SQLite foreign keys")]
    ForeignKeys {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Beginning the transaction failed.
    #[error("failed to begin catalog persistence transaction")]
    BeginTransaction {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Creating the catalog tables failed.
    #[error("failed to create catalog tables")]
    CreateSchema {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Preparing an insert statement failed.
    #[error("failed to prepare {statement} statement")]
    Prepare {
        /// Name of the statement being prepared.
        statement: &'static str,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Serialising an item's features or payload to JSON failed.
    #[error("failed to serialise item {item_id}")]
    SerialiseItem {
        /// Identifier of the item being serialised.
        item_id: ItemId,
        /// Source error produced by `serde_json`.
        #[source]
        source: serde_json::Error,
    },
    /// Writing an item row failed.
    #[error("failed to persist item {item_id}")]
    PersistItem {
        /// Identifier of the item being persisted.
        item_id: ItemId,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// A user's saved list references an item missing from the catalog.
    #[error("user {user_id} saved unknown item {item_id}")]
    UnknownSavedItem {
        /// User whose list holds the dangling reference.
        user_id: UserId,
        /// Identifier absent from the catalog.
        item_id: ItemId,
    },
    /// Writing a user or saved-item row failed.
    #[error("failed to persist saved items for user {user_id}")]
    PersistUser {
        /// Identifier of the user being persisted.
        user_id: UserId,
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
    /// Committing the transaction failed.
    #[error("failed to commit catalog persistence transaction")]
    Commit {
        /// Source error returned by `rusqlite`.
        #[source]
        source: SqliteError,
    },
}

/// Persist a catalog and its users' saved lists to a SQLite database.
///
/// The function is idempotent: items are upserted by id and each listed
/// user's saved list is replaced wholesale. Parent directories are created
/// automatically and the schema is initialised if missing. Every saved id
/// must name an item in `catalog.items`; the transaction is rolled back
/// otherwise.
///
/// # Errors
/// Returns [`PersistCatalogError`] describing the step that failed.
pub fn persist_catalog(path: &Utf8Path, catalog: &Catalog) -> Result<(), PersistCatalogError> {
    ensure_parent_dir(path)?;
    let mut connection =
        Connection::open(path.as_std_path()).map_err(|source| PersistCatalogError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    connection
        .pragma_update(None, "foreign_keys", true)
        .map_err(|source| PersistCatalogError::ForeignKeys { source })?;

    let transaction = connection
        .transaction()
        .map_err(|source| PersistCatalogError::BeginTransaction { source })?;

    create_schema(&transaction)?;
    persist_items(&transaction, &catalog.items)?;
    persist_users(&transaction, catalog)?;

    transaction
        .commit()
        .map_err(|source| PersistCatalogError::Commit { source })?;
    info!(
        "persisted {} items and {} users to {path}",
        catalog.items.len(),
        catalog.users.len()
    );
    Ok(())
}

fn ensure_parent_dir(path: &Utf8Path) -> Result<(), PersistCatalogError> {
    let Some(parent) = path.parent() else {
        return Ok(());
    };
    if parent.as_str().is_empty() || parent == Utf8Path::new("/") {
        return Ok(());
    }

    let (base, relative) = if parent.is_absolute() {
        ("/", parent.strip_prefix("/").unwrap_or(parent))
    } else {
        (".", parent)
    };
    let create = |source| PersistCatalogError::CreateDirectory {
        path: parent.to_path_buf(),
        source,
    };
    let dir = fs_utf8::Dir::open_ambient_dir(base, ambient_authority()).map_err(create)?;
    dir.create_dir_all(relative).map_err(create)
}

fn create_schema(transaction: &Transaction<'_>) -> Result<(), PersistCatalogError> {
    transaction
        .execute_batch(
            "CREATE TABLE IF NOT EXISTS items (
                id TEXT PRIMARY KEY,
                features TEXT NOT NULL,
                details TEXT NOT NULL
            );
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY
            );
            CREATE TABLE IF NOT EXISTS saved_items (
                user_id TEXT NOT NULL REFERENCES users(id),
                item_id TEXT NOT NULL REFERENCES items(id),
                position INTEGER NOT NULL,
                PRIMARY KEY (user_id, item_id)
            );",
        )
        .map_err(|source| PersistCatalogError::CreateSchema { source })
}

fn persist_items(transaction: &Transaction<'_>, items: &[Item]) -> Result<(), PersistCatalogError> {
    if items.is_empty() {
        return Ok(());
    }

    let mut statement = transaction
        .prepare(
            "INSERT INTO items (id, features, details) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET features = excluded.features, details = excluded.details",
        )
        .map_err(|source| PersistCatalogError::Prepare {
            statement: "item upsert",
            source,
        })?;

    for item in items {
        let serialise = |source| PersistCatalogError::SerialiseItem {
            item_id: item.id.clone(),
            source,
        };
        let features = serde_json::to_string(&item.features).map_err(serialise)?;
        let details = serde_json::to_string(&item.details).map_err(serialise)?;
        statement
            .execute((item.id.as_str(), features, details))
            .map_err(|source| PersistCatalogError::PersistItem {
                item_id: item.id.clone(),
                source,
            })?;
    }
    debug!("upserted {} items", items.len());
    Ok(())
}

fn persist_users(transaction: &Transaction<'_>, catalog: &Catalog) -> Result<(), PersistCatalogError> {
    let known: HashSet<&ItemId> = catalog.items.iter().map(|item| &item.id).collect();

    for user in &catalog.users {
        if let Some(missing) = user.saved.iter().find(|id| !known.contains(id)) {
            return Err(PersistCatalogError::UnknownSavedItem {
                user_id: user.id.clone(),
                item_id: missing.clone(),
            });
        }
        persist_user(transaction, user).map_err(|source| PersistCatalogError::PersistUser {
            user_id: user.id.clone(),
            source,
        })?;
    }
    Ok(())
}

fn persist_user(transaction: &Transaction<'_>, user: &CatalogUser) -> Result<(), SqliteError> {
    transaction.execute("INSERT OR IGNORE INTO users (id) VALUES (?1)", [user.id.as_str()])?;
    transaction.execute(
        "DELETE FROM saved_items WHERE user_id = ?1",
        [user.id.as_str()],
    )?;

    let mut statement = transaction.prepare_cached(
        "INSERT OR IGNORE INTO saved_items (user_id, item_id, position) VALUES (?1, ?2, ?3)",
    )?;
    for (position, item_id) in (0_i64..).zip(&user.saved) {
        statement.execute((user.id.as_str(), item_id.as_str(), position))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ItemStore;
    use crate::store::SqliteItemStore;
    use rstest::rstest;
    use tempfile::TempDir;

    fn db_path(dir: &TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("utf-8 path")
    }

    #[rstest]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().expect("create temp dir");
        let path = db_path(&dir, "nested/deeper/larder.db");
        persist_catalog(&path, &Catalog::default()).expect("persist empty catalog");
        assert!(path.as_std_path().is_file());
    }

    #[rstest]
    fn reimport_updates_items_and_replaces_saved_lists() {
        let dir = TempDir::new().expect("create temp dir");
        let path = db_path(&dir, "larder.db");
        let mut catalog = Catalog {
            items: vec![
                Item::titled("a", "Cake", ["flour"]),
                Item::titled("b", "Bread", ["flour", "yeast"]),
            ],
            users: vec![CatalogUser {
                id: UserId::from("cook"),
                saved: vec![ItemId::from("a"), ItemId::from("b")],
            }],
        };
        persist_catalog(&path, &catalog).expect("first import");

        catalog.items[0] = Item::titled("a", "Sponge cake", ["flour", "egg"]);
        catalog.users[0].saved = vec![ItemId::from("b")];
        persist_catalog(&path, &catalog).expect("second import");

        let store = SqliteItemStore::open(&path).expect("open store");
        let items = store.list_all_items().expect("list items");
        assert_eq!(items, catalog.items);
        let saved = store
            .get_user_saved_items(&UserId::from("cook"))
            .expect("saved items");
        assert_eq!(saved.len(), 1);
        assert_eq!(saved[0].id, ItemId::from("b"));
    }

    #[rstest]
    fn rejects_saved_ids_outside_the_catalog() {
        let dir = TempDir::new().expect("create temp dir");
        let path = db_path(&dir, "larder.db");
        let catalog = Catalog {
            items: vec![Item::titled("a", "Cake", ["flour"])],
            users: vec![CatalogUser {
                id: UserId::from("cook"),
                saved: vec![ItemId::from("zzz")],
            }],
        };
        let err = persist_catalog(&path, &catalog).expect_err("dangling saved id");
        match err {
            PersistCatalogError::UnknownSavedItem { user_id, item_id } => {
                assert_eq!(user_id, UserId::from("cook"));
                assert_eq!(item_id, ItemId::from("zzz"));
            }
            other => panic!("expected UnknownSavedItem, found {other:?}"),
        }
    }
}
