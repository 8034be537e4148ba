//! SQLite-backed store for a persisted catalog and saved lists.
//!
//! The schema is written by [`persist_catalog`](super::persist_catalog):
//! `items` holds each item's features and payload as JSON text, `users`
//! lists known user ids, and `saved_items` links users to items with an
//! explicit position.

use std::sync::Mutex;

use camino::{Utf8Path, Utf8PathBuf};
use log::debug;
use rusqlite::{Connection, OpenFlags, OptionalExtension, Row};
use thiserror::Error;

use crate::{FeatureSet, Item, ItemId, RecipeDetails, UserId};

use super::{ItemStore, StoreError};

const LIST_ITEMS_SQL: &str = "SELECT id, features, details FROM items ORDER BY rowid";
const USER_EXISTS_SQL: &str = "SELECT 1 FROM users WHERE id = ?1";
const SAVED_ITEMS_SQL: &str = "SELECT items.id, items.features, items.details
     FROM saved_items
     JOIN items ON items.id = saved_items.item_id
     WHERE saved_items.user_id = ?1
     ORDER BY saved_items.position";

/// Errors raised while opening a [`SqliteItemStore`].
#[derive(Debug, Error)]
pub enum SqliteItemStoreError {
    /// Opening the SQLite database failed.
    #[error("failed to open SQLite database at {path}")]
    OpenDatabase {
        /// Location of the SQLite database on disk.
        path: Utf8PathBuf,
        /// Source error returned by `rusqlite`.
        #[source]
        source: rusqlite::Error,
    },
    /// The database lacks the expected tables or columns.
    #[error("database at {path} does not contain a Larder catalog")]
    Schema {
        /// Location of the SQLite database on disk.
        path: Utf8PathBuf,
        /// Source error returned while preparing a query.
        #[source]
        source: rusqlite::Error,
    },
}

/// Read-only item store backed by a SQLite database.
///
/// `rusqlite::Connection` is not `Sync`, so the connection sits behind a
/// mutex; each query holds the lock only while rows are read.
#[derive(Debug)]
pub struct SqliteItemStore {
    connection: Mutex<Connection>,
}

impl SqliteItemStore {
    /// Open an existing catalog database in read-only mode.
    ///
    /// # Errors
    /// Returns [`SqliteItemStoreError::OpenDatabase`] when the file cannot be
    /// opened and [`SqliteItemStoreError::Schema`] when the catalog tables
    /// are missing.
    pub fn open(path: &Utf8Path) -> Result<Self, SqliteItemStoreError> {
        let connection =
            Connection::open_with_flags(path.as_std_path(), OpenFlags::SQLITE_OPEN_READ_ONLY)
                .map_err(|source| SqliteItemStoreError::OpenDatabase {
                    path: path.to_path_buf(),
                    source,
                })?;
        for sql in [LIST_ITEMS_SQL, USER_EXISTS_SQL, SAVED_ITEMS_SQL] {
            connection
                .prepare_cached(sql)
                .map_err(|source| SqliteItemStoreError::Schema {
                    path: path.to_path_buf(),
                    source,
                })?;
        }
        debug!("opened item store at {path}");
        Ok(Self {
            connection: Mutex::new(connection),
        })
    }

    fn with_connection<T>(
        &self,
        operation: &'static str,
        query: impl FnOnce(&Connection) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| StoreError::data_access(operation, "connection mutex poisoned"))?;
        query(&connection)
    }
}

impl ItemStore for SqliteItemStore {
    fn list_all_items(&self) -> Result<Vec<Item>, StoreError> {
        const OPERATION: &str = "list catalog items";
        self.with_connection(OPERATION, |connection| {
            let mut statement = connection
                .prepare_cached(LIST_ITEMS_SQL)
                .map_err(|source| StoreError::data_access(OPERATION, source))?;
            let rows = statement
                .query_map([], read_raw_item)
                .map_err(|source| StoreError::data_access(OPERATION, source))?;
            collect_items(rows, OPERATION)
        })
    }

    fn get_user_saved_items(&self, user_id: &UserId) -> Result<Vec<Item>, StoreError> {
        const OPERATION: &str = "load saved items";
        self.with_connection(OPERATION, |connection| {
            let exists = connection
                .prepare_cached(USER_EXISTS_SQL)
                .and_then(|mut statement| {
                    statement
                        .query_row([user_id.as_str()], |_| Ok(()))
                        .optional()
                })
                .map_err(|source| StoreError::data_access(OPERATION, source))?;
            if exists.is_none() {
                return Err(StoreError::not_found(user_id));
            }

            let mut statement = connection
                .prepare_cached(SAVED_ITEMS_SQL)
                .map_err(|source| StoreError::data_access(OPERATION, source))?;
            let rows = statement
                .query_map([user_id.as_str()], read_raw_item)
                .map_err(|source| StoreError::data_access(OPERATION, source))?;
            collect_items(rows, OPERATION)
        })
    }
}

struct RawItem {
    id: String,
    features: String,
    details: String,
}

fn read_raw_item(row: &Row<'_>) -> rusqlite::Result<RawItem> {
    Ok(RawItem {
        id: row.get(0)?,
        features: row.get(1)?,
        details: row.get(2)?,
    })
}

fn collect_items<I>(rows: I, operation: &'static str) -> Result<Vec<Item>, StoreError>
where
    I: Iterator<Item = rusqlite::Result<RawItem>>,
{
    rows.map(|row| {
        let raw = row.map_err(|source| StoreError::data_access(operation, source))?;
        decode_item(raw, operation)
    })
    .collect()
}

fn decode_item(raw: RawItem, operation: &'static str) -> Result<Item, StoreError> {
    let features: Vec<String> = serde_json::from_str(&raw.features)
        .map_err(|source| StoreError::data_access(operation, source))?;
    let details: RecipeDetails = serde_json::from_str(&raw.details)
        .map_err(|source| StoreError::data_access(operation, source))?;
    Ok(Item {
        id: ItemId::from(raw.id),
        features: FeatureSet::from(features),
        details,
    })
}
