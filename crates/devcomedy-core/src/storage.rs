//! Durable key/value storage using redb.
//!
//! Stands in for browser local storage: one table of string keys to
//! string (JSON) values. Two keys are used by the portfolio:
//! - [`ACHIEVEMENTS_KEY`]: the serialized achievement list
//! - [`JOKE_ANALYTICS_KEY`]: joke text → click count
//!
//! Everything stored here is best-effort. Callers log failures and keep
//! their in-memory state authoritative.

use crate::error::PortfolioError;
use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Key holding the JSON-serialized achievement list
pub const ACHIEVEMENTS_KEY: &str = "portfolio-achievements";

/// Key holding the joke-click analytics tally
pub const JOKE_ANALYTICS_KEY: &str = "joke-analytics";

const LOCAL_STORAGE_TABLE: TableDefinition<&str, &str> = TableDefinition::new("local_storage");

/// String key/value persistence used by the stores.
pub trait KeyValueStore: Send + Sync {
    /// Read a value; `None` when the key was never written.
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError>;

    /// Write (or overwrite) a value.
    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError>;

    /// Delete a key. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), PortfolioError>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// Creates the parent directory and the `local_storage` table if needed.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, PortfolioError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl KeyValueStore for Storage {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(LOCAL_STORAGE_TABLE)?;

        let value = table.get(key)?.map(|v| v.value().to_string());
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortfolioError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(LOCAL_STORAGE_TABLE)?;
            table.remove(key)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Process-local storage, used when the database cannot be opened and in tests.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, PortfolioError> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), PortfolioError> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), PortfolioError> {
        self.entries.write().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_storage() -> (Storage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.redb");
        let storage = Storage::new(&db_path).unwrap();
        (storage, temp_dir)
    }

    #[test]
    fn test_get_missing_key() {
        let (storage, _temp) = create_test_storage();
        assert!(storage.get(ACHIEVEMENTS_KEY).unwrap().is_none());
    }

    #[test]
    fn test_set_and_get() {
        let (storage, _temp) = create_test_storage();

        storage.set(ACHIEVEMENTS_KEY, "[]").unwrap();
        assert_eq!(storage.get(ACHIEVEMENTS_KEY).unwrap().as_deref(), Some("[]"));

        // Overwrite
        storage.set(ACHIEVEMENTS_KEY, "[1]").unwrap();
        assert_eq!(storage.get(ACHIEVEMENTS_KEY).unwrap().as_deref(), Some("[1]"));
    }

    #[test]
    fn test_remove() {
        let (storage, _temp) = create_test_storage();

        storage.set(JOKE_ANALYTICS_KEY, "{}").unwrap();
        storage.remove(JOKE_ANALYTICS_KEY).unwrap();
        assert!(storage.get(JOKE_ANALYTICS_KEY).unwrap().is_none());

        // Removing again is fine
        storage.remove(JOKE_ANALYTICS_KEY).unwrap();
    }

    #[test]
    fn test_values_persist_across_instances() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("nested").join("storage.redb");

        {
            let storage = Storage::new(&db_path).unwrap();
            storage.set(ACHIEVEMENTS_KEY, "saved").unwrap();
        }

        {
            let storage = Storage::new(&db_path).unwrap();
            assert_eq!(storage.get(ACHIEVEMENTS_KEY).unwrap().as_deref(), Some("saved"));
        }
    }

    #[test]
    fn test_memory_storage_shares_entries_between_clones() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();

        storage.set("k", "v").unwrap();
        assert_eq!(clone.get("k").unwrap().as_deref(), Some("v"));
    }
}
