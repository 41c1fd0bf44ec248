//! Persistent preference storage using redb.
//!
//! The application persists exactly one kind of data: small preference
//! values keyed by name. Values are stored as JSON bytes.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use redb::{Database, ReadableTable, TableDefinition};

use crate::error::StudyError;

/// File name of the preference database inside the data directory
pub const DB_FILE_NAME: &str = "hscstudy.redb";

const PREFERENCES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("preferences");

/// Key-value store for preference values
pub trait PreferenceStore {
    /// Raw stored bytes for `key`, or `None` if never written
    fn load_preference(&self, key: &str) -> Result<Option<Vec<u8>>, StudyError>;

    fn save_preference(&self, key: &str, value: &[u8]) -> Result<(), StudyError>;
}

/// Storage layer using redb for ACID-compliant persistence
#[derive(Clone)]
pub struct Storage {
    db: Arc<RwLock<Database>>,
}

impl Storage {
    /// Create a new storage instance at the given path.
    ///
    /// This will:
    /// - Create the database directory if it doesn't exist
    /// - Initialize the database file
    /// - Create the preferences table
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StudyError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(PREFERENCES_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self {
            db: Arc::new(RwLock::new(db)),
        })
    }
}

impl PreferenceStore for Storage {
    fn load_preference(&self, key: &str) -> Result<Option<Vec<u8>>, StudyError> {
        let db = self.db.read();
        let read_txn = db.begin_read()?;
        let table = read_txn.open_table(PREFERENCES_TABLE)?;

        Ok(table.get(key)?.map(|v| v.value().to_vec()))
    }

    fn save_preference(&self, key: &str, value: &[u8]) -> Result<(), StudyError> {
        let db = self.db.read();
        let write_txn = db.begin_write()?;
        {
            let mut table = write_txn.open_table(PREFERENCES_TABLE)?;
            table.insert(key, value)?;
        }
        write_txn.commit()?;
        Ok(())
    }
}

/// Volatile store, used when no data directory is available
#[derive(Clone, Default)]
pub struct MemoryStore {
    values: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn load_preference(&self, key: &str) -> Result<Option<Vec<u8>>, StudyError> {
        Ok(self.values.read().get(key).cloned())
    }

    fn save_preference(&self, key: &str, value: &[u8]) -> Result<(), StudyError> {
        self.values.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
