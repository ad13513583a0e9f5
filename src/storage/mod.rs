pub mod config;
pub mod kv;
pub mod repository;
pub mod shared;
pub mod sqlite;

use std::sync::Arc;

pub use kv::{FileStore, KeyValueStore, MemoryStore, StoreError};
pub use repository::{load_or_seed, new_record_id, Record, RecordStore, Repository, StoredRepository};
pub use shared::SharedStore;
pub use sqlite::SqliteStore;

use config::{StorageBackend, StorageConfig};

/// Opens the key-value store selected by the storage section of the config.
pub fn open_store(config: &StorageConfig) -> Result<Arc<dyn KeyValueStore>, StoreError> {
    match config.backend {
        StorageBackend::Json => {
            tracing::info!("Using JSON file store at {}", config.data_dir.display());
            Ok(Arc::new(FileStore::new(config.data_dir.clone())))
        }
        StorageBackend::Sqlite => {
            let path = config.data_dir.join("crm.sqlite3");
            tracing::info!("Using SQLite store at {}", path.display());
            Ok(Arc::new(SqliteStore::open(&path)?))
        }
    }
}
