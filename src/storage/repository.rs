use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::kv::{KeyValueStore, StoreError};

/// A flat record persisted as one element of a JSON array.
pub trait Record: Clone + Serialize + DeserializeOwned {
    const STORAGE_KEY: &'static str;

    fn id(&self) -> &str;
}

/// Whole-collection persistence. `load` yields `None` when nothing was stored yet.
pub trait Repository<T> {
    fn load(&self) -> Result<Option<Vec<T>>, StoreError>;
    fn save_all(&self, records: &[T]) -> Result<(), StoreError>;
}

pub struct StoredRepository<T> {
    store: Arc<dyn KeyValueStore>,
    key: String,
    _record: PhantomData<fn() -> T>,
}

impl<T: Record> StoredRepository<T> {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_key(store, T::STORAGE_KEY)
    }

    pub fn with_key(store: Arc<dyn KeyValueStore>, key: &str) -> Self {
        Self {
            store,
            key: key.to_string(),
            _record: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl<T: Record> Repository<T> for StoredRepository<T> {
    fn load(&self) -> Result<Option<Vec<T>>, StoreError> {
        let Some(content) = self.store.get(&self.key)? else {
            return Ok(None);
        };
        let records = serde_json::from_str(&content)?;
        Ok(Some(records))
    }

    fn save_all(&self, records: &[T]) -> Result<(), StoreError> {
        let content = serde_json::to_string(records)?;
        self.store.set(&self.key, &content)
    }
}

pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Reads the collection behind `repo`. Missing or unparseable data is
/// replaced by `seed`, which is written back.
pub fn load_or_seed<T, F>(repo: &dyn Repository<T>, seed: F) -> Result<Vec<T>, StoreError>
where
    T: Record,
    F: FnOnce() -> Vec<T>,
{
    match repo.load() {
        Ok(Some(records)) => {
            tracing::debug!("Loaded {} {} records", records.len(), T::STORAGE_KEY);
            Ok(records)
        }
        Ok(None) => {
            tracing::info!("No stored {}, writing seed data", T::STORAGE_KEY);
            let records = seed();
            repo.save_all(&records)?;
            Ok(records)
        }
        Err(StoreError::SerializationError(e)) => {
            tracing::warn!("Stored {} unreadable ({}), replacing with seed data", T::STORAGE_KEY, e);
            let records = seed();
            repo.save_all(&records)?;
            Ok(records)
        }
        Err(e) => Err(e),
    }
}

/// In-memory collection that writes itself through to its repository after
/// every mutation.
pub struct RecordStore<T: Record> {
    repo: Box<dyn Repository<T>>,
    records: Vec<T>,
}

impl<T: Record> RecordStore<T> {
    /// Loads the stored collection, falling back to `seed` (and persisting it)
    /// when nothing is stored or the stored data cannot be parsed.
    pub fn open<R, F>(repo: R, seed: F) -> Result<Self, StoreError>
    where
        R: Repository<T> + 'static,
        F: FnOnce() -> Vec<T>,
    {
        let records = load_or_seed::<T, F>(&repo, seed)?;
        Ok(Self {
            repo: Box::new(repo),
            records,
        })
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn append(&mut self, record: T) -> Result<(), StoreError> {
        self.records.push(record);
        self.persist()
    }

    pub fn prepend(&mut self, record: T) -> Result<(), StoreError> {
        self.records.insert(0, record);
        self.persist()
    }

    /// Replaces the record with the same id. Returns false when no record matched.
    pub fn replace(&mut self, record: T) -> Result<bool, StoreError> {
        let Some(slot) = self.records.iter_mut().find(|r| r.id() == record.id()) else {
            return Ok(false);
        };
        *slot = record;
        self.persist()?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> Result<Option<T>, StoreError> {
        let Some(index) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        let removed = self.records.remove(index);
        self.persist()?;
        Ok(Some(removed))
    }

    pub fn replace_all(&mut self, records: Vec<T>) -> Result<(), StoreError> {
        self.records = records;
        self.persist()
    }

    fn persist(&self) -> Result<(), StoreError> {
        tracing::debug!("Saving {} {} records", self.records.len(), T::STORAGE_KEY);
        self.repo.save_all(&self.records)
    }
}
