//! Task Store Adapter
//!
//! Reads and writes the task collection as one JSON document under a fixed key.
//! `load` and `save` never fail towards the caller: errors are logged and the
//! in-memory state stays authoritative for the session.

use crate::domain::{DomainError, DomainResult, Task};
use super::migration::{normalize, parse_document, RawEntry};
use super::traits::KeyValueStore;

/// Key of the task collection in the durable store
pub const STORAGE_KEY: &str = "todoTasks";

pub struct TaskStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> TaskStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Raw entries as stored; an absent key is an empty collection
    pub fn try_load(&self) -> DomainResult<Vec<RawEntry>> {
        match self.store.get(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => parse_document(&raw),
        }
    }

    /// Fail-soft load: unreadable data is logged and treated as empty
    pub fn load(&self) -> Vec<RawEntry> {
        self.try_load().unwrap_or_else(|e| {
            log::error!("Failed to load tasks from '{}': {}", self.key, e);
            Vec::new()
        })
    }

    /// Load and normalize into canonical records
    pub fn load_tasks(&self) -> Vec<Task> {
        normalize(self.load())
    }

    pub fn try_save(&self, tasks: &[Task]) -> DomainResult<()> {
        let json = serde_json::to_string(tasks)
            .map_err(|e| DomainError::StoreWrite(e.to_string()))?;
        self.store.set(&self.key, &json)
    }

    /// Fail-soft save: a failed write is logged and dropped
    pub fn save(&self, tasks: &[Task]) {
        if let Err(e) = self.try_save(tasks) {
            log::error!("Failed to save {} tasks to '{}': {}", tasks.len(), self.key, e);
        }
    }
}
