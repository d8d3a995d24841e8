//! In-memory key-value store.
//!
//! Used by tests and as a stand-in when no durable storage is available.
//! Reads and writes can be switched to fail to exercise the recovery paths.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use crate::domain::{DomainError, DomainResult};
use super::traits::KeyValueStore;

#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<HashMap<String, String>>,
    fail_reads: Cell<bool>,
    fail_writes: Cell<bool>,
    write_count: Cell<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with a raw value (e.g. a legacy document)
    pub fn with_value(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.values.borrow_mut().insert(key.to_string(), value.to_string());
        store
    }

    /// Raw stored value, bypassing failure injection
    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.borrow().get(key).cloned()
    }

    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.set(fail);
    }

    /// Simulate a full or disabled storage area
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.write_count.get()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        if self.fail_reads.get() {
            return Err(DomainError::StoreRead("storage is unavailable".to_string()));
        }
        Ok(self.raw(key))
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        if self.fail_writes.get() {
            return Err(DomainError::StoreWrite("quota exceeded".to_string()));
        }
        self.values.borrow_mut().insert(key.to_string(), value.to_string());
        self.write_count.set(self.write_count.get() + 1);
        Ok(())
    }
}
