//! Repository Layer - Core Traits
//!
//! Defines the abstract interface of the durable store.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::domain::DomainResult;

/// A synchronous string key-value slot store
///
/// Mirrors the browser's per-origin storage: values are UTF-8 text and
/// every call completes before returning.
pub trait KeyValueStore {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> DomainResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> DomainResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> DomainResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> DomainResult<()> {
        (**self).set(key, value)
    }
}
