//! Repository Layer
//!
//! Data access for tasks and the theme preference.
//! - traits: the durable key-value slot abstraction
//! - memory: in-memory store (tests, storage-less fallback)
//! - store: task store adapter (serialize / fail-soft load and save)
//! - migration: legacy entry normalization
//! - id_alloc: task identity allocation
//! - task_repo: load → mutate → save task operations
//! - theme_store: theme preference persistence

mod traits;
mod memory;
mod store;
mod migration;
mod id_alloc;
mod task_repo;
mod theme_store;
#[cfg(test)]
mod tests;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use store::{TaskStore, STORAGE_KEY};
pub use migration::{duplicate_ids, normalize, parse_document, RawEntry, RawRecord};
pub use id_alloc::IdAllocator;
pub use task_repo::TaskRepository;
pub use theme_store::{ThemeStore, THEME_KEY};
