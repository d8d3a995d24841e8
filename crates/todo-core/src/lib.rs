//! Todo Core
//!
//! Layered architecture:
//! - domain: Task record, filters, statistics and theme preference
//! - repository: Durable key-value store access, legacy migration and the task repository
//!
//! Nothing in here touches the browser; the UI crate supplies a `KeyValueStore`
//! backed by `localStorage`.

pub mod domain;
pub mod repository;

pub use domain::{
    visible, visible_rows, DomainError, DomainResult, Entity, Filter, RowKey, Task, TaskId,
    TaskStats, Theme,
};
pub use repository::{
    IdAllocator, KeyValueStore, MemoryStore, RawEntry, TaskRepository, TaskStore, ThemeStore,
    STORAGE_KEY, THEME_KEY,
};
