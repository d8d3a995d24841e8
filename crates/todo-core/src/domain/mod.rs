//! Domain Layer
//!
//! Contains the task entity and the pure rules around it.
//! This layer has NO storage dependencies (except serde for serialization).

mod entity;
mod task;
mod filter;
mod stats;
mod theme;

pub use entity::{position_of, Entity, DomainError, DomainResult};
pub use task::{Task, TaskId};
pub use filter::{visible, visible_rows, Filter, RowKey};
pub use stats::TaskStats;
pub use theme::Theme;
