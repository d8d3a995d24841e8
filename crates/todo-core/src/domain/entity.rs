//! Domain Layer - Core Entity Trait
//!
//! This trait defines the basic contract for all domain entities.

/// Core trait for all domain entities
pub trait Entity: Sized + Clone {
    /// The type of the entity's unique identifier
    type Id: Copy + Eq + std::hash::Hash;

    /// Returns the entity's unique identifier
    fn id(&self) -> Self::Id;
}

/// Position of the first entity carrying `id`, in collection order
pub fn position_of<T: Entity>(entities: &[T], id: T::Id) -> Option<usize> {
    entities.iter().position(|e| e.id() == id)
}

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// Only `Validation` and `IdsExhausted` ever reach a UI caller. Store failures are recovered at the
/// store boundary: logged, then treated as an empty read or a lost write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    #[error("invalid input: {0}")]
    Validation(String),
    #[error("store read failed: {0}")]
    StoreRead(String),
    #[error("store write failed: {0}")]
    StoreWrite(String),
    #[error("no task ids left after {0}")]
    IdsExhausted(u32),
}
