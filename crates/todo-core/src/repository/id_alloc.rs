//! Identity Allocator
//!
//! Hands out task ids above the largest id seen at initialization. Storage is
//! not re-scanned per allocation, so another tab writing the same key can
//! still produce collisions.

use crate::domain::{DomainError, DomainResult, Task, TaskId};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdAllocator {
    counter: TaskId,
}

impl IdAllocator {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        let mut ids = Self::default();
        ids.initialize(tasks);
        ids
    }

    /// Reset the counter to the maximum id in `tasks` (0 when empty)
    pub fn initialize(&mut self, tasks: &[Task]) {
        self.counter = tasks.iter().map(|t| t.id).max().unwrap_or(0);
    }

    /// Pre-increment and return the new id.
    ///
    /// Stored data may already hold `TaskId::MAX`; the counter then stays put
    /// and allocation fails instead of wrapping to 0.
    pub fn next_id(&mut self) -> DomainResult<TaskId> {
        let next = self
            .counter
            .checked_add(1)
            .ok_or(DomainError::IdsExhausted(self.counter))?;
        self.counter = next;
        Ok(next)
    }

    /// Last id handed out (or observed at initialization)
    pub fn current(&self) -> TaskId {
        self.counter
    }
}
