//! Repository Layer - Core Traits
//!
//! Defines the abstract interfaces for data access.
//! The task store only ever lists and appends.

use async_trait::async_trait;
use crate::domain::{Entity, DomainResult, Task};

/// Append-only collection of entities in insertion order
///
/// Generic over any Entity type.
/// All operations are async to support various backends.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// All entities, oldest first
    async fn list(&self) -> DomainResult<Vec<T>>;

    /// Append an entity and return the stored copy
    async fn append(&self, entity: T) -> DomainResult<T>;
}

/// Storage seam for the task handler
pub trait TaskRepository: Repository<Task> {}

impl<R: Repository<Task>> TaskRepository for R {}
