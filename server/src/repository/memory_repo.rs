//! In-Memory Repository
//!
//! Process-local store backing the mock task API. Contents live until
//! the process exits.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{DomainError, DomainResult, Entity, Task, seed_tasks};
use super::traits::Repository;

/// Vec-backed implementation of Repository<T>
pub struct InMemoryRepository<T: Entity> {
    entities: RwLock<Vec<T>>,
}

/// Task store used by the server
pub type InMemoryTaskRepository = InMemoryRepository<Task>;

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::with_entities(Vec::new())
    }

    pub fn with_entities(entities: Vec<T>) -> Self {
        Self {
            entities: RwLock::new(entities),
        }
    }

    #[cfg(test)]
    pub async fn len(&self) -> usize {
        self.entities.read().await.len()
    }
}

impl<T: Entity> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository<Task> {
    /// Store pre-filled with the mock placeholder tasks
    pub fn seeded() -> Self {
        Self::with_entities(seed_tasks())
    }
}

#[async_trait]
impl<T: Entity + 'static> Repository<T> for InMemoryRepository<T> {
    async fn list(&self) -> DomainResult<Vec<T>> {
        Ok(self.entities.read().await.clone())
    }

    async fn append(&self, entity: T) -> DomainResult<T> {
        let mut entities = self.entities.write().await;

        if entities.iter().any(|e| e.id() == entity.id()) {
            return Err(DomainError::Conflict("duplicate id".to_string()));
        }

        entities.push(entity.clone());
        Ok(entity)
    }
}
