//! Repository Layer
//!
//! Data access abstractions and implementations.

mod traits;
mod memory_repo;


pub use traits::{Repository, TaskRepository};
pub use memory_repo::{InMemoryRepository, InMemoryTaskRepository};
