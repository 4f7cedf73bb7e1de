//! Repository Module
//!
//! Persistence contract for employees plus its storage adapters.

pub mod employee;
pub mod memory;

pub use employee::SqliteEmployeeRepository;
pub use memory::InMemoryEmployeeRepository;

use async_trait::async_trait;
use shared::models::{Employee, EmployeeId};
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<sqlx::Error> for RepoError {
    fn from(err: sqlx::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Employee persistence contract
///
/// - `save`: `id == None` inserts and lets the store assign an id;
///   `id == Some(n)` inserts or replaces row `n`. Returns the stored form.
/// - `delete_by_id`: `true` if a row was removed, `false` if none existed.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    async fn save(&self, employee: Employee) -> RepoResult<Employee>;
    async fn find_all(&self) -> RepoResult<Vec<Employee>>;
    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>>;
    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<bool>;

    /// Cheap liveness probe for health checks
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
