//! Shared types for the employee service
//!
//! Wire/storage models and the unified error system used by the server and
//! any client that talks to it.

pub mod error;
pub mod models;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
pub use models::{Employee, EmployeeId};
