//! 统一错误处理
//!
//! 错误类型来自 `shared::error`，这里补充仓储错误到 [`AppError`] 的映射：
//!
//! | RepoError | AppError | HTTP |
//! |-----------|----------|------|
//! | NotFound | NotFound | 404 (空 body) |
//! | Database | DatabaseError | 500 |

pub use shared::error::{AppError, ErrorCode};

use crate::db::repository::RepoError;

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}
