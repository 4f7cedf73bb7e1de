use thiserror::Error;

use crate::utils::AppError;

/// 启动/运行期错误 (不对外暴露给 HTTP 客户端)
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("数据库错误: {0}")]
    Database(#[from] AppError),

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("内部服务器错误: {0}")]
    Internal(#[from] anyhow::Error),
}

/// 服务器 Result 类型别名
pub type Result<T> = std::result::Result<T, ServerError>;
