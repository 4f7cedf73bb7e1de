//! API 路由模块
//!
//! - [`health`] - 健康检查
//! - [`employees`] - 员工 CRUD 接口

pub mod employees;
pub mod health;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::AppResult;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(employees::router())
}
