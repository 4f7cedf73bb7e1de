//! Employee Server - 员工记录 CRUD 服务
//!
//! # 架构概述
//!
//! 三层直通：HTTP handler → [`EmployeeService`] → [`EmployeeRepository`]。
//! 仓储有两个实现：SQLite (默认) 与进程内存。
//!
//! # 模块结构
//!
//! ```text
//! employee-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── services/      # 用例服务
//! ├── db/            # 数据库连接与仓储
//! ├── middleware/    # 请求日志
//! └── utils/         # 错误、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState, StorageBackend, build_router};
pub use db::repository::{
    EmployeeRepository, InMemoryEmployeeRepository, RepoError, RepoResult,
    SqliteEmployeeRepository,
};
pub use services::EmployeeService;
pub use shared::models::{Employee, EmployeeId};
pub use utils::{AppError, AppResult};

// Re-export logger function
pub use utils::logger::init_logger_with_file;

/// 按配置初始化日志 (生产环境输出 JSON)
pub fn setup_environment(config: &Config) {
    init_logger_with_file(
        Some(config.log_level.as_str()),
        Some(config.is_production()),
        config.log_dir.as_deref(),
    );
    config.log_fallbacks();
}
