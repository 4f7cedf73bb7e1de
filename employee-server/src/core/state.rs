use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;

use crate::core::{Config, Result, StorageBackend};
use crate::db::DbService;
use crate::db::repository::{
    EmployeeRepository, InMemoryEmployeeRepository, SqliteEmployeeRepository,
};
use crate::services::EmployeeService;

/// 服务器状态 - 持有所有服务的共享引用
///
/// 使用 Arc 实现浅拷贝，每个请求 clone 一份的成本极低。
/// 所有可变数据都在存储层 (SQLite / 内存表)，这里不持有可变状态。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | employees | EmployeeService | 员工服务 |
/// | started_at | Instant | 启动时间 (health 使用) |
#[derive(Clone)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 员工服务
    pub employees: EmployeeService,
    /// 启动时间
    pub started_at: Instant,
}

impl ServerState {
    /// 使用给定仓储构造状态
    ///
    /// 测试中用来注入 [`InMemoryEmployeeRepository`]
    pub fn with_repository(config: Config, repo: Arc<dyn EmployeeRepository>) -> Self {
        Self {
            config,
            employees: EmployeeService::new(repo),
            started_at: Instant::now(),
        }
    }

    /// 初始化服务器状态
    ///
    /// 按顺序初始化：
    /// 1. 工作目录 (仅 SQLite 后端)
    /// 2. 数据库连接池 + 迁移
    /// 3. 仓储与服务
    pub async fn initialize(config: &Config) -> Result<Self> {
        let repo: Arc<dyn EmployeeRepository> = match config.storage {
            StorageBackend::Memory => {
                tracing::info!("Using in-memory employee storage");
                Arc::new(InMemoryEmployeeRepository::new())
            }
            StorageBackend::Sqlite => {
                std::fs::create_dir_all(&config.work_dir)
                    .with_context(|| format!("Failed to create work dir {}", config.work_dir))?;
                let db = DbService::new(&config.database_path).await?;
                tracing::info!(path = %config.database_path, "Using SQLite employee storage");
                Arc::new(SqliteEmployeeRepository::new(db.pool))
            }
        };

        Ok(Self::with_repository(config.clone(), repo))
    }

    /// 运行时间 (秒)
    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
