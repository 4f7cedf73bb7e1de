use std::path::PathBuf;

/// 存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// SQLite 文件 (默认)
    Sqlite,
    /// 进程内存 (重启即丢失)
    Memory,
}

impl StorageBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "sqlite" => Some(Self::Sqlite),
            "memory" => Some(Self::Memory),
            _ => None,
        }
    }

    /// 解析 STORAGE 取值，无法识别时回退到 SQLite 并返回原始值
    fn resolve(value: Option<String>) -> (Self, Option<String>) {
        match value {
            Some(raw) => match Self::parse(&raw) {
                Some(backend) => (backend, None),
                None => (Self::Sqlite, Some(raw)),
            },
            None => (Self::Sqlite, None),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_HOST | 0.0.0.0 | 监听地址 |
/// | HTTP_PORT | 8080 | HTTP 服务端口 |
/// | WORK_DIR | ./data | 工作目录 (数据库、日志) |
/// | DATABASE_PATH | $WORK_DIR/employees.db | SQLite 文件 |
/// | STORAGE | sqlite | sqlite \| memory |
/// | ENVIRONMENT | development | 运行环境 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | (未设置) | 日志文件目录 |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
///
/// # 示例
///
/// ```ignore
/// STORAGE=memory HTTP_PORT=9000 cargo run -p employee-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 监听地址
    pub http_host: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 工作目录
    pub work_dir: String,
    /// SQLite 数据库文件路径
    pub database_path: String,
    /// 存储后端
    pub storage: StorageBackend,
    /// 无法识别的 STORAGE 原始值 (已回退到 SQLite)
    pub unrecognized_storage: Option<String>,
    /// 运行环境: development | staging | production
    pub environment: String,
    /// 日志级别
    pub log_level: String,
    /// 日志目录 (可选)
    pub log_dir: Option<String>,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into());
        let database_path = std::env::var("DATABASE_PATH").unwrap_or_else(|_| {
            PathBuf::from(&work_dir)
                .join("employees.db")
                .to_string_lossy()
                .into_owned()
        });
        let (storage, unrecognized_storage) =
            StorageBackend::resolve(std::env::var("STORAGE").ok());

        Self {
            http_host: std::env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            work_dir,
            database_path,
            storage,
            unrecognized_storage,
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// 使用自定义值覆盖部分配置
    ///
    /// 常用于测试场景
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.database_path = PathBuf::from(&config.work_dir)
            .join("employees.db")
            .to_string_lossy()
            .into_owned();
        config.http_port = http_port;
        config
    }

    /// 内存存储配置 (测试用)
    pub fn in_memory() -> Self {
        let mut config = Self::from_env();
        config.storage = StorageBackend::Memory;
        config
    }

    /// 监听地址 "host:port"
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.http_host, self.http_port)
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 输出加载配置时的回退警告
    ///
    /// 需在日志初始化之后调用。
    pub fn log_fallbacks(&self) {
        if let Some(value) = &self.unrecognized_storage {
            tracing::warn!("Unknown STORAGE '{}', falling back to sqlite", value);
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
