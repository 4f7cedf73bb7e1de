//! Server Implementation
//!
//! HTTP 服务器启动和管理

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use axum::{Router, middleware};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::{Config, Result, ServerState};
use crate::middleware::logging_middleware;

/// 构建带状态和中间件的完整路由
pub fn build_router(state: ServerState) -> Router {
    crate::api::build_app()
        .with_state(state)
        // Tower HTTP 中间件
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        // HTTP 请求日志中间件
        .layer(middleware::from_fn(logging_middleware))
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    /// 绑定监听端口
    ///
    /// `HTTP_PORT=0` 时由系统分配端口，日志输出实际地址。
    pub async fn bind(self) -> Result<BoundServer> {
        let addr = self.config.bind_addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        let local_addr = listener.local_addr()?;
        tracing::info!("Employee server listening on {}", local_addr);

        Ok(BoundServer {
            listener,
            local_addr,
            app: build_router(self.state),
            grace: Duration::from_millis(self.config.shutdown_timeout_ms),
        })
    }

    pub async fn run(self) -> Result<()> {
        self.bind().await?.serve().await
    }
}

/// 已绑定端口、尚未开始服务的服务器
pub struct BoundServer {
    listener: TcpListener,
    local_addr: SocketAddr,
    app: Router,
    grace: Duration,
}

impl BoundServer {
    /// 实际监听地址
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// 服务请求直到 Ctrl-C
    pub async fn serve(self) -> Result<()> {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown_signal(self.grace))
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// 优雅关闭超时后强制退出的进程退出码
pub const FORCED_EXIT_CODE: i32 = 1;

/// 等待 Ctrl-C，然后开始优雅关闭
///
/// 超过 `grace` 仍未结束的连接由进程退出强制关闭。
async fn shutdown_signal(grace: Duration) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down (grace period {:?})...", grace);

    tokio::spawn(async move {
        tokio::time::sleep(grace).await;
        tracing::warn!("Graceful shutdown timed out, exiting");
        std::process::exit(FORCED_EXIT_CODE);
    });
}
