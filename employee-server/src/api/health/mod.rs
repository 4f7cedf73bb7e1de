//! 健康检查路由
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /health | GET | 简单健康检查 |
//! | /health/detailed | GET | 含存储探测的详细检查 |
//!
//! ```json
//! { "status": "ok", "service": "employee-server", "version": "0.1.0" }
//! ```

use axum::{Json, Router, extract::State, http::StatusCode, routing::get};
use serde::Serialize;
use std::time::Instant;

use crate::core::ServerState;

/// 存储探测失败时对外返回的固定信息，具体原因只写日志
const STORAGE_UNAVAILABLE: &str = "Storage unavailable";

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/health", get(health))
        .route("/health/detailed", get(detailed_health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    service: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
pub struct DetailedHealthResponse {
    status: &'static str,
    version: &'static str,
    /// 运行时间 (秒)
    uptime_seconds: u64,
    storage: CheckResult,
}

/// 单项检查结果
#[derive(Serialize)]
pub struct CheckResult {
    status: &'static str,
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'static str>,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "employee-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

async fn detailed_health(
    State(state): State<ServerState>,
) -> (StatusCode, Json<DetailedHealthResponse>) {
    let start = Instant::now();
    let storage = match state.employees.storage_ping().await {
        Ok(()) => CheckResult {
            status: "ok",
            latency_ms: start.elapsed().as_millis() as u64,
            error: None,
        },
        Err(e) => {
            tracing::error!(error = %e, "Storage health check failed");
            CheckResult {
                status: "error",
                latency_ms: start.elapsed().as_millis() as u64,
                error: Some(STORAGE_UNAVAILABLE),
            }
        }
    };

    let (status_code, status) = if storage.error.is_none() {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        status_code,
        Json(DetailedHealthResponse {
            status,
            version: env!("CARGO_PKG_VERSION"),
            uptime_seconds: state.uptime_seconds(),
            storage,
        }),
    )
}
