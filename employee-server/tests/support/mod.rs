//! Shared helpers for driving the router in-process
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, Bytes};
use employee_server::{
    Config, Employee, EmployeeId, EmployeeRepository, InMemoryEmployeeRepository, RepoError,
    RepoResult, ServerState, build_router,
};
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub fn memory_app() -> Router {
    let state = ServerState::with_repository(
        Config::in_memory(),
        Arc::new(InMemoryEmployeeRepository::new()),
    );
    build_router(state)
}

pub fn scripted_app(repo: Arc<ScriptedRepository>) -> Router {
    build_router(ServerState::with_repository(Config::in_memory(), repo))
}

/// Low-level cause carried by [`ScriptedRepository`] failures
pub const STORAGE_CAUSE: &str = "disk I/O error at page 12";

/// In-memory repository whose failure modes can be switched on mid-test
pub struct ScriptedRepository {
    inner: InMemoryEmployeeRepository,
    failing: AtomicBool,
    vanishing_deletes: AtomicBool,
}

impl ScriptedRepository {
    pub fn new() -> Self {
        Self {
            inner: InMemoryEmployeeRepository::new(),
            failing: AtomicBool::new(false),
            vanishing_deletes: AtomicBool::new(false),
        }
    }

    /// Every call, ping included, fails with a database error
    pub fn fail_everything(&self) {
        self.failing.store(true, Ordering::SeqCst);
    }

    /// Deletes report that nothing was removed, as if another request got there first
    pub fn lose_delete_races(&self) {
        self.vanishing_deletes.store(true, Ordering::SeqCst);
    }

    fn check(&self) -> RepoResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(RepoError::Database(STORAGE_CAUSE.into()));
        }
        Ok(())
    }
}

impl Default for ScriptedRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeRepository for ScriptedRepository {
    async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        self.check()?;
        self.inner.save(employee).await
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.check()?;
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.check()?;
        self.inner.find_by_id(id).await
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<bool> {
        self.check()?;
        if self.vanishing_deletes.load(Ordering::SeqCst) {
            return Ok(false);
        }
        self.inner.delete_by_id(id).await
    }

    async fn ping(&self) -> RepoResult<()> {
        self.check()
    }
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    let response = app.clone().oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let body = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    TestResponse { status, body }
}
