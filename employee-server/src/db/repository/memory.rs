//! Employee Repository (in-memory)
//!
//! Lock-free concurrent map keyed by id. Data lives only as long as the process.

use super::{EmployeeRepository, RepoResult};
use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::{Employee, EmployeeId};
use std::sync::atomic::{AtomicI64, Ordering};

#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    rows: DashMap<EmployeeId, Employee>,
    /// Highest id handed out or stored so far
    last_id: AtomicI64,
}

impl InMemoryEmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn save(&self, mut employee: Employee) -> RepoResult<Employee> {
        let id = match employee.id {
            Some(id) => {
                self.last_id.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => self.last_id.fetch_add(1, Ordering::SeqCst) + 1,
        };
        employee.id = Some(id);
        self.rows.insert(id, employee.clone());
        Ok(employee)
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let mut employees: Vec<Employee> =
            self.rows.iter().map(|entry| entry.value().clone()).collect();
        employees.sort_by_key(|e| e.id);
        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        Ok(self.rows.get(&id).map(|entry| entry.value().clone()))
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<bool> {
        Ok(self.rows.remove(&id).is_some())
    }
}
