//! Employee Service
//!
//! Stateless pass-through over [`EmployeeRepository`]. Each operation makes
//! exactly one repository call and propagates repository errors unchanged.

use std::sync::Arc;

use shared::models::{Employee, EmployeeId};

use crate::db::repository::{EmployeeRepository, RepoResult};

#[derive(Clone)]
pub struct EmployeeService {
    repo: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    pub fn new(repo: Arc<dyn EmployeeRepository>) -> Self {
        Self { repo }
    }

    /// Persist a new or replacement record, returning the stored form (with id)
    pub async fn save_employee(&self, employee: Employee) -> RepoResult<Employee> {
        let saved = self.repo.save(employee).await?;
        tracing::debug!(id = ?saved.id, "Employee saved");
        Ok(saved)
    }

    /// All records, in whatever order the store returns them
    pub async fn get_all_employees(&self) -> RepoResult<Vec<Employee>> {
        self.repo.find_all().await
    }

    /// `None` when no record has this id
    pub async fn get_employee_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        self.repo.find_by_id(id).await
    }

    /// Same as save; the caller sets `employee.id` first
    pub async fn update_employee(&self, employee: Employee) -> RepoResult<Employee> {
        let updated = self.repo.save(employee).await?;
        tracing::debug!(id = ?updated.id, "Employee updated");
        Ok(updated)
    }

    /// Returns whether a record was actually removed
    pub async fn delete_employee(&self, id: EmployeeId) -> RepoResult<bool> {
        let removed = self.repo.delete_by_id(id).await?;
        tracing::debug!(id, removed, "Employee delete");
        Ok(removed)
    }

    /// Storage liveness probe
    pub async fn storage_ping(&self) -> RepoResult<()> {
        self.repo.ping().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::InMemoryEmployeeRepository;

    fn service() -> EmployeeService {
        EmployeeService::new(Arc::new(InMemoryEmployeeRepository::new()))
    }

    #[tokio::test]
    async fn test_save_then_get_round_trip() {
        let service = service();
        let saved = service.save_employee(Employee::named("Ann")).await.unwrap();
        let id = saved.id.expect("id assigned");

        let fetched = service.get_employee_by_id(id).await.unwrap();
        assert_eq!(fetched, Some(saved));
    }

    #[tokio::test]
    async fn test_get_all_empty() {
        assert!(service().get_all_employees().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_overwrites_all_fields() {
        let service = service();
        let mut saved = service.save_employee(Employee::named("Ann")).await.unwrap();
        saved.department = Some("Sales".into());
        service.update_employee(saved.clone()).await.unwrap();

        let replacement = Employee::named("Ann B").with_id(saved.id.unwrap());
        let updated = service.update_employee(replacement.clone()).await.unwrap();

        assert_eq!(updated, replacement);
        assert_eq!(updated.department, None);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_an_error() {
        let service = service();
        assert!(!service.delete_employee(99).await.unwrap());
    }
}
