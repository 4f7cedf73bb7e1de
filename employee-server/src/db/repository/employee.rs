//! Employee Repository (SQLite)

use super::{EmployeeRepository, RepoError, RepoResult};
use async_trait::async_trait;
use shared::models::{Employee, EmployeeId};
use sqlx::SqlitePool;

const SELECT_SQL: &str = "SELECT id, name, email, department, position FROM employee";

#[derive(Clone)]
pub struct SqliteEmployeeRepository {
    pool: SqlitePool,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeRepository for SqliteEmployeeRepository {
    async fn save(&self, employee: Employee) -> RepoResult<Employee> {
        let Employee {
            id,
            name,
            email,
            department,
            position,
        } = employee;

        let id = match id {
            None => {
                sqlx::query_scalar::<_, i64>(
                    "INSERT INTO employee (name, email, department, position) VALUES (?, ?, ?, ?) RETURNING id",
                )
                .bind(name)
                .bind(email)
                .bind(department)
                .bind(position)
                .fetch_one(&self.pool)
                .await?
            }
            Some(id) => {
                sqlx::query(
                    "INSERT INTO employee (id, name, email, department, position) VALUES (?1, ?2, ?3, ?4, ?5)
                     ON CONFLICT(id) DO UPDATE SET
                        name = excluded.name,
                        email = excluded.email,
                        department = excluded.department,
                        position = excluded.position",
                )
                .bind(id)
                .bind(name)
                .bind(email)
                .bind(department)
                .bind(position)
                .execute(&self.pool)
                .await?;
                id
            }
        };

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Employee {id} vanished after save")))
    }

    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(&format!("{SELECT_SQL} ORDER BY id"))
            .fetch_all(&self.pool)
            .await?;
        Ok(employees)
    }

    async fn find_by_id(&self, id: EmployeeId) -> RepoResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(&format!("{SELECT_SQL} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(employee)
    }

    async fn delete_by_id(&self, id: EmployeeId) -> RepoResult<bool> {
        let rows = sqlx::query("DELETE FROM employee WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(rows.rows_affected() > 0)
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
