//! Employee API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use shared::models::{Employee, EmployeeId};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Create an employee; any id in the body is discarded
pub async fn create(
    State(state): State<ServerState>,
    Json(mut payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    payload.id = None;
    let employee = state.employees.save_employee(payload).await?;
    tracing::info!(id = ?employee.id, "Employee created");
    Ok(Json(employee))
}

/// List all employees
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = state.employees.get_all_employees().await?;
    Ok(Json(employees))
}

/// Get employee by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<EmployeeId>,
) -> AppResult<Json<Employee>> {
    let employee = state
        .employees
        .get_employee_by_id(id)
        .await?
        .ok_or_else(|| AppError::employee_not_found(id))?;
    Ok(Json(employee))
}

/// Replace an employee; the path id wins over the body id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<EmployeeId>,
    Json(mut payload): Json<Employee>,
) -> AppResult<Json<Employee>> {
    if state.employees.get_employee_by_id(id).await?.is_none() {
        return Err(AppError::employee_not_found(id));
    }

    payload.id = Some(id);
    let employee = state.employees.update_employee(payload).await?;
    tracing::info!(id, "Employee updated");
    Ok(Json(employee))
}

/// Delete an employee
///
/// 404 when the lookup misses, or when the row disappeared between the
/// lookup and the delete.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<EmployeeId>,
) -> AppResult<StatusCode> {
    if state.employees.get_employee_by_id(id).await?.is_none() {
        return Err(AppError::employee_not_found(id));
    }

    if !state.employees.delete_employee(id).await? {
        return Err(AppError::employee_not_found(id));
    }

    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::OK)
}
