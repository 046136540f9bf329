//! Employee API handlers
//!
//! Thin layer: payload field validation happens here, the state-transition
//! rules live with the repository.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Adjustment, Employee, EmployeeCreate, RoleChange};
use crate::db::repository::employee;
use crate::utils::validation::{
    MAX_LAST_NAME_LEN, MAX_NAME_LEN, MIN_NAME_LEN, require_finite, validate_cpf,
    validate_min_salary, validate_text_range,
};
use crate::utils::{AppError, AppResult};

/// List all employees, terminated ones included
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee::find_all(&state.pool).await?;
    Ok(Json(employees))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    validate_create(&payload)?;

    let employee = employee::create(&state.pool, payload).await?;
    tracing::info!(id = employee.id, cpf = %employee.cpf, "Employee created");

    Ok((StatusCode::CREATED, Json(employee)))
}

/// Get employee by CPF
pub async fn find_by_cpf(
    State(state): State<ServerState>,
    Path(cpf): Path<String>,
) -> AppResult<Json<Employee>> {
    let employee = employee::find_by_cpf(&state.pool, &cpf)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Employee with cpf {cpf} not found")))?;
    Ok(Json(employee))
}

/// Terminate an employee (sets dismissal date, keeps the record)
pub async fn fire(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Employee>> {
    let employee = employee::fire(&state.pool, id).await?;
    tracing::info!(id, "Employee fired");
    Ok(Json(employee))
}

/// Physically delete an employee
pub async fn delete(State(state): State<ServerState>, Path(id): Path<i64>) -> AppResult<StatusCode> {
    employee::delete(&state.pool, id).await?;
    tracing::info!(id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Adjust salary by a delta (may be negative)
pub async fn raise_salary(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<Adjustment>,
) -> AppResult<Json<Employee>> {
    require_finite(payload.value, "value")?;
    let employee = employee::raise_salary(&state.pool, id, payload.value).await?;
    Ok(Json(employee))
}

/// Raise profit share, bounded by the per-employee cap
pub async fn raise_profit_share(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<Adjustment>,
) -> AppResult<Json<Employee>> {
    require_finite(payload.value, "value")?;
    let employee = employee::raise_profit_share(&state.pool, id, payload.value).await?;
    Ok(Json(employee))
}

/// Lower profit share, bounded below by zero
pub async fn lower_profit_share(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<Adjustment>,
) -> AppResult<Json<Employee>> {
    require_finite(payload.value, "value")?;
    let employee = employee::lower_profit_share(&state.pool, id, payload.value).await?;
    Ok(Json(employee))
}

/// Move the employee to another role
pub async fn change_role(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Json(payload): Json<RoleChange>,
) -> AppResult<Json<Employee>> {
    let employee = employee::change_role(&state.pool, id, payload.role).await?;
    tracing::info!(id, role = %payload.role, "Employee role changed");
    Ok(Json(employee))
}

fn validate_create(payload: &EmployeeCreate) -> AppResult<()> {
    validate_text_range(&payload.name, "name", MIN_NAME_LEN, MAX_NAME_LEN)?;
    validate_text_range(&payload.last_name, "lastName", MIN_NAME_LEN, MAX_LAST_NAME_LEN)?;
    validate_cpf(&payload.cpf)?;
    require_finite(payload.salary, "salary")?;
    validate_min_salary(payload.salary)?;
    require_finite(payload.profit_share, "profitShare")?;
    require_finite(payload.max_profit_share, "maxProfitShare")?;
    Ok(())
}
