//! Employee repository
//!
//! CRUD plus the state-transition rules. Every mutating operation re-reads
//! the record, validates, performs a single UPDATE and returns the stored
//! row, so a failed check leaves the record untouched. There is no
//! cross-request locking: concurrent read-modify-write on the same id can
//! lose an update, matching the store's single-statement atomicity.

use chrono::Local;
use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Employee, EmployeeCreate, Role};
use crate::utils::{ids, money};

const EMPLOYEE_SELECT: &str = "SELECT id, name, last_name, cpf, salary, profit_share, \
     max_profit_share, admission_date, dismissal_date, role FROM employee";

/// All employees, terminated included, in insertion order.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, Employee>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn find_by_cpf(pool: &SqlitePool, cpf: &str) -> RepoResult<Option<Employee>> {
    let sql = format!("{EMPLOYEE_SELECT} WHERE cpf = ?");
    let row = sqlx::query_as::<_, Employee>(&sql)
        .bind(cpf)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Create a new employee.
///
/// The CPF uniqueness check runs before any rule check, so a duplicate CPF
/// is reported as a duplicate even when the candidate also violates a rule.
pub async fn create(pool: &SqlitePool, data: EmployeeCreate) -> RepoResult<Employee> {
    if find_by_cpf(pool, &data.cpf).await?.is_some() {
        return Err(RepoError::Duplicate(format!(
            "Employee with cpf {} already exists",
            data.cpf
        )));
    }
    ensure_salary_meets_minimum(data.salary, data.role)?;
    ensure_share_below_cap(data.profit_share, data.max_profit_share)?;

    let id = ids::snowflake_id();
    sqlx::query(
        "INSERT INTO employee (id, name, last_name, cpf, salary, profit_share, \
         max_profit_share, admission_date, dismissal_date, role) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, NULL, ?9)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.last_name)
    .bind(&data.cpf)
    .bind(data.salary)
    .bind(data.profit_share)
    .bind(data.max_profit_share)
    .bind(data.admission_date)
    .bind(data.role)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create employee".into()))
}

/// Terminate an employee: set dismissal_date to today and keep the record.
///
/// Firing an already-fired employee overwrites the dismissal date with
/// today again; the original system had no "already fired" error and this
/// behavior is kept.
pub async fn fire(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    let employee = require(pool, id).await?;
    let today = Local::now().date_naive();

    sqlx::query("UPDATE employee SET dismissal_date = ?1 WHERE id = ?2")
        .bind(today)
        .bind(employee.id)
        .execute(pool)
        .await?;

    require(pool, id).await
}

/// Physically remove the record.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    require(pool, id).await?;
    sqlx::query("DELETE FROM employee WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Adjust salary by `value` (may be negative).
///
/// No role-minimum re-check happens here; a negative adjustment can push
/// the salary below the role floor. The original system behaves the same
/// way, so the gap is kept rather than silently fixed.
pub async fn raise_salary(pool: &SqlitePool, id: i64, value: f64) -> RepoResult<Employee> {
    let employee = require(pool, id).await?;
    let new_salary = money::add(employee.salary, value);

    sqlx::query("UPDATE employee SET salary = ?1 WHERE id = ?2")
        .bind(new_salary)
        .bind(employee.id)
        .execute(pool)
        .await?;

    require(pool, id).await
}

/// Raise profit share by `value`, rejecting results at or above the cap.
pub async fn raise_profit_share(pool: &SqlitePool, id: i64, value: f64) -> RepoResult<Employee> {
    let employee = require(pool, id).await?;
    let new_share = money::add(employee.profit_share, value);
    ensure_share_below_cap(new_share, employee.max_profit_share)?;

    persist_profit_share(pool, employee.id, new_share).await?;
    require(pool, id).await
}

/// Lower profit share by `value`, rejecting results below zero.
pub async fn lower_profit_share(pool: &SqlitePool, id: i64, value: f64) -> RepoResult<Employee> {
    let employee = require(pool, id).await?;
    let new_share = money::sub(employee.profit_share, value);
    ensure_share_non_negative(new_share)?;

    persist_profit_share(pool, employee.id, new_share).await?;
    require(pool, id).await
}

/// Move the employee to `new_role`, provided the current salary meets the
/// new role's minimum. No transition graph restricts which role can follow
/// which.
pub async fn change_role(pool: &SqlitePool, id: i64, new_role: Role) -> RepoResult<Employee> {
    let employee = require(pool, id).await?;
    ensure_salary_meets_minimum(employee.salary, new_role)?;

    sqlx::query("UPDATE employee SET role = ?1 WHERE id = ?2")
        .bind(new_role)
        .bind(employee.id)
        .execute(pool)
        .await?;

    require(pool, id).await
}

async fn require(pool: &SqlitePool, id: i64) -> RepoResult<Employee> {
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Employee with id {id} not found")))
}

async fn persist_profit_share(pool: &SqlitePool, id: i64, share: f64) -> RepoResult<()> {
    sqlx::query("UPDATE employee SET profit_share = ?1 WHERE id = ?2")
        .bind(share)
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

// ── Rule checks ─────────────────────────────────────────────────────

fn ensure_salary_meets_minimum(salary: f64, role: Role) -> RepoResult<()> {
    let minimum = role.minimum_salary();
    if salary < minimum {
        return Err(RepoError::SalaryBelowRoleMinimum { role, minimum });
    }
    Ok(())
}

/// The cap is exclusive: a share equal to the cap is already too much.
fn ensure_share_below_cap(share: f64, cap: f64) -> RepoResult<()> {
    if share >= cap {
        return Err(RepoError::ProfitShareAboveCap { cap });
    }
    Ok(())
}

fn ensure_share_non_negative(share: f64) -> RepoResult<()> {
    if share < 0.0 {
        return Err(RepoError::ProfitShareBelowZero);
    }
    Ok(())
}
