#![allow(dead_code)]

use chrono::NaiveDate;
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use staff_server::db::models::{EmployeeCreate, Role};
use staff_server::{Config, ServerState};

/// In-memory SQLite pool with migrations applied.
///
/// A single connection: every in-memory SQLite connection is its own
/// database, so a larger pool would scatter the data.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("open in-memory database");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("apply migrations");
    pool
}

pub async fn test_state() -> ServerState {
    ServerState::new(Config::with_overrides(":memory:", 0), test_pool().await)
}

/// A valid manager candidate with headroom in the profit-share cap.
pub fn manager(cpf: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: "Pedro".into(),
        last_name: "Alcantara".into(),
        cpf: cpf.into(),
        salary: 30000.0,
        profit_share: 200.0,
        max_profit_share: 1000.0,
        admission_date: NaiveDate::from_ymd_opt(2023, 3, 1).unwrap(),
        role: Role::Manager,
    }
}

/// A valid technician candidate, at the role's exact salary floor.
pub fn technician(cpf: &str) -> EmployeeCreate {
    EmployeeCreate {
        name: "Joana".into(),
        last_name: "Ribeiro".into(),
        cpf: cpf.into(),
        salary: 5000.0,
        profit_share: 0.0,
        max_profit_share: 500.0,
        admission_date: NaiveDate::from_ymd_opt(2024, 7, 15).unwrap(),
        role: Role::Technician,
    }
}
