//! Employee model

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::serde_helpers;

/// Employee role tier.
///
/// Stored and serialized as the upper-case variant name (`"OWNER"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Owner,
    Director,
    Manager,
    Specialist,
    Technician,
}

impl Role {
    /// Lowest salary permissible for this role tier.
    ///
    /// Exhaustive by construction: adding a role without a minimum is a
    /// compile error.
    pub fn minimum_salary(self) -> f64 {
        match self {
            Role::Owner => 35000.0,
            Role::Director => 30000.0,
            Role::Manager => 10000.0,
            Role::Specialist => 8000.0,
            Role::Technician => 5000.0,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Owner => "Owner",
            Role::Director => "Director",
            Role::Manager => "Manager",
            Role::Specialist => "Specialist",
            Role::Technician => "Technician",
        };
        f.write_str(name)
    }
}

/// Employee record, matching the `employee` table.
///
/// `id` and `dismissal_date` are server-assigned and read-only on input;
/// dates cross the wire as `dd/MM/yyyy` strings.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub last_name: String,
    pub cpf: String,
    pub salary: f64,
    pub profit_share: f64,
    pub max_profit_share: f64,
    #[serde(with = "serde_helpers::date_dmy")]
    pub admission_date: NaiveDate,
    #[serde(default, with = "serde_helpers::option_date_dmy")]
    pub dismissal_date: Option<NaiveDate>,
    pub role: Role,
}

/// Create employee payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub name: String,
    pub last_name: String,
    pub cpf: String,
    pub salary: f64,
    pub profit_share: f64,
    pub max_profit_share: f64,
    #[serde(with = "serde_helpers::date_dmy")]
    pub admission_date: NaiveDate,
    pub role: Role,
}

/// Numeric adjustment payload for the salary / profit share endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Adjustment {
    pub value: f64,
}

/// Role change payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleChange {
    pub role: Role,
}
