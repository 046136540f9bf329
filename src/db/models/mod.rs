//! Data models

pub mod employee;
pub mod serde_helpers;

pub use employee::{Adjustment, Employee, EmployeeCreate, Role, RoleChange};
