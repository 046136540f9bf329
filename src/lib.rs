//! Staff Server - employee records HTTP service
//!
//! # Module structure
//!
//! ```text
//! src/
//! ├── core/   # Config, ServerState, Server
//! ├── api/    # HTTP routes and handlers
//! ├── db/     # SQLite pool, models, repository
//! └── utils/  # Errors, logging, validation, money, ids
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::logger::init_logger;
pub use crate::utils::{AppError, AppResult};
