/// Server configuration
///
/// Every item can be overridden through an environment variable:
///
/// | Environment variable | Default | Meaning |
/// |----------------------|---------|---------|
/// | HTTP_PORT | 8080 | HTTP listen port |
/// | DATABASE_PATH | data/staff.db | SQLite database file |
/// | LOG_LEVEL | info | tracing level filter |
/// | LOG_DIR | (unset) | directory for daily-rolling log files |
/// | ENVIRONMENT | development | development \| staging \| production |
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Path to the SQLite database file
    pub database_path: String,
    /// Log level filter
    pub log_level: String,
    /// Optional directory for file log output
    pub log_dir: Option<String>,
    /// Runtime environment name
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "data/staff.db".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    /// Override the database path and port, keeping everything else from the
    /// environment. Used by tests.
    pub fn with_overrides(database_path: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.database_path = database_path.into();
        config.http_port = http_port;
        config
    }
}
