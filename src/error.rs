use std::sync::LazyLock;

pub use masterror::{AppError, AppResult};
use regex::Regex;

/// Create file read error
pub fn file_read_error(path: &str, source: std::io::Error) -> AppError {
    AppError::internal(format!("Failed to read file '{}': {}", path, source))
}

/// Create DDL parse error with optional position info
pub fn ddl_parse_error(message: impl Into<String>) -> AppError {
    let msg = message.into();
    AppError::bad_request(format_sql_error("DDL parse error", &msg))
}

/// Create schema catalog error
pub fn catalog_error(message: impl Into<String>) -> AppError {
    AppError::service(message.into())
}

/// Create config error
pub fn config_error(message: impl Into<String>) -> AppError {
    AppError::bad_request(message.into())
}

// sqlparser reports positions as "... at Line: X, Column Y"
static POSITION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Line: (\d+), Column:? (\d+)").expect("valid regex"));

/// Format SQL error with position highlighting
fn format_sql_error(prefix: &str, message: &str) -> String {
    if let Some(caps) = POSITION.captures(message) {
        format!(
            "{} at line {}, column {}:\n  {}",
            prefix, &caps[1], &caps[2], message
        )
    } else {
        format!("{}:\n  {}", prefix, message)
    }
}
