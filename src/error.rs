//! Public error type for the entire crate

use rusqlite::ErrorCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RunnerError {
    #[error("Invalid request JSON: {0}")]
    InputParse(#[from] serde_json::Error),

    #[error("No encryption-capable SQLite driver available: {0}")]
    DriverUnavailable(String),

    #[error("No encryption key supplied")]
    MissingKey,

    #[error("Invalid key or database not encrypted: {0}")]
    InvalidKeyOrNotEncrypted(String),

    #[error("Failed to prepare statement: {0}")]
    Prepare(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Execution failed: {0}")]
    Execution(String),

    #[error("Unknown op: {0}")]
    UnknownOperation(String),

    #[error("Missing field `{field}` for op `{op}`")]
    MissingField { op: &'static str, field: &'static str },

    #[error("Config error: {0}")]
    Config(String),
}

impl RunnerError {
    /// Classify a prepare-time failure. A wrong SQLCipher key shows up here as
    /// "file is not a database" on the first statement that touches a page.
    pub fn prepare(err: rusqlite::Error) -> Self {
        if is_not_a_database(&err) {
            return RunnerError::InvalidKeyOrNotEncrypted(err.to_string());
        }
        RunnerError::Prepare(err.to_string())
    }
}

impl From<rusqlite::Error> for RunnerError {
    fn from(err: rusqlite::Error) -> Self {
        if is_not_a_database(&err) {
            RunnerError::InvalidKeyOrNotEncrypted(err.to_string())
        } else {
            RunnerError::Execution(err.to_string())
        }
    }
}

fn is_not_a_database(err: &rusqlite::Error) -> bool {
    err.sqlite_error_code() == Some(ErrorCode::NotADatabase)
}
