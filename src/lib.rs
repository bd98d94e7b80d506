// src/lib.rs
//! encrypted-db-runner: single-shot executor for SQLCipher databases
//!
//! Reads one JSON request, runs it against an encrypted SQLite file and
//! produces exactly one JSON response. Built to be spawned by a host that
//! does not link a database driver itself.
//!
//! Features:
//! - Encryption-native / pragma-keyed backend fallback
//! - Key escaping and post-open key verification
//! - Positional or named parameter binding
//! - Uniform `{ ok, rows | error }` envelope

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod db;
pub mod enums;
pub mod request;
pub mod response;
pub mod runner;

pub mod error;

// Re-export everything callers need at the crate root
pub use aliases::DbKey;
pub use config::load as load_config;
pub use crate::core::{is_result_producing, Outcome, Params, Result as RunnerResult};
pub use db::{escape_key, DatabaseHandle};
pub use enums::{BackendKind, BackendPreference, Operation, RowMode};
pub use error::RunnerError;
pub use request::Request;
pub use response::Response;
pub use runner::Runner;
