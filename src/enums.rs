//! Public enum types used throughout the crate
//!
//! Operation kinds, backend identities and row shapes.

use std::fmt;

use serde::Deserialize;

use crate::error::RunnerError;

/// Operation requested by the `op` field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Single inline statement
    Sql,
    /// Single statement read from a file
    File,
    /// Inline script of one or more statements, no binding
    Exec,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Sql => "sql",
            Operation::File => "file",
            Operation::Exec => "exec",
        }
    }

    /// Parse the raw `op` field. Unrecognized values are kept verbatim in the error.
    pub fn parse(op: Option<&str>) -> Result<Self, RunnerError> {
        match op {
            Some("sql") => Ok(Operation::Sql),
            Some("file") => Ok(Operation::File),
            Some("exec") => Ok(Operation::Exec),
            Some(other) => Err(RunnerError::UnknownOperation(other.to_string())),
            None => Err(RunnerError::UnknownOperation("<missing>".to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which driver implementation is active for this invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendKind {
    /// Built with integrated page-level encryption; raises its own wrong-key errors
    EncryptionNative,
    /// Generic driver keyed via pragma; needs a post-open cipher check
    StandardWithCipherPragma,
}

impl BackendKind {
    /// Whether the key must be verified through `cipher_version` after keying
    pub fn verifies_key(&self) -> bool {
        matches!(self, BackendKind::StandardWithCipherPragma)
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BackendKind::EncryptionNative => "encryption-native",
            BackendKind::StandardWithCipherPragma => "standard-with-cipher-pragma",
        })
    }
}

/// Resolver preference from `[driver] backend`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackendPreference {
    /// Native first, then standard
    #[default]
    Auto,
    Native,
    Standard,
}

impl BackendPreference {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "auto" => Some(BackendPreference::Auto),
            "native" => Some(BackendPreference::Native),
            "standard" => Some(BackendPreference::Standard),
            _ => None,
        }
    }
}

/// Shape of each emitted row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowMode {
    /// `{ column: value, ... }`
    #[default]
    Object,
    /// `[value, ...]` in column order
    Array,
}
