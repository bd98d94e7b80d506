//! Driver resolution
//!
//! Both backends sit on the same linked SQLite library. The native one is only
//! loadable when that library is SQLCipher (it answers `cipher_version` on a
//! throwaway in-memory handle); the standard one needs nothing but SQLite and
//! relies on a post-open `cipher_version` check to catch a rejected key.

use std::path::Path;

use rusqlite::{Connection, OptionalExtension};
use tracing::debug;

use crate::core::Result;
use crate::enums::{BackendKind, BackendPreference};
use crate::error::RunnerError;

/// Capability set shared by every driver implementation
pub trait Backend {
    fn kind(&self) -> BackendKind;

    /// Load attempt. Must not touch any database file.
    fn is_available(&self) -> bool;

    fn open(&self, path: &Path) -> Result<Connection> {
        Ok(Connection::open(path)?)
    }

    /// Supply the already-escaped key through the `key` directive
    fn apply_key(&self, conn: &Connection, escaped_key: &str) -> Result<()> {
        conn.execute_batch(&format!("PRAGMA key = \"{escaped_key}\";"))?;
        Ok(())
    }

    /// Confirm the key was accepted. Backends that report bad keys themselves skip this.
    fn verify_key(&self, _conn: &Connection) -> Result<()> {
        Ok(())
    }
}

/// Driver built with integrated page-level encryption (SQLCipher)
#[derive(Debug, Default, Clone, Copy)]
pub struct EncryptionNativeBackend;

impl Backend for EncryptionNativeBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::EncryptionNative
    }

    fn is_available(&self) -> bool {
        Connection::open_in_memory()
            .map(|conn| check_cipher_version(cipher_version(&conn)).is_ok())
            .unwrap_or(false)
    }
}

/// Generic SQLite driver keyed via pragma
#[derive(Debug, Default, Clone, Copy)]
pub struct StandardBackend;

impl Backend for StandardBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::StandardWithCipherPragma
    }

    fn is_available(&self) -> bool {
        Connection::open_in_memory().is_ok()
    }

    fn verify_key(&self, conn: &Connection) -> Result<()> {
        check_cipher_version(cipher_version(conn))
    }
}

/// `PRAGMA cipher_version` as reported by the handle, if any
pub fn cipher_version(conn: &Connection) -> Option<String> {
    conn.pragma_query_value(None, "cipher_version", |row| row.get::<_, String>(0))
        .optional()
        .ok()
        .flatten()
}

/// An absent or blank cipher version means the key was not accepted
pub fn check_cipher_version(version: Option<String>) -> Result<()> {
    match version.filter(|v| !v.trim().is_empty()) {
        Some(version) => {
            debug!(cipher_version = %version, "key accepted");
            Ok(())
        }
        None => Err(RunnerError::InvalidKeyOrNotEncrypted(
            "cipher_version is empty: wrong key, or the driver is not built against SQLCipher"
                .into(),
        )),
    }
}

/// Pick a backend for the given preference: native first, then standard
pub fn resolve(preference: BackendPreference) -> Result<Box<dyn Backend>> {
    let candidates: Vec<Box<dyn Backend>> = match preference {
        BackendPreference::Auto => vec![Box::new(EncryptionNativeBackend), Box::new(StandardBackend)],
        BackendPreference::Native => vec![Box::new(EncryptionNativeBackend)],
        BackendPreference::Standard => vec![Box::new(StandardBackend)],
    };
    resolve_from(candidates)
}

/// First available backend, in order
pub fn resolve_from(candidates: Vec<Box<dyn Backend>>) -> Result<Box<dyn Backend>> {
    let mut tried = Vec::new();
    for backend in candidates {
        if backend.is_available() {
            debug!(backend = %backend.kind(), "backend resolved");
            return Ok(backend);
        }
        debug!(backend = %backend.kind(), "backend unavailable");
        tried.push(backend.kind().to_string());
    }
    Err(RunnerError::DriverUnavailable(if tried.is_empty() {
        "no backend candidates".to_string()
    } else {
        format!("tried {}", tried.join(", "))
    }))
}
