//! Key application
//!
//! Opens the file, keys it, switches the journal mode and, for the standard
//! backend, proves the key was accepted before any request statement runs.

use std::path::Path;

use rusqlite::Connection;
use tracing::{debug, warn};

use crate::aliases::DbKey;
use crate::config::Pragmas;
use crate::core::Result;
use crate::db::backend::Backend;
use crate::db::handle::DatabaseHandle;
use crate::error::RunnerError;

/// Escape a key for embedding in `PRAGMA key = "..."`.
///
/// Backslashes are doubled, double quotes become `""`, single quotes become `''`.
/// Existing databases were keyed with exactly this transformation, so it must
/// not change.
pub fn escape_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 8);
    for c in key.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\"\""),
            '\'' => out.push_str("''"),
            c => out.push(c),
        }
    }
    out
}

/// Open `path` through `backend` and key it.
///
/// An empty key fails with [`RunnerError::MissingKey`] before the file is opened.
pub fn open_keyed(
    backend: &dyn Backend,
    path: &Path,
    key: &DbKey,
    pragmas: &Pragmas,
) -> Result<DatabaseHandle> {
    if key.expose_secret().is_empty() {
        return Err(RunnerError::MissingKey);
    }

    let conn = backend.open(path)?;
    let handle = DatabaseHandle::new(conn, path, backend.kind());

    select_cipher(handle.connection(), &pragmas.cipher);

    let escaped = DbKey::new(escape_key(key.expose_secret()));
    backend.apply_key(handle.connection(), escaped.expose_secret())?;

    if !pragmas.journal_mode.is_empty() {
        let mode: String = handle.connection().pragma_update_and_check(
            None,
            "journal_mode",
            pragmas.journal_mode.as_str(),
            |row| row.get(0),
        )?;
        debug!(journal_mode = %mode, "journal mode set");
    }

    if backend.kind().verifies_key() {
        backend.verify_key(handle.connection())?;
    }

    debug!("key applied");
    Ok(handle)
}

/// Best-effort cipher selection for multi-cipher builds
fn select_cipher(conn: &Connection, cipher: &str) {
    if cipher.is_empty() {
        return;
    }
    let directive = format!("PRAGMA cipher = '{}';", cipher.replace('\'', "''"));
    if let Err(err) = conn.execute_batch(&directive) {
        warn!(%err, cipher, "cipher selection not supported, ignoring");
    }
}
