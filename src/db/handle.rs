//! Per-request database handle
//!
//! Owned by exactly one request. Dropping it closes the connection, so every
//! early return after a successful open releases the file. [`DatabaseHandle::close`]
//! is the explicit path used once the operation has run, so close errors can be
//! reported.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tracing::debug;

use crate::core::Result;
use crate::enums::BackendKind;

pub struct DatabaseHandle {
    conn: Connection,
    path: PathBuf,
    backend: BackendKind,
}

impl DatabaseHandle {
    pub(crate) fn new(conn: Connection, path: &Path, backend: BackendKind) -> Self {
        Self {
            conn,
            path: path.to_path_buf(),
            backend,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backend(&self) -> BackendKind {
        self.backend
    }

    /// Close the connection, consuming the handle
    pub fn close(self) -> Result<()> {
        let path = self.path;
        // On failure rusqlite hands the connection back; dropping it retries the close.
        self.conn.close().map_err(|(_conn, err)| err)?;
        debug!(path = %path.display(), "handle closed");
        Ok(())
    }
}
