//! Incoming request object
//!
//! ```json
//! { "op": "sql", "sql": "SELECT ...", "params": [1], "dbPath": "/abs/db", "key": "..." }
//! ```

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::aliases::DbKey;
use crate::core::Result;
use crate::enums::RowMode;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    /// Kept raw so an unrecognized op can be reported after the handle is keyed
    #[serde(default)]
    pub op: Option<String>,
    #[serde(default)]
    pub sql: Option<String>,
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default)]
    pub params: Option<Value>,
    pub db_path: PathBuf,
    #[serde(default, deserialize_with = "deserialize_key")]
    key: Option<DbKey>,
    /// Emit rows as arrays instead of column-keyed objects
    #[serde(default)]
    pub raw: bool,
}

impl Request {
    /// Parse exactly one JSON object
    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// The supplied key; absent is treated the same as empty
    pub fn key(&self) -> DbKey {
        DbKey::new(
            self.key
                .as_ref()
                .map(|k| k.expose_secret().to_string())
                .unwrap_or_default(),
        )
    }

    pub fn row_mode(&self) -> RowMode {
        if self.raw {
            RowMode::Array
        } else {
            RowMode::Object
        }
    }
}

impl fmt::Debug for Request {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Request")
            .field("op", &self.op)
            .field("sql", &self.sql)
            .field("file", &self.file)
            .field("params", &self.params)
            .field("db_path", &self.db_path)
            .field("key", &self.key.as_ref().map(|_| "[REDACTED]"))
            .field("raw", &self.raw)
            .finish()
    }
}

fn deserialize_key<'de, D>(deserializer: D) -> std::result::Result<Option<DbKey>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(DbKey::new))
}
