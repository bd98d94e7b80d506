//! Outgoing response envelope
//!
//! `{ "ok": true, "rows": [...] }` or `{ "ok": false, "error": "..." }`

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;

use crate::core::{Outcome, RowSet};
use crate::enums::RowMode;
use crate::error::RunnerError;

#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Success {
        /// `None` for `exec`, where no row payload is emitted
        rows: Option<Vec<Value>>,
        /// Only set in array row mode
        columns: Option<Vec<String>>,
    },
    Failure {
        error: String,
    },
}

impl Response {
    pub fn from_outcome(outcome: Outcome, mode: RowMode) -> Self {
        match outcome {
            Outcome::Rows(RowSet { columns, rows }) => Response::Success {
                rows: Some(rows),
                columns: (mode == RowMode::Array).then_some(columns),
            },
            Outcome::Effect => Response::Success {
                rows: Some(Vec::new()),
                columns: None,
            },
            Outcome::Script => Response::Success {
                rows: None,
                columns: None,
            },
        }
    }

    pub fn failure(err: &RunnerError) -> Self {
        Response::Failure {
            error: err.to_string(),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// Single-line JSON
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|err| {
            serde_json::json!({ "ok": false, "error": format!("Failed to encode response: {err}") })
                .to_string()
        })
    }
}

impl Serialize for Response {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        match self {
            Response::Success { rows, columns } => {
                map.serialize_entry("ok", &true)?;
                if let Some(columns) = columns {
                    map.serialize_entry("columns", columns)?;
                }
                if let Some(rows) = rows {
                    map.serialize_entry("rows", rows)?;
                }
            }
            Response::Failure { error } => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("error", error)?;
            }
        }
        map.end()
    }
}
