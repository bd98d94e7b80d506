//! Execution engine
//!
//! `sql` and `file` prepare a single statement, bind, and either materialize every
//! row or step it for effect. `exec` runs a script with no binding.

use std::path::Path;

use rusqlite::fallible_iterator::FallibleIterator;
use rusqlite::{Batch, Connection, Statement};
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::classify::is_result_producing;
use crate::core::params::Params;
use crate::core::value::sql_to_json;
use crate::core::Result;
use crate::enums::{Operation, RowMode};
use crate::error::RunnerError;
use crate::request::Request;

/// Materialized result of a row-producing statement
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RowSet {
    pub columns: Vec<String>,
    /// One JSON object (or array, in [`RowMode::Array`]) per row
    pub rows: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Row-producing statement
    Rows(RowSet),
    /// Statement run for effect; reported with an empty row list
    Effect,
    /// `exec` script; reported without a row payload
    Script,
}

/// Dispatch a validated operation against an open connection
pub fn execute(conn: &Connection, request: &Request, op: Operation) -> Result<Outcome> {
    let params = Params::from_json(request.params.as_ref());
    match op {
        Operation::Sql => {
            let sql = request.sql.as_deref().ok_or(RunnerError::MissingField {
                op: op.as_str(),
                field: "sql",
            })?;
            run_statement(conn, sql, &params, request.row_mode())
        }
        Operation::File => {
            let path = request.file.as_deref().ok_or(RunnerError::MissingField {
                op: op.as_str(),
                field: "file",
            })?;
            let sql = read_statement_file(path)?;
            run_statement(conn, &sql, &params, request.row_mode())
        }
        Operation::Exec => {
            let sql = request.sql.as_deref().ok_or(RunnerError::MissingField {
                op: op.as_str(),
                field: "sql",
            })?;
            run_script(conn, sql)?;
            Ok(Outcome::Script)
        }
    }
}

/// Prepare, bind and run exactly one statement
pub fn run_statement(
    conn: &Connection,
    sql: &str,
    params: &Params,
    mode: RowMode,
) -> Result<Outcome> {
    let mut stmt = prepare_single(conn, sql)?;
    let producing = is_result_producing(sql);
    debug!(producing, "statement classified");

    params.bind(&mut stmt)?;

    if !producing {
        let mut rows = stmt.raw_query();
        while rows.next()?.is_some() {}
        return Ok(Outcome::Effect);
    }

    let columns: Vec<String> = stmt.column_names().into_iter().map(String::from).collect();
    let mut out = Vec::new();
    let mut rows = stmt.raw_query();
    while let Some(row) = rows.next()? {
        let value = match mode {
            RowMode::Object => {
                let mut obj = Map::with_capacity(columns.len());
                for (i, name) in columns.iter().enumerate() {
                    obj.insert(name.clone(), sql_to_json(row.get_ref(i)?));
                }
                Value::Object(obj)
            }
            RowMode::Array => Value::Array(
                (0..columns.len())
                    .map(|i| row.get_ref(i).map(sql_to_json))
                    .collect::<rusqlite::Result<Vec<_>>>()?,
            ),
        };
        out.push(value);
    }

    debug!(rows = out.len(), "rows materialized");
    Ok(Outcome::Rows(RowSet { columns, rows: out }))
}

/// Prepare the one statement in `sql`. Trailing `;` and comments are fine; a second
/// statement is not.
fn prepare_single<'conn>(conn: &'conn Connection, sql: &str) -> Result<Statement<'conn>> {
    let no_statements =
        || RunnerError::Prepare("The supplied SQL string contains no statements".into());
    if sql.trim().is_empty() {
        return Err(no_statements());
    }

    let mut batch = Batch::new(conn, sql);
    let stmt = batch
        .next()
        .map_err(RunnerError::prepare)?
        .ok_or_else(no_statements)?;
    if !matches!(batch.next(), Ok(None)) {
        return Err(RunnerError::Prepare(
            "The supplied SQL string contains more than one statement".into(),
        ));
    }
    Ok(stmt)
}

/// Run a multi-statement script. Parameters are never bound here.
pub fn run_script(conn: &Connection, sql: &str) -> Result<()> {
    conn.execute_batch(sql)?;
    Ok(())
}

fn read_statement_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        RunnerError::Io(std::io::Error::new(
            err.kind(),
            format!("{}: {err}", path.display()),
        ))
    })
}
