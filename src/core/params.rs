//! Parameter shapes and binding
//!
//! A JSON array binds positionally, a JSON object binds by name. Anything else
//! (scalars, null, absent) binds nothing, which is only valid for a statement
//! without placeholders.

use rusqlite::Statement;
use serde_json::{Map, Value};

use crate::consts::NAMED_PARAM_PREFIXES;
use crate::core::value::json_to_sql;
use crate::core::Result;
use crate::error::RunnerError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Params {
    #[default]
    None,
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl Params {
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            Some(Value::Array(values)) => Params::Positional(values.clone()),
            Some(Value::Object(map)) => Params::Named(map.clone()),
            _ => Params::None,
        }
    }

    /// Bind onto a freshly prepared statement
    pub fn bind(&self, stmt: &mut Statement<'_>) -> Result<()> {
        match self {
            Params::None => require_no_placeholders(stmt),
            Params::Positional(values) => bind_positional(stmt, values),
            Params::Named(map) => bind_named(stmt, map),
        }
    }
}

fn require_no_placeholders(stmt: &Statement<'_>) -> Result<()> {
    match stmt.parameter_count() {
        0 => Ok(()),
        expected => Err(RunnerError::Execution(format!(
            "Too few parameter values were provided: statement expects {expected}, got none"
        ))),
    }
}

fn bind_positional(stmt: &mut Statement<'_>, values: &[Value]) -> Result<()> {
    let expected = stmt.parameter_count();
    if values.len() != expected {
        return Err(RunnerError::Execution(format!(
            "statement expects {expected} parameter(s), got {}",
            values.len()
        )));
    }
    for (i, value) in values.iter().enumerate() {
        stmt.raw_bind_parameter(i + 1, json_to_sql(value)?)?;
    }
    Ok(())
}

fn bind_named(stmt: &mut Statement<'_>, map: &Map<String, Value>) -> Result<()> {
    for index in 1..=stmt.parameter_count() {
        let Some(name) = stmt.parameter_name(index).map(str::to_owned) else {
            return Err(RunnerError::Execution(format!(
                "anonymous parameter at position {index} cannot be bound by name"
            )));
        };
        let bare = name.trim_start_matches(&NAMED_PARAM_PREFIXES[..]);
        let value = map
            .get(&name)
            .or_else(|| map.get(bare))
            .ok_or_else(|| RunnerError::Execution(format!("Missing named parameter \"{bare}\"")))?;
        stmt.raw_bind_parameter(index, json_to_sql(value)?)?;
    }
    Ok(())
}
