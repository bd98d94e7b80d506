//! Conversion between JSON scalars and SQLite values

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rusqlite::types::{Value as SqlValue, ValueRef};
use serde_json::{Number, Value};

use crate::core::Result;
use crate::error::RunnerError;

/// JSON parameter → SQLite value. Booleans bind as 0/1; arrays and objects are rejected.
pub fn json_to_sql(value: &Value) -> Result<SqlValue> {
    match value {
        Value::Null => Ok(SqlValue::Null),
        Value::Bool(b) => Ok(SqlValue::Integer(i64::from(*b))),
        Value::Number(n) => n
            .as_i64()
            .map(SqlValue::Integer)
            .or_else(|| n.as_f64().map(SqlValue::Real))
            .ok_or_else(|| RunnerError::Execution(format!("unsupported number {n}"))),
        Value::String(s) => Ok(SqlValue::Text(s.clone())),
        Value::Array(_) | Value::Object(_) => Err(RunnerError::Execution(format!(
            "parameter values must be scalars, got {value}"
        ))),
    }
}

/// SQLite column value → JSON. Blobs become standard base64 text.
pub fn sql_to_json(value: ValueRef<'_>) -> Value {
    match value {
        ValueRef::Null => Value::Null,
        ValueRef::Integer(i) => Value::from(i),
        ValueRef::Real(f) => Number::from_f64(f).map(Value::Number).unwrap_or(Value::Null),
        ValueRef::Text(bytes) => Value::String(String::from_utf8_lossy(bytes).into_owned()),
        ValueRef::Blob(bytes) => Value::String(STANDARD.encode(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_bind_to_native_types() {
        assert_eq!(json_to_sql(&json!(null)).unwrap(), SqlValue::Null);
        assert_eq!(json_to_sql(&json!(true)).unwrap(), SqlValue::Integer(1));
        assert_eq!(json_to_sql(&json!(42)).unwrap(), SqlValue::Integer(42));
        assert_eq!(json_to_sql(&json!(1.5)).unwrap(), SqlValue::Real(1.5));
        assert_eq!(json_to_sql(&json!("a")).unwrap(), SqlValue::Text("a".into()));
    }

    #[test]
    fn u64_beyond_i64_binds_as_real() {
        assert_eq!(
            json_to_sql(&json!(u64::MAX)).unwrap(),
            SqlValue::Real(u64::MAX as f64)
        );
    }

    #[test]
    fn nested_values_are_rejected() {
        assert!(matches!(
            json_to_sql(&json!([1, 2])),
            Err(RunnerError::Execution(_))
        ));
        assert!(matches!(
            json_to_sql(&json!({"a": 1})),
            Err(RunnerError::Execution(_))
        ));
    }

    #[test]
    fn column_values_keep_their_type() {
        assert_eq!(sql_to_json(ValueRef::Integer(7)), json!(7));
        assert_eq!(sql_to_json(ValueRef::Real(0.25)), json!(0.25));
        assert_eq!(sql_to_json(ValueRef::Text(b"hi")), json!("hi"));
        assert_eq!(sql_to_json(ValueRef::Null), Value::Null);
        assert_eq!(sql_to_json(ValueRef::Blob(&[0xde, 0xad])), json!("3q0="));
        assert_eq!(sql_to_json(ValueRef::Real(f64::NAN)), Value::Null);
    }
}
