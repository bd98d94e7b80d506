//! tests/key_tests.rs: keying, verification and encryption at rest

mod common;
mod support;

use rusqlite::Connection;
use serde_json::json;
use std::fs;
use support::TestDb;

const SQLITE_HEADER: &[u8] = b"SQLite format 3\0";

#[test]
fn database_file_is_encrypted_at_rest() {
    common::setup();
    let db = TestDb::new();
    db.seed();

    let bytes = fs::read(&db.path).unwrap();
    assert!(!bytes.is_empty());
    assert_ne!(&bytes[..SQLITE_HEADER.len()], SQLITE_HEADER);
}

#[test]
fn empty_key_fails_without_creating_the_file() {
    let db = TestDb::new();
    let resp = db.request(json!({
        "op": "exec",
        "sql": "CREATE TABLE t (id INTEGER)",
        "key": "",
    }));
    assert_eq!(resp, json!({ "ok": false, "error": "No encryption key supplied" }));
    assert!(!db.path.exists());
}

#[test]
fn absent_key_is_treated_as_missing() {
    let db = TestDb::new();
    let payload = json!({
        "op": "sql",
        "sql": "SELECT 1",
        "dbPath": db.path.to_str().unwrap(),
    });
    let resp = db.raw(&payload.to_string());
    assert_eq!(resp["error"], "No encryption key supplied");
    assert!(!db.path.exists());
}

#[test]
fn wrong_key_fails_and_leaves_file_untouched() {
    let db = TestDb::new();
    db.seed();
    let before = fs::read(&db.path).unwrap();

    let resp = db.request(json!({
        "op": "sql",
        "sql": "SELECT * FROM t",
        "key": "not-the-key",
    }));
    assert_eq!(resp["ok"], false);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid key or database not encrypted"));

    assert_eq!(fs::read(&db.path).unwrap(), before);
    db.assert_released();
}

#[test]
fn wrong_key_is_rejected_by_standard_backend_too() {
    let db = TestDb::new().standard_backend();
    db.seed();
    let before = fs::read(&db.path).unwrap();

    let resp = db.request(json!({
        "op": "exec",
        "sql": "INSERT INTO t (id, val) VALUES (9, 'x')",
        "key": "also-wrong",
    }));
    assert_eq!(resp["ok"], false);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid key or database not encrypted"));
    assert_eq!(fs::read(&db.path).unwrap(), before);
    db.assert_released();
}

#[test]
fn plaintext_database_is_reported_as_not_encrypted() {
    let db = TestDb::new();
    {
        let conn = Connection::open(&db.path).unwrap();
        conn.execute_batch("CREATE TABLE plain (id INTEGER); INSERT INTO plain VALUES (1);")
            .unwrap();
    }

    let resp = db.sql("SELECT * FROM plain", json!([]));
    assert_eq!(resp["ok"], false);
    assert!(resp["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid key or database not encrypted"));
}

#[test]
fn keys_with_quotes_and_backslashes_reopen_cleanly() {
    let db = TestDb::with_key(r#"pa"ss'w\rd"#);
    db.seed();

    let resp = db.sql("SELECT val FROM t WHERE id = 1", json!([]));
    assert_eq!(resp["rows"], json!([{ "val": "a" }]));

    let near_miss = db.request(json!({
        "op": "sql",
        "sql": "SELECT val FROM t",
        "key": r#"pa"ss'wrd"#,
    }));
    assert_eq!(near_miss["ok"], false);
}
