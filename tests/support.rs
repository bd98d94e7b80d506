// tests/support.rs
//! Test utilities: a throwaway encrypted database per test

use encrypted_db_runner::config::Config;
use encrypted_db_runner::{escape_key, BackendPreference, Runner};
use rusqlite::Connection;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const TEST_KEY: &str = "test-db-secret-2025";

pub struct TestDb {
    dir: TempDir,
    pub path: PathBuf,
    pub key: String,
    pub config: Config,
}

impl TestDb {
    pub fn new() -> Self {
        Self::with_key(TEST_KEY)
    }

    pub fn with_key(key: &str) -> Self {
        let dir = tempfile::tempdir().expect("create tempdir");
        let path = dir.path().join("app.db");
        Self {
            dir,
            path,
            key: key.to_string(),
            config: Config::default(),
        }
    }

    #[allow(dead_code)]
    pub fn standard_backend(mut self) -> Self {
        self.config.driver.backend = BackendPreference::Standard;
        self
    }

    #[allow(dead_code)]
    pub fn dir(&self) -> &Path {
        self.dir.path()
    }

    /// Run a request body, filling in `dbPath` and `key` unless given
    pub fn request(&self, mut body: Value) -> Value {
        let obj = body.as_object_mut().expect("request body must be an object");
        obj.entry("dbPath")
            .or_insert_with(|| json!(self.path.to_str().unwrap()));
        obj.entry("key").or_insert_with(|| json!(self.key));
        self.raw(&body.to_string())
    }

    pub fn raw(&self, payload: &str) -> Value {
        let response = Runner::new(&self.config).handle_raw(payload);
        serde_json::from_str(&response.to_json()).expect("response is valid JSON")
    }

    #[allow(dead_code)]
    pub fn exec(&self, sql: &str) -> Value {
        let resp = self.request(json!({ "op": "exec", "sql": sql }));
        assert_eq!(resp["ok"], true, "exec failed: {resp}");
        resp
    }

    #[allow(dead_code)]
    pub fn sql(&self, sql: &str, params: Value) -> Value {
        self.request(json!({ "op": "sql", "sql": sql, "params": params }))
    }

    #[allow(dead_code)]
    pub fn seed(&self) {
        self.exec(
            "CREATE TABLE t (id INTEGER PRIMARY KEY, val TEXT);
             INSERT INTO t (id, val) VALUES (1, 'a');
             INSERT INTO t (id, val) VALUES (2, 'b');",
        );
    }

    /// The handle is gone: WAL checkpointed away and an exclusive lock is free
    #[allow(dead_code)]
    pub fn assert_released(&self) {
        let wal = PathBuf::from(format!("{}-wal", self.path.display()));
        assert!(!wal.exists(), "WAL file still present: {}", wal.display());

        if self.path.exists() {
            let conn = Connection::open(&self.path).expect("reopen");
            conn.busy_timeout(std::time::Duration::ZERO).unwrap();
            conn.execute_batch(&format!("PRAGMA key = \"{}\";", escape_key(&self.key)))
                .expect("key");
            conn.execute_batch("BEGIN EXCLUSIVE; COMMIT;")
                .expect("exclusive lock must be free");
        }
    }
}

impl Default for TestDb {
    fn default() -> Self {
        Self::new()
    }
}
