//! Shared constants: env var names and pragma defaults

/// Env var holding the path of the TOML config file
pub const CONFIG_PATH_ENV: &str = "DB_RUNNER_CONFIG";

/// Config file used when `DB_RUNNER_CONFIG` is unset
pub const DEFAULT_CONFIG_PATH: &str = "db-runner.toml";

/// Env var that overrides `driver.backend` from the config file
pub const BACKEND_ENV: &str = "DB_RUNNER_BACKEND";

/// Cipher requested from multi-cipher builds (best-effort)
pub const DEFAULT_CIPHER: &str = "sqlcipher";

/// Journal mode applied to every keyed handle
pub const DEFAULT_JOURNAL_MODE: &str = "WAL";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Prefixes SQLite accepts for named parameters
pub const NAMED_PARAM_PREFIXES: [char; 3] = [':', '@', '$'];
