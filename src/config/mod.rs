//! Configuration system for encrypted-db-runner
//!
//! Central, lazy-loaded global config with TOML + env overrides.
//! The encryption key is never part of it.

pub use app::{load, Config, Driver, Logging, Pragmas};

mod app;
mod defaults;
