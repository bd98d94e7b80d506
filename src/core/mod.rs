pub mod classify;
pub mod exec;
pub mod params;
pub mod value;

pub use classify::is_result_producing;
pub use exec::{execute, run_script, run_statement, Outcome, RowSet};
pub use params::Params;
pub use value::{json_to_sql, sql_to_json};

pub type Result<T> = std::result::Result<T, crate::error::RunnerError>;
