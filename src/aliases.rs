//! Re-exports secure-gate's secret types used by the runner

pub use secure_gate::dynamic_alias;

// Database encryption key as received in the request body
dynamic_alias!(DbKey, String);
