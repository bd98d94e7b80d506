//! Statement classification
//!
//! Purely syntactic: a statement produces rows iff its trimmed text starts with
//! `select` or `with`, case-insensitively. `PRAGMA` queries, `EXPLAIN` and
//! `... RETURNING` land on the effect-only path and have their rows discarded.

const RESULT_PREFIXES: [&str; 2] = ["select", "with"];

pub fn is_result_producing(sql: &str) -> bool {
    let head = sql.trim_start().as_bytes();
    RESULT_PREFIXES.iter().any(|prefix| {
        head.len() >= prefix.len() && head[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    })
}
