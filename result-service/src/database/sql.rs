//! SQL statement constants for the result store

pub const CREATE_MIGRATIONS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

// Derived projection only; every row is placed here by the tally engine
// and can be rebuilt wholesale from the vote ledger.
pub const CREATE_RESULTS_TABLE_SQL: &str = r#"
CREATE TABLE results (
    candidate_id INTEGER PRIMARY KEY,
    total_votes INTEGER NOT NULL
)
"#;
