//! SQL statement constants for the vote ledger

pub const CREATE_MIGRATIONS_TABLE_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS schema_migrations (
    version INTEGER PRIMARY KEY,
    applied_at TEXT NOT NULL,
    description TEXT NOT NULL
)
"#;

// UNIQUE(elector_id) is the authoritative one-vote-per-elector boundary;
// the admission pre-check only exists to fail fast.
pub const CREATE_VOTES_TABLE_SQL: &str = r#"
CREATE TABLE votes (
    id_vote INTEGER PRIMARY KEY AUTOINCREMENT,
    elector_id INTEGER NOT NULL UNIQUE,
    candidate_id INTEGER NOT NULL,
    cast_at TEXT NOT NULL
)
"#;

pub const CREATE_DB_INDEXES: &[&str] =
    &["CREATE INDEX idx_votes_candidate ON votes(candidate_id)"];
