pub mod constants;
pub mod migrator;
pub mod models;
pub mod sql;

use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use tracing::info;

pub use migrator::run_migrations;

/// Open a connection pool for the vote ledger database, creating the file if needed.
pub async fn connect(db_path: &str) -> Result<SqlitePool> {
    info!("Opening vote ledger database at {}", db_path);

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    Ok(pool)
}

/// Fresh migrated ledger backed by a uniquely named temp file, so tests
/// exercising concurrent appends share one database across connections.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    use rand::{distributions::Alphanumeric, Rng};

    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let path = std::env::temp_dir().join(format!("votes_{}.db", suffix));

    let pool = connect(path.to_str().expect("temp path is valid utf-8"))
        .await
        .expect("open test ledger");
    run_migrations(&pool).await.expect("migrate test ledger");
    pool
}
