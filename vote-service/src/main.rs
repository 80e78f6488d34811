use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tracing::info;
use vote_service::database::{self, constants::DEFAULT_DB_PATH};
use vote_service::directory::HttpElectorDirectory;
use vote_service::state::AppState;
use vote_service::utils::env_parse;

const DEFAULT_DIRECTORY_URL: &str = "http://127.0.0.1:3003";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Vote Admission Service");

    let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let pool = database::connect(&db_path).await?;
    database::run_migrations(&pool).await?;

    let directory_url =
        std::env::var("VOTER_SERVICE_URL").unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string());
    let directory_timeout_ms: u64 = env_parse("DIRECTORY_TIMEOUT_MS", 3_000);
    let directory = HttpElectorDirectory::new(
        directory_url.clone(),
        Duration::from_millis(directory_timeout_ms),
    )?;
    info!("Elector directory at {}", directory_url);

    let state = AppState {
        pool,
        directory: Arc::new(directory),
    };

    let port: u16 = env_parse("PORT", 3001);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Vote service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, vote_service::app(state)).await?;

    Ok(())
}
