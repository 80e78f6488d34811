use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use result_service::database::{self, constants::DEFAULT_DB_PATH};
use result_service::feed::HttpVoteFeed;
use result_service::state::AppState;
use result_service::utils::env_parse;
use tracing::info;

const DEFAULT_VOTE_SERVICE_URL: &str = "http://127.0.0.1:3001";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting Result Aggregation Service");

    let db_path = std::env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let pool = database::connect(&db_path).await?;
    database::run_migrations(&pool).await?;

    let feed_url =
        std::env::var("VOTE_SERVICE_URL").unwrap_or_else(|_| DEFAULT_VOTE_SERVICE_URL.to_string());
    let feed_timeout_ms: u64 = env_parse("FEED_TIMEOUT_MS", 5_000);
    let feed = HttpVoteFeed::new(feed_url.clone(), Duration::from_millis(feed_timeout_ms))?;
    info!("Vote ledger feed at {}", feed_url);

    let state = AppState {
        pool,
        feed: Arc::new(feed),
    };

    let port: u16 = env_parse("PORT", 3002);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Result service listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, result_service::app(state)).await?;

    Ok(())
}
