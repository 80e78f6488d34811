use std::sync::Arc;
use std::time::Duration;

use axum::{extract::Path, http::StatusCode, response::Json, routing::get, Router};
use rand::{distributions::Alphanumeric, Rng};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePool;

use vote_service::database;
use vote_service::directory::HttpElectorDirectory;
use vote_service::state::AppState;

/// Fresh migrated ledger on a uniquely named temp file.
pub async fn temp_pool() -> SqlitePool {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .map(char::from)
        .collect();
    let path = std::env::temp_dir().join(format!("votes_api_{}.db", suffix));

    let pool = database::connect(path.to_str().unwrap()).await.unwrap();
    database::run_migrations(&pool).await.unwrap();
    pool
}

/// Bind an ephemeral port and serve the router in the background.
pub async fn spawn_app(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server error");
    });
    format!("http://{}", addr)
}

/// In-process stand-in for the voter-service elector directory: answers for
/// the given elector ids, 404 for everyone else.
pub async fn spawn_fake_directory(known: &'static [i64]) -> String {
    let app = Router::new().route(
        "/api/electors/{id}",
        get(move |Path(id): Path<i64>| async move {
            if known.contains(&id) {
                Ok(Json(json!({
                    "id": id,
                    "last_name": "Lovelace",
                    "first_name": "Ada",
                })))
            } else {
                Err(StatusCode::NOT_FOUND)
            }
        }),
    );
    spawn_app(app).await
}

/// Start the vote service wired to the given directory URL.
pub async fn spawn_vote_service(directory_url: String) -> String {
    let directory = HttpElectorDirectory::new(directory_url, Duration::from_millis(500)).unwrap();
    let state = AppState {
        pool: temp_pool().await,
        directory: Arc::new(directory),
    };
    spawn_app(vote_service::app(state)).await
}

/// Base URL whose port was bound once and released, so connections are refused.
pub fn dead_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}", port)
}

pub async fn submit(
    client: &reqwest::Client,
    base: &str,
    elector_id: i64,
    candidate_id: i64,
) -> reqwest::Response {
    client
        .post(format!("{}/api/votes", base))
        .json(&json!({ "elector_id": elector_id, "candidate_id": candidate_id }))
        .send()
        .await
        .expect("submit request")
}

pub async fn body_json(response: reqwest::Response) -> Value {
    response.json().await.expect("json body")
}
