//! Vote admission service: verifies elector eligibility against the elector
//! directory, enforces one-vote-per-elector through the ledger, and exposes
//! the committed vote set over HTTP.

pub mod admission;
pub mod database;
pub mod directory;
pub mod error;
pub mod handlers;
pub mod ledger;
pub mod metrics;
pub mod state;
pub mod types;
pub mod utils;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use state::AppState;

/// Build the service router with all routes and middleware attached.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(handlers::health_check))
        .route(
            "/api/votes",
            post(handlers::submit_vote).get(handlers::list_votes),
        )
        .route(
            "/api/votes/candidate/{candidate_id}",
            get(handlers::list_votes_by_candidate),
        )
        .route("/admin/stats", get(handlers::admin_stats))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
