//! Result aggregation service: recomputes per-candidate tallies from the
//! vote ledger feed and serves results and statistics from a derived,
//! recomputable projection.

pub mod database;
pub mod error;
pub mod feed;
pub mod handlers;
pub mod service;
pub mod state;
pub mod store;
pub mod tally;
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
        .route("/api/results/calculate", post(handlers::calculate_results))
        .route("/api/results", get(handlers::get_results))
        .route("/api/results/statistics", get(handlers::get_statistics))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
