//! REST API for ingesting and retrieving crash reports.

pub mod report;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ApiState;

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/reports", post(report::ingest))
        .route("/reports/latest", get(report::latest))
        .with_state(state)
}
