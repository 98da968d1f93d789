//! Report ingest/export handlers: `POST /reports` accepts a raw record
//! dump, `GET /reports/latest` returns the most recently ingested one
//! rendered as text.

use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse};
use tracing::{info, warn};

use crate::ApiState;

pub async fn ingest(State(state): State<ApiState>, body: Bytes) -> impl IntoResponse {
    match crate::decode::decode(&body) {
        Ok(record) => {
            info!(file = record.file_name(), line = record.line_number(), "ingested crash report");
            *state.latest.lock().unwrap() = Some(record);
            StatusCode::CREATED
        }
        Err(err) => {
            warn!(%err, "rejected crash report ingest");
            StatusCode::BAD_REQUEST
        }
    }
}

pub async fn latest(State(state): State<ApiState>) -> impl IntoResponse {
    let guard = state.latest.lock().unwrap();
    match guard.as_ref() {
        Some(record) => {
            let mut text = String::new();
            if crash_capture::report::write_report(&mut text, record).is_err() {
                return (StatusCode::INTERNAL_SERVER_ERROR, String::new());
            }
            (StatusCode::OK, text)
        }
        None => (StatusCode::NOT_FOUND, String::new()),
    }
}
