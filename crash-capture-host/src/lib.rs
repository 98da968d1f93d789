//! Host-side decoder and export service for crash-capture records.

pub mod api;
pub mod config;
pub mod decode;
pub mod error;

use std::sync::{Arc, Mutex};

use crash_capture::record::DumpRecord;

/// Shared state handed to every axum handler: the most recently ingested
/// report, if any. A single slot, not a history with pagination — only
/// the most recently ingested report is kept.
#[derive(Clone)]
pub struct ApiState {
    pub latest: Arc<Mutex<Option<DumpRecord>>>,
}

impl ApiState {
    pub fn new() -> ApiState {
        ApiState { latest: Arc::new(Mutex::new(None)) }
    }
}

impl Default for ApiState {
    fn default() -> Self {
        ApiState::new()
    }
}
