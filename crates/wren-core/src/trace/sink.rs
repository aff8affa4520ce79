//! Trace backend seam.
//!
//! The actual backend (Langfuse) lives outside this crate; everything here
//! talks to it through `TraceSink` so callers can swap in the no-op or
//! recording implementations.

use std::sync::Mutex;

use serde::Serialize;
use serde_json::{Map, Value};

/// One-shot backend configuration applied at startup.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraceConfig {
    pub enabled: bool,
    pub public_key: String,
    pub secret_key: String,
    pub host: String,
}

/// Fields attached to the backend's current trace after a call completes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TraceUpdate {
    pub user_id: Option<String>,
    pub session_id: Option<String>,
    pub release: String,
    pub metadata: Map<String, Value>,
}

/// Operations the external trace backend exposes.
pub trait TraceSink: Send + Sync {
    fn configure(&self, config: TraceConfig);

    fn update_current_trace(&self, update: TraceUpdate);
}

/// Discards everything; stands in when tracing is disabled or not wired up.
pub struct NoopTraceSink;

impl TraceSink for NoopTraceSink {
    fn configure(&self, _config: TraceConfig) {}

    fn update_current_trace(&self, _update: TraceUpdate) {}
}

/// Stores everything pushed to it, for inspection in tests and diagnostics.
#[derive(Default)]
pub struct RecordingTraceSink {
    configs: Mutex<Vec<TraceConfig>>,
    updates: Mutex<Vec<TraceUpdate>>,
}

impl RecordingTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn configs(&self) -> Vec<TraceConfig> {
        self.configs.lock().unwrap().clone()
    }

    pub fn updates(&self) -> Vec<TraceUpdate> {
        self.updates.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.configs.lock().unwrap().clear();
        self.updates.lock().unwrap().clear();
    }
}

impl TraceSink for RecordingTraceSink {
    fn configure(&self, config: TraceConfig) {
        self.configs.lock().unwrap().push(config);
    }

    fn update_current_trace(&self, update: TraceUpdate) {
        self.updates.lock().unwrap().push(update);
    }
}
