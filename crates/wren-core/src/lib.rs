//! # Wren Core Library
//!
//! Cross-cutting runtime support for the Wren AI service.
//!
//! ## Modules
//!
//! - `config` - Process configuration loaded from the environment
//! - `env` - Development-mode environment file loading
//! - `error` - Error taxonomy
//! - `logging` - Colorized console logging setup
//! - `timing` - Elapsed-time instrumentation for sync and async calls
//! - `trace` - Trace backend initialization and per-call trace metadata
//! - `utils` - Small shared helpers

pub mod config;
pub mod env;
pub mod error;
pub mod logging;
pub mod timing;
pub mod trace;
pub mod utils;

// Re-export commonly used types
pub use config::{settings, Settings};
pub use error::{ConfigError, DedupError};
pub use logging::{init_logging, LogLevel};
pub use trace::{
    init_trace_context, trace_sink, with_trace_metadata, NoopTraceSink, RecordingTraceSink,
    RequestIdentity, ServiceMetadata, TraceConfig, TraceMetadata, TraceSink, TraceUpdate,
};
pub use utils::{remove_sql_summary_duplicates, remove_trailing_slash};
