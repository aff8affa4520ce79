//! Trace backend wiring.
//!
//! `init_trace_context` must run once during startup, before any call
//! wrapped by `with_trace_metadata` executes; until it runs the process
//! hands out a no-op sink.

mod metadata;
mod sink;

pub use metadata::{with_trace_metadata, RequestIdentity, ServiceMetadata, TraceMetadata};
pub use sink::{NoopTraceSink, RecordingTraceSink, TraceConfig, TraceSink, TraceUpdate};

use std::sync::{Arc, OnceLock};

use tracing::info;

use crate::config::Settings;

static TRACE_SINK: OnceLock<Arc<dyn TraceSink>> = OnceLock::new();

/// Configure the trace backend from settings and register it as the
/// process-wide sink. The first registration wins; later calls still apply
/// `configure` to the sink they were given but do not replace the global.
pub fn init_trace_context(settings: &Settings, sink: Arc<dyn TraceSink>) {
    sink.configure(TraceConfig {
        enabled: settings.langfuse_enable,
        public_key: settings.langfuse_public_key.clone(),
        secret_key: settings.langfuse_secret_key.clone(),
        host: settings.langfuse_host.clone(),
    });

    info!("LANGFUSE_ENABLE: {}", settings.langfuse_enable);
    info!("LANGFUSE_HOST: {}", settings.langfuse_host);

    let _ = TRACE_SINK.set(sink);
}

/// The process-wide trace sink, or a no-op sink before initialization.
pub fn trace_sink() -> Arc<dyn TraceSink> {
    if let Some(sink) = TRACE_SINK.get() {
        return Arc::clone(sink);
    }

    static NOOP: OnceLock<Arc<dyn TraceSink>> = OnceLock::new();
    Arc::clone(NOOP.get_or_init(|| Arc::new(NoopTraceSink)))
}
