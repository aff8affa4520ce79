//! Per-call trace metadata.
//!
//! `with_trace_metadata` wraps an async call and, once it completes, merges
//! the request identity, caller-supplied pipeline metadata, and whatever
//! metadata the result itself carries into a single record pushed to the
//! trace backend. It must run inside a trace already opened by the backend's
//! own instrumentation; without one the push is the backend's business.

use std::future::Future;

use serde_json::{Map, Value};

use super::sink::{TraceSink, TraceUpdate};

/// Identity fields a request may carry. All optional: endpoints declare
/// what they have instead of the caller probing for attributes.
#[derive(Debug, Clone, Default)]
pub struct RequestIdentity {
    pub project_id: Option<String>,
    pub thread_id: Option<String>,
    pub mdl_hash: Option<String>,
    pub user_id: Option<String>,
}

/// Pipeline metadata supplied by the service layer for the current call.
#[derive(Debug, Clone, Default)]
pub struct ServiceMetadata {
    pub pipes_metadata: Map<String, Value>,
    pub service_version: String,
}

/// Metadata a call result contributes to its trace.
pub trait TraceMetadata {
    fn trace_metadata(&self) -> Option<Map<String, Value>>;
}

impl TraceMetadata for Value {
    /// The `metadata` sub-object of an object result, when present.
    fn trace_metadata(&self) -> Option<Map<String, Value>> {
        self.get("metadata").and_then(Value::as_object).cloned()
    }
}

/// Await `fut`, push the merged trace metadata for the call, and hand the
/// result back unchanged.
///
/// Merge order, later wins: pipeline metadata, then the result's own
/// metadata, then the identity's `mdl_hash` and `project_id`. The identity
/// fields are written even when unset so stale values from earlier layers
/// cannot leak through.
pub async fn with_trace_metadata<F, T>(
    sink: &dyn TraceSink,
    identity: &RequestIdentity,
    service_metadata: Option<&ServiceMetadata>,
    fut: F,
) -> T
where
    F: Future<Output = T>,
    T: TraceMetadata,
{
    let result = fut.await;

    let mut metadata = service_metadata
        .map(|s| s.pipes_metadata.clone())
        .unwrap_or_default();
    if let Some(extra) = result.trace_metadata() {
        metadata.extend(extra);
    }
    metadata.insert("mdl_hash".to_string(), opt_value(&identity.mdl_hash));
    metadata.insert("project_id".to_string(), opt_value(&identity.project_id));

    sink.update_current_trace(TraceUpdate {
        user_id: identity.user_id.clone(),
        session_id: identity.thread_id.clone(),
        release: service_metadata
            .map(|s| s.service_version.clone())
            .unwrap_or_default(),
        metadata,
    });

    result
}

fn opt_value(field: &Option<String>) -> Value {
    field
        .as_ref()
        .map_or(Value::Null, |v| Value::String(v.clone()))
}
