//! End-to-end flow over the public API: a traced, timed "pipeline" call
//! whose candidate results get deduplicated before they are returned.

use std::sync::Arc;

use serde_json::{json, Map, Value};
use wren_core::{
    remove_sql_summary_duplicates, timing::timed_async, with_trace_metadata, RecordingTraceSink,
    RequestIdentity, ServiceMetadata, Settings,
};

fn candidate(sql: &str, summary: &str) -> Map<String, Value> {
    json!({"sql": sql, "summary": summary})
        .as_object()
        .cloned()
        .unwrap()
}

#[tokio::test]
async fn traced_pipeline_call_roundtrip() {
    let sink = Arc::new(RecordingTraceSink::new());
    let settings = Settings {
        enable_timer: true,
        ..Settings::default()
    };

    let identity = RequestIdentity {
        project_id: Some("p1".to_string()),
        thread_id: Some("t1".to_string()),
        mdl_hash: Some("abc123".to_string()),
        user_id: Some("u1".to_string()),
    };
    let service = ServiceMetadata {
        pipes_metadata: json!({"pipe": "sql_generation"})
            .as_object()
            .cloned()
            .unwrap(),
        service_version: "0.1.0".to_string(),
    };

    // The "pipeline": produces candidates with duplicates plus trace metadata
    let pipeline = async {
        json!({
            "candidates": [
                {"sql": "SELECT 1", "summary": "one"},
                {"sql": "SELECT 1", "summary": "one"},
                {"sql": "SELECT 2", "summary": "two"},
            ],
            "metadata": {"model": "gpt-4o-mini"},
        })
    };

    let result = timed_async(
        &settings,
        "sql_generation",
        with_trace_metadata(sink.as_ref(), &identity, Some(&service), pipeline),
    )
    .await;

    // Dedup the candidate list from the raw result
    let candidates: Vec<Map<String, Value>> = result["candidates"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.as_object().cloned().unwrap())
        .collect();
    let unique = remove_sql_summary_duplicates(candidates).unwrap();
    assert_eq!(
        unique,
        vec![candidate("SELECT 1", "one"), candidate("SELECT 2", "two")]
    );

    // One trace update carrying the merged metadata and identity routing
    let updates = sink.updates();
    assert_eq!(updates.len(), 1);
    let update = &updates[0];
    assert_eq!(update.user_id.as_deref(), Some("u1"));
    assert_eq!(update.session_id.as_deref(), Some("t1"));
    assert_eq!(update.release, "0.1.0");
    assert_eq!(update.metadata.get("pipe"), Some(&json!("sql_generation")));
    assert_eq!(update.metadata.get("model"), Some(&json!("gpt-4o-mini")));
    assert_eq!(update.metadata.get("mdl_hash"), Some(&json!("abc123")));
    assert_eq!(update.metadata.get("project_id"), Some(&json!("p1")));
}
