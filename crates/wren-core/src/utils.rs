//! Small shared helpers.

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::error::DedupError;

/// Drop records whose `(sql, summary)` pair was already seen, keeping the
/// first occurrence and the original order.
///
/// Every record must carry string-valued `sql` and `summary` fields; a
/// record without them fails the whole call.
pub fn remove_sql_summary_duplicates(
    records: Vec<Map<String, Value>>,
) -> Result<Vec<Map<String, Value>>, DedupError> {
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(records.len());

    for record in records {
        let key = (
            string_field(&record, "sql")?.to_string(),
            string_field(&record, "summary")?.to_string(),
        );
        if seen.insert(key) {
            unique.push(record);
        }
    }

    Ok(unique)
}

fn string_field<'a>(
    record: &'a Map<String, Value>,
    name: &'static str,
) -> Result<&'a str, DedupError> {
    record
        .get(name)
        .and_then(Value::as_str)
        .ok_or(DedupError::MissingField(name))
}

/// Strip any trailing `/` from an endpoint URL.
pub fn remove_trailing_slash(endpoint: &str) -> &str {
    endpoint.trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(sql: &str, summary: &str) -> Map<String, Value> {
        json!({"sql": sql, "summary": summary})
            .as_object()
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_dedup_keeps_first_occurrence_in_order() {
        let records = vec![record("A", "x"), record("A", "x"), record("B", "x")];

        let unique = remove_sql_summary_duplicates(records).unwrap();

        assert_eq!(unique, vec![record("A", "x"), record("B", "x")]);
    }

    #[test]
    fn test_dedup_pairs_not_fields() {
        // Same sql with a different summary is not a duplicate
        let records = vec![record("A", "x"), record("A", "y")];

        let unique = remove_sql_summary_duplicates(records.clone()).unwrap();

        assert_eq!(unique, records);
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let records = vec![
            record("A", "x"),
            record("B", "y"),
            record("A", "x"),
            record("C", "z"),
        ];

        let once = remove_sql_summary_duplicates(records).unwrap();
        let twice = remove_sql_summary_duplicates(once.clone()).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn test_dedup_preserves_extra_fields() {
        let mut with_extra = record("A", "x");
        with_extra.insert("score".to_string(), json!(0.9));

        let unique = remove_sql_summary_duplicates(vec![with_extra.clone()]).unwrap();

        assert_eq!(unique, vec![with_extra]);
    }

    #[test]
    fn test_dedup_missing_field() {
        let mut no_summary = Map::new();
        no_summary.insert("sql".to_string(), json!("A"));

        match remove_sql_summary_duplicates(vec![no_summary]) {
            Err(DedupError::MissingField(field)) => assert_eq!(field, "summary"),
            other => panic!("expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_remove_trailing_slash() {
        assert_eq!(
            remove_trailing_slash("http://localhost:8000/"),
            "http://localhost:8000"
        );
        assert_eq!(
            remove_trailing_slash("http://localhost:8000"),
            "http://localhost:8000"
        );
        assert_eq!(remove_trailing_slash("http://host///"), "http://host");
        assert_eq!(remove_trailing_slash(""), "");
    }
}
