//! Tests for page envelope parsing and query rewriting

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_envelope_from_value() {
    let body = json!({
        "total": 42,
        "issues": [{"key": "PRJ-1"}, {"key": "PRJ-2"}],
    });

    let envelope = PageEnvelope::from_value(&body, "issues").unwrap();
    assert_eq!(envelope.total, 42);
    assert_eq!(envelope.items.len(), 2);
    assert_eq!(envelope.items[0]["key"], "PRJ-1");
}

#[test]
fn test_envelope_preserves_item_order() {
    let body = json!({
        "total": 3,
        "values": [{"id": 1}, {"id": 2}, {"id": 3}],
    });

    let envelope = PageEnvelope::from_value(&body, "values").unwrap();
    let ids: Vec<i64> = envelope
        .items
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn test_envelope_missing_total() {
    let body = json!({ "issues": [] });
    let err = PageEnvelope::from_value(&body, "issues").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }));
    assert!(err.to_string().contains("total"));
}

#[test]
fn test_envelope_total_must_be_integer() {
    let body = json!({ "total": "42", "issues": [] });
    let err = PageEnvelope::from_value(&body, "issues").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }));
}

#[test]
fn test_envelope_missing_items_field() {
    let body = json!({ "total": 10 });
    let err = PageEnvelope::from_value(&body, "issues").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }));
    assert!(err.to_string().contains("issues"));
}

#[test]
fn test_envelope_items_must_be_array() {
    let body = json!({ "total": 10, "issues": "not an array" });
    let err = PageEnvelope::from_value(&body, "issues").unwrap_err();
    assert!(matches!(err, Error::MalformedEnvelope { .. }));
}

#[test]
fn test_envelope_empty_page() {
    let body = json!({ "total": 0, "issues": [] });
    let envelope = PageEnvelope::from_value(&body, "issues").unwrap();
    assert_eq!(envelope.total, 0);
    assert!(envelope.items.is_empty());
}

#[test]
fn test_next_page_query_format() {
    assert_eq!(
        next_page_query("jql=project%3DPRJ", 100),
        "startAt=100&jql=project%3DPRJ&maxResults=300"
    );
}

#[test]
fn test_next_page_query_with_empty_original() {
    assert_eq!(next_page_query("", 50), "startAt=50&&maxResults=300");
}
