use exhibition_lookup::api::helpers::{error_response, ok_json};
use exhibition_lookup::api::{QUERY_FAILURE_MESSAGE, UNEXPECTED_FAILURE_MESSAGE};
use exhibition_lookup::core::models::ExhibitionsBody;
use exhibition_lookup::errors::{LookupError, StorageError};
use serde_json::Value;

/// Tests for the proxy response builders.
/// These verify the envelope and the body for every status the handler emits.

fn body_of(response: &Value) -> Value {
    let raw = response["body"].as_str().expect("body is a JSON string");
    serde_json::from_str(raw).unwrap()
}

#[test]
fn test_ok_response_envelope() {
    let response = ok_json(&ExhibitionsBody::new(vec![], false)).unwrap();

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["headers"]["Content-Type"], "application/json");
    assert_eq!(body_of(&response), serde_json::json!({ "exhibitions": [] }));
}

#[test]
fn test_legacy_empty_body_is_a_string() {
    let response = ok_json(&ExhibitionsBody::new(vec![], true)).unwrap();
    assert_eq!(body_of(&response), serde_json::json!({ "exhibitions": "" }));
}

#[test]
fn test_validation_error_has_message_only() {
    let response = error_response(&LookupError::Validation("bad input".to_string()));

    assert_eq!(response["statusCode"], 400);
    assert_eq!(body_of(&response), serde_json::json!({ "message": "bad input" }));
}

#[test]
fn test_query_error_includes_cause() {
    let response = error_response(&LookupError::Query {
        table: "PublicExhibitions".to_string(),
        source: StorageError::Service("connection reset".to_string()),
    });
    let body = body_of(&response);

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body["message"], QUERY_FAILURE_MESSAGE);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("PublicExhibitions"));
    assert!(error.contains("connection reset"));
}

#[test]
fn test_unexpected_error_uses_generic_message() {
    let response = error_response(&LookupError::Unexpected("boom".to_string()));
    let body = body_of(&response);

    assert_eq!(response["statusCode"], 500);
    assert_eq!(body["message"], UNEXPECTED_FAILURE_MESSAGE);
    assert_eq!(body["error"], "boom");
}
