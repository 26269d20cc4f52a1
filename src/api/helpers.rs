//! Response builders for the API Gateway proxy integration.

use serde::Serialize;
use serde_json::{Value, json};

use super::{QUERY_FAILURE_MESSAGE, UNEXPECTED_FAILURE_MESSAGE};
use crate::core::models::ErrorBody;
use crate::errors::LookupError;

/// Wraps a serialized body in the proxy response envelope.
#[must_use]
pub fn response(status_code: u16, body: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": { "Content-Type": "application/json" },
        "body": body
    })
}

/// Returns a 200 OK response with `body` serialized as JSON.
///
/// # Errors
///
/// Returns [`LookupError::Unexpected`] if `body` cannot be serialized.
pub fn ok_json<T: Serialize>(body: &T) -> Result<Value, LookupError> {
    let body = serde_json::to_string(body)
        .map_err(|e| LookupError::Unexpected(format!("Failed to serialize response: {e}")))?;
    Ok(response(200, &body))
}

/// Maps a lookup failure onto its status code and `{message, error}` body.
#[must_use]
pub fn error_response(err: &LookupError) -> Value {
    let body = match err {
        LookupError::Validation(message) => ErrorBody {
            message: message.clone(),
            error: None,
        },
        LookupError::Query { .. } => ErrorBody {
            message: QUERY_FAILURE_MESSAGE.to_string(),
            error: Some(err.to_string()),
        },
        LookupError::Unexpected(detail) => ErrorBody {
            message: UNEXPECTED_FAILURE_MESSAGE.to_string(),
            error: Some(detail.clone()),
        },
    };

    // ErrorBody is two strings; serialization cannot fail.
    let body = serde_json::to_string(&body).unwrap_or_else(|_| "{}".to_string());
    response(err.status_code(), &body)
}
