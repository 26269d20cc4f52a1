use serde_json::Value;

pub const EXHIBITION_ID_PARAM: &str = "exhibitionID";

/// The non-empty `exhibitionID` query parameter, if present.
#[must_use]
pub fn exhibition_id(payload: &Value) -> Option<String> {
    query_param(payload, EXHIBITION_ID_PARAM).filter(|id| !id.is_empty())
}

/// Reads a query parameter from an API Gateway proxy event.
///
/// `queryStringParameters` is `null` when the request has no query string,
/// so the raw string is used whenever the decoded map is missing.
#[must_use]
pub fn query_param(payload: &Value, name: &str) -> Option<String> {
    if let Some(params) = payload
        .get("queryStringParameters")
        .and_then(Value::as_object)
    {
        return params
            .get(name)
            .and_then(Value::as_str)
            .map(ToString::to_string);
    }

    payload
        .get("rawQueryString")
        .and_then(Value::as_str)
        .and_then(|raw| raw_query_param(raw, name))
}

/// First value of `name` in a raw `a=1&b=2` query string.
#[must_use]
pub fn raw_query_param(raw: &str, name: &str) -> Option<String> {
    raw.split('&')
        .filter(|pair| !pair.is_empty())
        .find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            if decode_component(key)? != name {
                return None;
            }
            decode_component(value)
        })
}

fn decode_component(raw: &str) -> Option<String> {
    urlencoding::decode(&raw.replace('+', " "))
        .ok()
        .map(std::borrow::Cow::into_owned)
}
