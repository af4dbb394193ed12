use axum::http::HeaderMap;
use axum::http::header::CONTENT_TYPE;
use serde_json::Value;

use crate::core::error::ApiError;
use crate::features::math::MAX_FIBONACCI_TERMS;
use crate::features::ops::dto::Operation;

pub(super) const NO_RECOGNIZED_KEY_MESSAGE: &str =
    "Request must contain exactly one of: fibonacci, prime, lcm, hcf, AI";
const EMPTY_BODY_MESSAGE: &str = "Request body is empty";

pub(super) fn decode_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    if !is_json_content_type(content_type) {
        return Err(ApiError::unsupported_media_type());
    }

    if body.is_empty() {
        return Err(ApiError::bad_request(EMPTY_BODY_MESSAGE.to_string()));
    }

    serde_json::from_slice(body)
        .map_err(|err| ApiError::bad_request(format!("Request body is not valid JSON: {err}")))
}

fn is_json_content_type(value: &str) -> bool {
    let media_type = value.split(';').next().unwrap_or("").trim();
    media_type.eq_ignore_ascii_case("application/json")
        || media_type.to_ascii_lowercase().ends_with("+json")
}

/// Resolves the decoded body to one operation. Keys are checked in a fixed
/// priority order and the first match wins; additional recognized keys in the
/// same payload are ignored.
pub(super) fn select_operation(body: &Value) -> Result<Operation, ApiError> {
    let map = match body {
        Value::Object(map) if !map.is_empty() => map,
        Value::Object(_) | Value::Null => {
            return Err(ApiError::bad_request(EMPTY_BODY_MESSAGE.to_string()));
        }
        _ => return Err(ApiError::bad_request(NO_RECOGNIZED_KEY_MESSAGE.to_string())),
    };

    if let Some(value) = map.get("fibonacci") {
        return parse_fibonacci(value);
    }
    if let Some(value) = map.get("prime") {
        return Ok(Operation::Prime(parse_integer_list(value, "prime", false)?));
    }
    if let Some(value) = map.get("lcm") {
        return Ok(Operation::Lcm(parse_integer_list(value, "lcm", true)?));
    }
    if let Some(value) = map.get("hcf") {
        return Ok(Operation::Hcf(parse_integer_list(value, "hcf", true)?));
    }
    if let Some(value) = map.get("AI") {
        return parse_question(value);
    }

    Err(ApiError::bad_request(NO_RECOGNIZED_KEY_MESSAGE.to_string()))
}

fn parse_fibonacci(value: &Value) -> Result<Operation, ApiError> {
    let count = value.as_u64().ok_or_else(|| {
        ApiError::validation("fibonacci must be a non-negative integer".to_string())
    })?;

    if count > u64::from(MAX_FIBONACCI_TERMS) {
        return Err(ApiError::validation(format!(
            "fibonacci must not exceed {MAX_FIBONACCI_TERMS}"
        )));
    }

    Ok(Operation::Fibonacci(count as u32))
}

fn parse_integer_list(
    value: &Value,
    field: &str,
    require_non_empty: bool,
) -> Result<Vec<i64>, ApiError> {
    let description = if require_non_empty {
        "a non-empty array of integers"
    } else {
        "an array of integers"
    };
    let invalid = || ApiError::validation(format!("{field} must be {description}"));

    let items = value.as_array().ok_or_else(|| invalid())?;
    if require_non_empty && items.is_empty() {
        return Err(invalid());
    }

    items
        .iter()
        .map(|item| item.as_i64().ok_or_else(|| invalid()))
        .collect()
}

fn parse_question(value: &Value) -> Result<Operation, ApiError> {
    let question = value
        .as_str()
        .ok_or_else(|| ApiError::validation("AI must be a string question".to_string()))?;
    Ok(Operation::Ai(question.to_string()))
}
