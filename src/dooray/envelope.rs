//! Dooray response envelope handling.
//!
//! Every Dooray response is wrapped as
//! `{ "header": { "isSuccessful", "resultCode", "resultMessage" }, "result": ... }`.
//! A false (or missing) `isSuccessful` is a failure whatever the HTTP status was.

use serde::Deserialize;
use serde_json::Value;

use super::error::{DoorayError, DoorayResult};

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    header: Header,
    #[serde(default)]
    result: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    #[serde(default)]
    is_successful: bool,
    #[serde(default)]
    result_code: Option<Value>,
    #[serde(default)]
    result_message: Option<String>,
}

/// Parse a response body and return its `result` payload.
pub fn unwrap_envelope(body: &[u8]) -> DoorayResult<Value> {
    let envelope: Envelope = serde_json::from_slice(body)?;

    if !envelope.header.is_successful {
        let code = match envelope.header.result_code {
            Some(Value::String(code)) => code,
            Some(Value::Null) | None => "?".to_string(),
            Some(other) => other.to_string(),
        };
        let message = envelope
            .header
            .result_message
            .unwrap_or_else(|| "unknown error".to_string());
        return Err(DoorayError::RemoteApi { code, message });
    }

    Ok(envelope.result)
}

/// Normalize a result that may be a single record or a list into a list.
///
/// `null`, `[]` and `{}` all count as "nothing".
pub fn into_records(result: Value) -> Vec<Value> {
    match result {
        Value::Null => Vec::new(),
        Value::Array(items) => items,
        Value::Object(map) if map.is_empty() => Vec::new(),
        other => vec![other],
    }
}
