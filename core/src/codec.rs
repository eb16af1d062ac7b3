//! Request flattening and response decoding.
//!
//! # Design
//! Request types derive `Serialize` with their logical field names. The
//! encoder serializes them to a JSON object, drops every `null` (an unset
//! `Option`), renders scalars as text and renames keys with
//! [`naming::to_wire`]. Explicit values, including `false` and `0`, always
//! reach the wire. Response types carry their wire names as serde
//! attributes, so decoding is a plain `serde_json` call.
//!
//! Caller-supplied path segments (log names, user ids) go through
//! [`path_segment`] before they are formatted into a route.

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, Result};
use crate::http::HttpResponse;
use crate::naming;

/// Flatten a request into wire-named query parameters.
///
/// Fails with [`ApiError::Serialization`] if the request is not a struct or
/// one of its fields is an array or nested object.
pub fn encode_query<T: Serialize + ?Sized>(request: &T) -> Result<Vec<(String, String)>> {
    let value = serde_json::to_value(request).map_err(|e| ApiError::Serialization(e.to_string()))?;
    let fields = match value {
        Value::Object(fields) => fields,
        Value::Null => return Ok(Vec::new()),
        other => {
            return Err(ApiError::Serialization(format!(
                "query parameters must come from a struct, got {other}"
            )))
        }
    };

    let mut pairs = Vec::with_capacity(fields.len());
    for (key, value) in fields {
        let text = match value {
            Value::Null => continue,
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => s,
            Value::Array(_) | Value::Object(_) => {
                return Err(ApiError::Serialization(format!(
                    "query parameter `{key}` must be a scalar"
                )))
            }
        };
        pairs.push((naming::to_wire(&key), text));
    }
    Ok(pairs)
}

/// Percent-encode one path segment. `/`, spaces and non-ASCII are escaped.
pub fn path_segment(segment: &str) -> Cow<'_, str> {
    urlencoding::encode(segment)
}

/// Decode a JSON body into `T`.
pub fn decode_json<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    Ok(serde_json::from_str(&response.body)?)
}

/// Decode a JSON body, mapping `204 No Content` to `None` without reading it.
pub fn decode_optional<T: DeserializeOwned>(response: &HttpResponse) -> Result<Option<T>> {
    if response.status == 204 {
        return Ok(None);
    }
    decode_json(response).map(Some)
}
