//! The uniform response envelope returned by every handler.

use crate::NoteStoreError;
use serde::{Deserialize, Serialize};

/// A handler response: an HTTP status code and a JSON-encoded body string.
///
/// Serializes as `{"statusCode": ..., "body": "..."}`, the envelope the
/// invocation front end consumes. Callers always receive a well-formed
/// envelope; failures carry an `{"error": <message>}` body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    /// Builds a response with `data` serialized as the JSON body.
    pub fn json<T: Serialize>(status_code: u16, data: &T) -> Self {
        match serde_json::to_string(data) {
            Ok(body) => Self { status_code, body },
            Err(err) => Self::error(500, format!("failed to encode response: {err}")),
        }
    }

    /// Builds an `{"error": <message>}` envelope with the given status.
    pub fn error(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            body: serde_json::json!({ "error": message.into() }).to_string(),
        }
    }

    /// Converts a library error into its envelope, using the error's own
    /// status mapping and message.
    pub fn from_error(err: &NoteStoreError) -> Self {
        Self::error(err.status_code(), err.to_string())
    }
}
