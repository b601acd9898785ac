//! The uniform response envelope returned by every network-facing operation.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Result of a management API call.
///
/// Every outcome of a request - application success, application rejection,
/// and transport failure - is normalized into this envelope. Transport
/// failures carry synthesized status codes: 408 for timeouts, 503 for
/// connection failures, 500 for anything else.
///
/// Invariants: `success == true` implies `message` is absent;
/// `success == false` implies `message` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    /// Whether the call reached the server and was accepted.
    pub success: bool,

    /// Parsed response body on success. A non-JSON body is carried as a
    /// JSON string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,

    /// Human-readable failure description, suitable for direct display.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// HTTP status code, or a synthesized code for transport failures.
    pub status_code: u16,
}

impl ApiResponse {
    /// Build a success envelope.
    pub fn ok(data: Value, status_code: u16) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            status_code,
        }
    }

    /// Build a failure envelope.
    pub fn failure(message: impl Into<String>, status_code: u16) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
            status_code,
        }
    }
}
