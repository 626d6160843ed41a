use serde::{Deserialize, Serialize};

/// Uniform response envelope: `{"success": bool, "message"?: "...", ...payload}`.
///
/// Every endpoint, success or failure, responds with this shape. Failures
/// carry `success: false` and a human-readable `message`; successes flatten
/// their payload next to `success: true`.
#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wraps a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data,
        }
    }
}

impl ApiResponse<Empty> {
    /// A bare `{"success": true}` acknowledgement.
    pub fn ack() -> Self {
        Self::ok(Empty {})
    }
}

/// Empty payload for acknowledge-only responses.
#[derive(Serialize)]
pub struct Empty {}

/// Failure payload rendered by the error layer.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub success: bool,
    pub message: String,
}

impl ErrorDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
