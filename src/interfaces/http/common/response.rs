//! Common API response envelope

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard API response wrapper
///
/// Success: `{"success": true, "data": {...}}`.
/// Failure: `{"success": false, "data": null, "error": "message", "code": "not_found"}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Payload; `null` on failure
    pub data: Option<T>,
    /// Human-readable error message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Stable machine-readable error code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            code: None,
        }
    }

    pub fn error(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
            code: Some(code.into()),
        }
    }
}
