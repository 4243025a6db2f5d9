//! Shared response envelope types for API handlers.
//!
//! All success responses use a `{ "success": true, "data": ... }`
//! envelope. Use [`ApiResponse`] instead of ad-hoc
//! `serde_json::json!({ "success": true, "data": ... })` to get
//! compile-time type safety and consistent serialization. Error
//! responses come from `ApiError`'s `IntoResponse` impl instead.

use serde::Serialize;

/// Standard `{ "success": true, "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Wrap a payload in the success envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
