//! Error response body shared by every failing endpoint.

use serde::Serialize;

/// JSON error body: the HTTP status repeated in `statusCode` plus a
/// human-readable message
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub status_code: u16,
    pub message: String,

    /// Extra context (e.g. field-level validation failures)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_field_is_camel_case() {
        let body = serde_json::to_value(ErrorResponse::new(404, "Product not found")).unwrap();
        assert_eq!(body["statusCode"], 404);
        assert_eq!(body["message"], "Product not found");
        assert!(body.get("details").is_none());
    }
}
