use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    /// Fallback for a non-success response whose body is not an error envelope.
    pub fn http_status(status: u16) -> Self {
        Self {
            error: format!("Request failed with status {}", status),
            code: "HTTP_STATUS".to_string(),
            details: Some(serde_json::json!({ "status": status })),
        }
    }

    pub fn is_transport(&self) -> bool {
        self.code == "REQUEST_FAILED"
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;

    #[test]
    fn contact_request_serializes_exactly_three_fields() {
        let req = ContactRequest {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello".into(),
        };
        let v = serde_json::to_value(&req).unwrap();
        let obj = v.as_object().expect("object");
        assert_eq!(obj.len(), 3);
        assert_eq!(v["email"], "ada@example.com");
    }

    #[test]
    fn api_error_helpers_set_expected_codes() {
        let request_failed = ApiError::request_failed("network error");
        assert_eq!(request_failed.code, "REQUEST_FAILED");
        assert_eq!(request_failed.error, "network error");
        assert!(request_failed.details.is_none());
        assert!(request_failed.is_transport());

        let status = ApiError::http_status(502);
        assert_eq!(status.code, "HTTP_STATUS");
        assert!(!status.is_transport());
        assert_eq!(status.details.unwrap()["status"], 502);
    }

    #[test]
    fn api_error_displays_its_error_text() {
        let error = ApiError::http_status(503);
        assert_eq!(format!("{}", error), "Request failed with status 503");
    }

    #[test]
    fn api_error_deserializes_backend_envelope() {
        let raw = serde_json::json!({
            "error": "Validation failed",
            "code": "VALIDATION_ERROR",
            "details": { "errors": ["email: email"] }
        });
        let err: ApiError = serde_json::from_value(raw).unwrap();
        assert_eq!(err.code, "VALIDATION_ERROR");
        assert_eq!(err.details.unwrap()["errors"][0], "email: email");
    }
}
