use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};
use thiserror::Error;

use crate::services::notifier::NotifyError;

/// Wire shape shared by every non-2xx response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("contact submission failed validation")]
    Validation(Vec<String>),
    #[error(transparent)]
    InternalServerError(anyhow::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::Validation(_) => "VALIDATION_ERROR",
            AppError::InternalServerError(_) => "INTERNAL_SERVER_ERROR",
        }
    }

    fn into_body(self) -> ErrorResponse {
        let code = self.code();
        match self {
            AppError::BadRequest(reason) => ErrorResponse {
                error: reason,
                code,
                details: None,
            },
            AppError::Validation(errors) => ErrorResponse {
                error: "Validation failed".into(),
                code,
                details: Some(json!({ "errors": errors })),
            },
            AppError::InternalServerError(err) => {
                // Cause stays in the log; clients only see the generic text.
                tracing::error!(error = ?err, "contact request failed");
                ErrorResponse {
                    error: "Internal server error".into(),
                    code,
                    details: None,
                }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(self.into_body())).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalServerError(err)
    }
}

impl From<NotifyError> for AppError {
    fn from(err: NotifyError) -> Self {
        AppError::InternalServerError(err.into())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| format!("{field}: {}", e.code)))
            .collect();
        messages.sort();
        AppError::Validation(messages)
    }
}
