//! API error types and responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Submission API error taxonomy.
///
/// Only validation failures and the catch-all are ever visible to callers;
/// persistence and notification failures are logged server-side and never
/// change the response.
#[derive(Debug)]
pub enum ApiError {
    /// One or more mandatory fields are absent or empty
    MissingRequiredFields(String),
    /// The email field fails the shape check
    InvalidEmail(String),
    /// Anything unexpected; the client gets a generic message
    Internal(String),
}

/// Error response body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::MissingRequiredFields(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InvalidEmail(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Internal(msg) => {
                // Details stay server-side; the client gets a generic message
                tracing::error!(error = %msg, "Submission handler failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to submit request. Please try again.".to_string(),
                )
            }
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

impl From<std::io::Error> for ApiError {
    fn from(err: std::io::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Internal(format!("JSON error: {}", err))
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[tokio::test]
    async fn test_missing_fields_response() {
        let error = ApiError::MissingRequiredFields("Required fields are missing".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(json.error, "Required fields are missing");
    }

    #[tokio::test]
    async fn test_invalid_email_response() {
        let error = ApiError::InvalidEmail("Invalid email address".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let error = ApiError::Internal("database password wrong".to_string());
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let json: ErrorResponse = serde_json::from_slice(&body).unwrap();
        assert!(!json.error.contains("password"));
    }
}
