//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{ContactPayload, HealthResponse, StatusResponse, SubmitResponse};
use crate::rest::error::ErrorResponse;

/// OpenAPI documentation for the intake REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Intake API",
        version = "0.1.4",
        description = "Submission endpoints backing the CodeCraft Labs and Academic Assist sites.",
        license(name = "MIT"),
        contact(name = "codecraft.dev")
    ),
    paths(
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        crate::rest::routes::contact::submit,
        crate::rest::routes::requests::submit_project,
        crate::rest::routes::requests::submit_assignment,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            SubmitResponse,
            ErrorResponse,
            ContactPayload,
        )
    ),
    tags(
        (name = "Health", description = "Health check and status endpoints"),
        (name = "Submissions", description = "Form submission endpoints"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_spec_generates() {
        let spec = ApiDoc::json().expect("Failed to generate OpenAPI spec");
        assert!(spec.contains("Intake API"));
        assert!(spec.contains("/api/health"));
        assert!(spec.contains("/api/project-request"));
        assert!(spec.contains("/api/assignment-request"));
    }

    #[test]
    fn test_openapi_has_all_tags() {
        let spec = ApiDoc::json().expect("Failed to generate OpenAPI spec");
        assert!(spec.contains("\"Health\""));
        assert!(spec.contains("\"Submissions\""));
    }
}
