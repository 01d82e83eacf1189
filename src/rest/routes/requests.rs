//! Request-form submission endpoints (project and assignment variants).
//!
//! Both routes run the same schema-driven handler: normalize the payload,
//! validate, then attempt persistence and notification as independent
//! best-effort side effects before acknowledging.

use axum::{extract::State, Json};
use serde_json::Value;

use crate::forms::{assignment_request, project_request, FormSchema};
use crate::notify::format_request_message;
use crate::rest::dto::SubmitResponse;
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::routes::is_valid_email;
use crate::rest::state::ApiState;
use crate::types::RequestSubmission;

/// Accept a project request submission
#[utoipa::path(
    post,
    path = "/api/project-request",
    tag = "Submissions",
    responses(
        (status = 200, description = "Submission accepted", body = SubmitResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn submit_project(
    State(state): State<ApiState>,
    Json(payload): Json<Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    submit(project_request(), &state, &payload).await
}

/// Accept an assignment request submission
#[utoipa::path(
    post,
    path = "/api/assignment-request",
    tag = "Submissions",
    responses(
        (status = 200, description = "Submission accepted", body = SubmitResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn submit_assignment(
    State(state): State<ApiState>,
    Json(payload): Json<Value>,
) -> Result<Json<SubmitResponse>, ApiError> {
    submit(assignment_request(), &state, &payload).await
}

async fn submit(
    schema: &'static FormSchema,
    state: &ApiState,
    payload: &Value,
) -> Result<Json<SubmitResponse>, ApiError> {
    let submission = RequestSubmission::from_payload(schema, payload);

    let missing = submission.missing_required_fields();
    if !missing.is_empty() {
        tracing::debug!(form = schema.title, fields = ?missing, "Rejecting incomplete submission");
        return Err(ApiError::MissingRequiredFields(
            "Required fields are missing".to_string(),
        ));
    }
    if !is_valid_email(submission.get("email")) {
        return Err(ApiError::InvalidEmail("Invalid email address".to_string()));
    }

    // Persistence and notification are independent best-effort channels;
    // one failing must not keep the other from being attempted, and neither
    // changes the response.
    if let Err(err) = state
        .store
        .insert(schema.collection, &submission.to_document())
        .await
    {
        tracing::error!(form = schema.title, error = %err, "Failed to persist submission");
    }

    let text = format_request_message(&submission);
    if let Err(err) = state.notifier.send(&text).await {
        tracing::error!(form = schema.title, error = %err, "Failed to deliver notification");
    }

    Ok(Json(SubmitResponse::accepted(schema.confirmation)))
}
