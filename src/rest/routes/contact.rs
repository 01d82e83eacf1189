//! Contact form submission endpoint.

use axum::{extract::State, Json};
use chrono::Utc;

use crate::notify::format_contact_message;
use crate::rest::dto::{ContactPayload, SubmitResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::routes::is_valid_email;
use crate::rest::state::ApiState;
use crate::types::ContactSubmission;

const COLLECTION: &str = "contact-submissions";
const CONFIRMATION: &str = "Thank you for your message! We'll get back to you within 24 hours.";

/// Accept a contact form submission
#[utoipa::path(
    post,
    path = "/api/contact",
    tag = "Submissions",
    request_body = ContactPayload,
    responses(
        (status = 200, description = "Submission accepted", body = SubmitResponse),
        (status = 400, description = "Missing fields or invalid email", body = ErrorResponse),
        (status = 500, description = "Unexpected failure", body = ErrorResponse)
    )
)]
pub async fn submit(
    State(state): State<ApiState>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<SubmitResponse>, ApiError> {
    if payload.name.is_empty() || payload.email.is_empty() || payload.message.is_empty() {
        return Err(ApiError::MissingRequiredFields(
            "Name, email, and message are required".to_string(),
        ));
    }
    if !is_valid_email(&payload.email) {
        return Err(ApiError::InvalidEmail("Invalid email address".to_string()));
    }

    let submission = ContactSubmission {
        name: payload.name,
        email: payload.email,
        company: payload.company.filter(|c| !c.is_empty()),
        service: payload.service,
        message: payload.message,
        subject: payload.subject.filter(|s| !s.is_empty()),
        deadline: payload.deadline.filter(|d| !d.is_empty()),
        academic_level: payload.academic_level.filter(|l| !l.is_empty()),
        submitted_at: Utc::now(),
    };

    // Persistence and notification are independent best-effort channels;
    // their results are inspected for logging only.
    if let Err(err) = state.store.insert(COLLECTION, &submission.to_document()).await {
        tracing::error!(error = %err, "Failed to persist contact submission");
    }

    let text = format_contact_message(&submission);
    if let Err(err) = state.notifier.send(&text).await {
        tracing::error!(error = %err, "Failed to deliver contact notification");
    }

    Ok(Json(SubmitResponse::accepted(CONFIRMATION)))
}
