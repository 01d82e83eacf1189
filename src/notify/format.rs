//! Pure message formatters for submission notifications.
//!
//! These take the envelope and the schema's label tables as explicit inputs
//! so they can be tested in isolation; no clock or configuration access.

use crate::forms::FormKind;
use crate::types::{ContactSubmission, RequestSubmission};

/// Render a contact-form submission as a chat message.
pub fn format_contact_message(submission: &ContactSubmission) -> String {
    let timestamp = submission.submitted_at.format("%b %-d, %Y %H:%M UTC");

    let mut message = format!(
        "\u{1F4E7} *New Contact Form Submission*\n\n\
         *Name:* {}\n\
         *Email:* {}\n",
        submission.name, submission.email
    );
    if let Some(company) = &submission.company {
        message.push_str(&format!("*Company:* {}\n", company));
    }
    message.push_str(&format!("*Service Interested In:* {}\n", submission.service));
    if let Some(subject) = &submission.subject {
        message.push_str(&format!("*Subject:* {}\n", subject));
    }
    if let Some(deadline) = &submission.deadline {
        message.push_str(&format!("*Deadline:* {}\n", deadline));
    }
    if let Some(level) = &submission.academic_level {
        message.push_str(&format!("*Academic Level:* {}\n", level));
    }
    message.push_str(&format!(
        "\n*Message:*\n{}\n\n_Submitted: {}_",
        submission.message, timestamp
    ));
    message
}

/// Render a request-form submission as a categorized chat message, remapping
/// classification and tier codes to display names. Unknown codes pass through
/// verbatim.
pub fn format_request_message(submission: &RequestSubmission) -> String {
    let schema = submission.schema;
    let timestamp = submission.submitted_at.format("%b %-d, %Y %H:%M UTC");

    let heading = match schema.kind {
        FormKind::ProjectRequest => "\u{1F680} *New Project Request*",
        FormKind::AssignmentRequest => "\u{1F393} *New Assignment Request*",
    };

    let classification = schema.classification_label(submission.get(schema.classification_field));
    let tier = schema.tier_label(submission.get(schema.tier_field));
    let schedule = submission.get(schema.schedule_field);
    let (title_field, description_field) = match schema.kind {
        FormKind::ProjectRequest => ("projectTitle", "projectDescription"),
        FormKind::AssignmentRequest => ("assignmentTitle", "assignmentDescription"),
    };

    let mut message = format!(
        "{heading}\n\n\
         *Type:* {classification}\n\
         *Title:* {}\n\
         *Client:* {} ({})\n",
        submission.get(title_field),
        submission.get("name"),
        submission.get("email"),
    );

    let affiliation = match schema.kind {
        FormKind::ProjectRequest => ("Company", submission.get("company")),
        FormKind::AssignmentRequest => ("University", submission.get("university")),
    };
    if !affiliation.1.is_empty() {
        message.push_str(&format!("*{}:* {}\n", affiliation.0, affiliation.1));
    }

    message.push_str(&format!(
        "*Timeline:* {schedule}\n*{}:* {tier}\n",
        match schema.kind {
            FormKind::ProjectRequest => "Budget",
            FormKind::AssignmentRequest => "Academic Level",
        }
    ));

    message.push_str(&format!(
        "\n*Description:*\n{}\n",
        submission.get(description_field)
    ));

    message.push_str("\n*Expertise Needed:*\n");
    if submission.expertise.is_empty() {
        message.push_str("  \u{2022} None specified\n");
    } else {
        for tag in &submission.expertise {
            message.push_str(&format!("  \u{2022} {}\n", tag));
        }
    }

    let stack_summary: Vec<String> = submission
        .stack
        .iter()
        .filter(|(_, options)| !options.is_empty())
        .map(|(category, options)| {
            let joined = options.iter().cloned().collect::<Vec<_>>().join(", ");
            format!("  \u{2022} {}: {}", category, joined)
        })
        .collect();
    if !stack_summary.is_empty() {
        message.push_str(&format!(
            "\n*{}:*\n{}\n",
            match schema.kind {
                FormKind::ProjectRequest => "Current/Preferred Stack",
                FormKind::AssignmentRequest => "Required Sources",
            },
            stack_summary.join("\n")
        ));
    }

    message.push_str(&format!("\n_Submitted: {}_", timestamp));
    message
}
