//! Tests for the request-form wizard

use super::{Wizard, WizardPhase};
use crate::forms::{assignment_request, project_request, STEP_COUNT};
use std::collections::BTreeSet;

fn filled_project_wizard() -> Wizard {
    let mut wizard = Wizard::new(project_request());
    wizard.set_field("serviceType", "demo-to-production");
    wizard.set_field("projectTitle", "Ship the analytics MVP");
    wizard.set_field("projectDescription", "Prototype needs real infra");
    wizard.set_field("timeline", "1-month");
    wizard.set_field("budget", "15k-50k");
    wizard.set_field("name", "Amit");
    wizard.set_field("email", "amit@example.com");
    wizard
}

#[test]
fn test_new_wizard_starts_at_step_one() {
    let wizard = Wizard::new(project_request());
    assert_eq!(wizard.position(), 1);
    assert_eq!(*wizard.phase(), WizardPhase::Editing);
    assert_eq!(wizard.step_name(), "Service Type");
}

#[test]
fn test_step_one_gated_on_classification() {
    let mut wizard = Wizard::new(project_request());
    assert!(!wizard.can_advance());

    wizard.advance();
    assert_eq!(wizard.position(), 1, "advance without validity is a no-op");

    wizard.set_field("serviceType", "consulting");
    assert!(wizard.can_advance());
    wizard.advance();
    assert_eq!(wizard.position(), 2);
}

#[test]
fn test_step_two_requires_title_and_description() {
    let mut wizard = Wizard::new(assignment_request());
    wizard.set_field("assignmentType", "research-paper");
    wizard.advance();

    wizard.set_field("assignmentTitle", "Groundwater modeling review");
    assert!(!wizard.can_advance());
    wizard.set_field("assignmentDescription", "Survey of MODFLOW literature");
    assert!(wizard.can_advance());
}

#[test]
fn test_step_three_is_always_passable() {
    let wizard = Wizard::new(project_request());
    assert!(wizard.can_advance_step(3));
}

#[test]
fn test_step_validity_ignores_other_steps() {
    let mut wizard = Wizard::new(project_request());
    // Filling contact fields must not unlock step 1
    wizard.set_field("name", "Lior");
    wizard.set_field("email", "lior@example.com");
    assert!(!wizard.can_advance_step(1));
    assert!(wizard.can_advance_step(5));
}

#[test]
fn test_retreat_clamped_at_first_step() {
    let mut wizard = Wizard::new(project_request());
    wizard.retreat();
    assert_eq!(wizard.position(), 1);
}

#[test]
fn test_advance_clamped_at_final_step() {
    let mut wizard = filled_project_wizard();
    for _ in 0..10 {
        wizard.advance();
    }
    assert_eq!(wizard.position(), STEP_COUNT);
}

#[test]
fn test_back_and_forward_navigation() {
    let mut wizard = filled_project_wizard();
    wizard.advance();
    wizard.advance();
    assert_eq!(wizard.position(), 3);
    wizard.retreat();
    assert_eq!(wizard.position(), 2);
    wizard.advance();
    assert_eq!(wizard.position(), 3);
}

#[test]
fn test_toggle_twice_restores_membership() {
    let mut wizard = Wizard::new(project_request());
    wizard.toggle_expertise("security");
    wizard.toggle_stack("Frontend", "Svelte");
    wizard.toggle_expertise("security");
    wizard.toggle_stack("Frontend", "Svelte");

    assert!(wizard.draft().expertise().is_empty());
    assert!(wizard
        .draft()
        .stack()
        .get("Frontend")
        .map_or(true, BTreeSet::is_empty));
}

#[tokio::test]
async fn test_submit_rejected_before_final_step() {
    let mut wizard = filled_project_wizard();
    let client = crate::gateway::SubmissionClient::new("http://127.0.0.1:9").unwrap();

    let result = wizard.submit(&client).await;
    assert!(matches!(
        result,
        Err(crate::gateway::SubmissionError::Incomplete)
    ));
    assert_eq!(*wizard.phase(), WizardPhase::Editing);
}

#[test]
fn test_submitted_phase_freezes_draft() {
    let mut wizard = filled_project_wizard();
    // Force the terminal phase the way a successful gateway call would
    wizard.phase = WizardPhase::Submitted("ok".to_string());

    wizard.set_field("projectTitle", "late edit");
    wizard.toggle_expertise("cloud");
    wizard.advance();
    wizard.retreat();

    assert_eq!(wizard.draft().get("projectTitle"), "Ship the analytics MVP");
    assert!(wizard.draft().expertise().is_empty());
    assert_eq!(wizard.position(), 1);
}
