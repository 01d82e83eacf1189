//! Multi-step request-form wizard.
//!
//! Drives a visitor through the five ordered steps of a form schema,
//! collecting a [`DraftRecord`] and refusing to move forward past a step
//! whose required fields are still empty. Submission hands the draft to the
//! [`SubmissionClient`]; on success the wizard reaches its terminal
//! `Submitted` state, on failure the draft stays intact for a retry.

use crate::forms::{DraftRecord, FormSchema, STEP_COUNT};
use crate::gateway::{SubmissionClient, SubmissionError};

#[cfg(test)]
mod tests;

/// Lifecycle of one wizard session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardPhase {
    /// Collecting input; the draft is editable
    Editing,
    /// A submission request is in flight; edits and re-submits are ignored
    Submitting,
    /// Terminal: the submission was accepted, carrying the confirmation text
    Submitted(String),
}

/// Wizard controller for one form session.
pub struct Wizard {
    draft: DraftRecord,
    /// Current step, 1-based, clamped to [1, STEP_COUNT]
    position: u8,
    phase: WizardPhase,
}

impl Wizard {
    pub fn new(schema: &'static FormSchema) -> Self {
        Self {
            draft: DraftRecord::new(schema),
            position: 1,
            phase: WizardPhase::Editing,
        }
    }

    pub fn schema(&self) -> &'static FormSchema {
        self.draft.schema()
    }

    pub fn draft(&self) -> &DraftRecord {
        &self.draft
    }

    pub fn position(&self) -> u8 {
        self.position
    }

    pub fn phase(&self) -> &WizardPhase {
        &self.phase
    }

    /// Display name of the active step.
    pub fn step_name(&self) -> &'static str {
        self.schema().steps[usize::from(self.position) - 1]
    }

    pub fn is_final_step(&self) -> bool {
        self.position == STEP_COUNT
    }

    fn is_editing(&self) -> bool {
        self.phase == WizardPhase::Editing
    }

    /// Overwrite one scalar field. Ignored outside the editing phase.
    pub fn set_field(&mut self, name: &str, value: impl Into<String>) {
        if self.is_editing() {
            self.draft.set(name, value);
        }
    }

    /// Toggle one expertise tag. Ignored outside the editing phase.
    pub fn toggle_expertise(&mut self, tag: &str) {
        if self.is_editing() {
            self.draft.toggle_expertise(tag);
        }
    }

    /// Toggle one stack option within a category. Ignored outside the
    /// editing phase.
    pub fn toggle_stack(&mut self, category: &str, option: &str) {
        if self.is_editing() {
            self.draft.toggle_stack(category, option);
        }
    }

    /// Whether the given step's required fields are all populated.
    /// Depends only on fields belonging to that step.
    pub fn can_advance_step(&self, step: u8) -> bool {
        self.draft.is_step_complete(step)
    }

    /// Whether forward navigation from the active step is allowed.
    pub fn can_advance(&self) -> bool {
        self.can_advance_step(self.position)
    }

    /// Move forward one step if the active step is complete; clamped at the
    /// final step. Callers are expected to check `can_advance()` first, but
    /// the controller stays a no-op either way.
    pub fn advance(&mut self) {
        if self.is_editing() && self.can_advance() && self.position < STEP_COUNT {
            self.position += 1;
        }
    }

    /// Move back one step; clamped at step 1.
    pub fn retreat(&mut self) {
        if self.is_editing() && self.position > 1 {
            self.position -= 1;
        }
    }

    /// Submit the draft through the gateway.
    ///
    /// Only valid on the final step of an editing session. On success the
    /// wizard transitions to the terminal `Submitted` phase and returns the
    /// confirmation message; on failure the phase returns to `Editing` with
    /// the draft and position untouched, so the visitor can retry.
    pub async fn submit(&mut self, client: &SubmissionClient) -> Result<String, SubmissionError> {
        match self.phase {
            WizardPhase::Submitted(_) => return Err(SubmissionError::AlreadySubmitted),
            WizardPhase::Submitting => return Err(SubmissionError::InFlight),
            WizardPhase::Editing => {}
        }
        if !self.is_final_step() || !self.can_advance() {
            return Err(SubmissionError::Incomplete);
        }

        self.phase = WizardPhase::Submitting;
        match client.submit(&self.draft).await {
            Ok(message) => {
                self.phase = WizardPhase::Submitted(message.clone());
                Ok(message)
            }
            Err(err) => {
                self.phase = WizardPhase::Editing;
                Err(err)
            }
        }
    }
}
