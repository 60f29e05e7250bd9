use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::data::IntakeData;
use crate::error::IntakeError;

/// The wizard's three states. `Submitted` is terminal: post-submission
/// editing is not supported, so no event leaves it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum IntakeStep {
    #[default]
    MedicalAndConsent,
    SkinAssessment,
    Submitted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntakeEvent {
    Continue,
    Back,
    /// Raised by the submit driver once both notification copies are out.
    DispatchSucceeded,
}

impl IntakeStep {
    /// Pure transition function: the next step for `event` given the
    /// current form data, or a typed refusal. No side effects, so gating
    /// rules are testable in isolation.
    pub fn transition(self, event: IntakeEvent, data: &IntakeData) -> Result<IntakeStep, IntakeError> {
        match (self, event) {
            (IntakeStep::MedicalAndConsent, IntakeEvent::Continue) => {
                if data.step1_valid() {
                    Ok(IntakeStep::SkinAssessment)
                } else {
                    Err(IntakeError::StepIncomplete(self))
                }
            }
            // Going back never loses data; the answers stay in `data`.
            (IntakeStep::SkinAssessment, IntakeEvent::Back) => Ok(IntakeStep::MedicalAndConsent),
            (IntakeStep::SkinAssessment, IntakeEvent::DispatchSucceeded) => {
                if data.step2_valid() {
                    Ok(IntakeStep::Submitted)
                } else {
                    Err(IntakeError::StepIncomplete(self))
                }
            }
            (step, event) => Err(IntakeError::InvalidTransition { step, event }),
        }
    }
}
