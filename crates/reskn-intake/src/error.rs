use thiserror::Error;

use reskn_submission::AssembleError;

use crate::state::{IntakeEvent, IntakeStep};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// The event is never legal from this step (e.g. anything after
    /// `Submitted`).
    #[error("event {event:?} is not valid in step {step:?}")]
    InvalidTransition {
        step: IntakeStep,
        event: IntakeEvent,
    },

    /// The step's validity predicate does not hold yet. The UI reports
    /// this by disabling the continue/submit control, never as a dialog.
    #[error("required fields for {0:?} are not complete")]
    StepIncomplete(IntakeStep),

    #[error(transparent)]
    Assemble(#[from] AssembleError),

    /// Dispatch did not fully deliver; carries the message to show beside
    /// the retry control.
    #[error("{0}")]
    Dispatch(String),
}
