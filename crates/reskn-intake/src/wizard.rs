use tracing::{info, warn};

use reskn_core::SignatureCapture;
use reskn_notify::{DispatchOutcome, Dispatcher, MailConfig, MailTransport};
use reskn_submission::{SubmissionRecord, assemble};

use crate::data::IntakeData;
use crate::error::IntakeError;
use crate::state::{IntakeEvent, IntakeStep};

/// A record whose dispatch has not fully completed, kept so a retry
/// reuses the same reference id and skips copies already delivered.
#[derive(Debug, Clone)]
struct PendingDispatch {
    record: SubmissionRecord,
    progress: DispatchOutcome,
}

/// One patient's journey through the intake form. Owns the accumulated
/// form data and the current step; the UI mutates `data` directly and
/// drives transitions through the methods here. There is exactly one
/// wizard per session and at most one dispatch in flight, which the UI
/// enforces by disabling the submit control while awaiting.
#[derive(Debug, Default)]
pub struct IntakeWizard {
    step: IntakeStep,
    pub data: IntakeData,
    pending: Option<PendingDispatch>,
    completed: Option<SubmissionRecord>,
}

impl IntakeWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> IntakeStep {
        self.step
    }

    /// The sealed record once submission has completed.
    pub fn submission(&self) -> Option<&SubmissionRecord> {
        self.completed.as_ref()
    }

    /// Reference id of a record awaiting a dispatch retry, if any.
    pub fn pending_reference_id(&self) -> Option<&str> {
        self.pending.as_ref().map(|p| p.record.reference_id.as_str())
    }

    pub fn continue_to_assessment(&mut self) -> Result<(), IntakeError> {
        self.step = self.step.transition(IntakeEvent::Continue, &self.data)?;
        Ok(())
    }

    pub fn back_to_details(&mut self) -> Result<(), IntakeError> {
        self.step = self.step.transition(IntakeEvent::Back, &self.data)?;
        Ok(())
    }

    /// Assemble and dispatch the submission. On the first attempt this
    /// seals a new record; a retry after failure reuses the pending record
    /// (same reference id) and resumes from the delivery progress already
    /// made, so the clinic never receives a duplicate copy.
    ///
    /// On full delivery the wizard moves to `Submitted`; on any failure it
    /// stays in `SkinAssessment` with the reason in the returned error.
    pub async fn submit<M: MailTransport>(
        &mut self,
        config: &MailConfig,
        transport: &M,
        capture: &SignatureCapture,
    ) -> Result<&SubmissionRecord, IntakeError> {
        if self.step != IntakeStep::SkinAssessment {
            return Err(IntakeError::InvalidTransition {
                step: self.step,
                event: IntakeEvent::DispatchSucceeded,
            });
        }
        if !self.data.step2_valid() {
            return Err(IntakeError::StepIncomplete(self.step));
        }

        let pending = match self.pending.take() {
            Some(pending) => {
                info!(reference_id = %pending.record.reference_id, "retrying dispatch");
                pending
            }
            None => PendingDispatch {
                record: assemble(self.data.snapshot(), capture)?,
                progress: DispatchOutcome::default(),
            },
        };

        let outcome = Dispatcher::new(config, transport)
            .resume(&pending.record, &pending.progress)
            .await;

        if outcome.is_complete() {
            self.step = self.step.transition(IntakeEvent::DispatchSucceeded, &self.data)?;
            info!(reference_id = %pending.record.reference_id, "submission dispatched");
            Ok(self.completed.insert(pending.record))
        } else {
            let reason = outcome
                .error
                .clone()
                .unwrap_or_else(|| "Failed to send email".to_string());
            warn!(reference_id = %pending.record.reference_id, reason = %reason, "dispatch incomplete");
            self.pending = Some(PendingDispatch {
                record: pending.record,
                progress: outcome,
            });
            Err(IntakeError::Dispatch(reason))
        }
    }
}
