use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use ts_rs::TS;

use reskn_submission::SubmissionRecord;

use crate::config::MailConfig;
use crate::error::NotifyError;
use crate::mailer::{MailTransport, OutboundEmail};
use crate::report::render_report;

/// Destination for the clinic's copy of every submission.
pub const CLINIC_EMAIL: &str = "nori@resknclinic.co.uk";
pub const CLINIC_NAME: &str = "ReSKN Clinic";

/// Per-copy delivery state for one submission. A failed dispatch reports
/// which copies made it out, so the caller can show an accurate message
/// and a retry can resume without duplicating the clinic email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DispatchOutcome {
    pub clinic_delivered: bool,
    pub patient_delivered: bool,
    pub error: Option<String>,
}

impl DispatchOutcome {
    pub fn is_complete(&self) -> bool {
        self.clinic_delivered && self.patient_delivered
    }
}

/// Sends a submission's report twice through the mail relay: clinic copy
/// first, then the patient copy. One attempt per call; retrying is the
/// caller's decision, driven by the returned outcome.
pub struct Dispatcher<'a, M> {
    config: &'a MailConfig,
    transport: &'a M,
}

impl<'a, M: MailTransport> Dispatcher<'a, M> {
    pub fn new(config: &'a MailConfig, transport: &'a M) -> Self {
        Self { config, transport }
    }

    pub async fn dispatch(&self, record: &SubmissionRecord) -> DispatchOutcome {
        self.resume(record, &DispatchOutcome::default()).await
    }

    /// Dispatch, skipping copies `prior` already delivered. The patient
    /// copy is only attempted once the clinic copy has gone out; a clinic
    /// failure short-circuits.
    pub async fn resume(&self, record: &SubmissionRecord, prior: &DispatchOutcome) -> DispatchOutcome {
        let mut outcome = DispatchOutcome {
            clinic_delivered: prior.clinic_delivered,
            patient_delivered: prior.patient_delivered,
            error: None,
        };

        if !self.config.is_configured() {
            warn!("mail relay not configured; dispatch refused");
            outcome.error = Some(NotifyError::NotConfigured.to_string());
            return outcome;
        }

        let report = render_report(record);

        if !outcome.clinic_delivered {
            match self.send(&clinic_copy(record, &report)).await {
                Ok(()) => {
                    info!(reference_id = %record.reference_id, "clinic copy sent");
                    outcome.clinic_delivered = true;
                }
                Err(err) => {
                    warn!(reference_id = %record.reference_id, error = %err, "clinic copy failed");
                    outcome.error = Some(err.to_string());
                    return outcome;
                }
            }
        }

        if !outcome.patient_delivered {
            match self.send(&patient_copy(record, &report)).await {
                Ok(()) => {
                    info!(reference_id = %record.reference_id, "patient copy sent");
                    outcome.patient_delivered = true;
                }
                Err(err) => {
                    warn!(reference_id = %record.reference_id, error = %err, "patient copy failed");
                    outcome.error = Some(err.to_string());
                }
            }
        }

        outcome
    }

    async fn send(&self, email: &OutboundEmail) -> Result<(), NotifyError> {
        self.transport
            .send(&self.config.service_id, &self.config.template_id, email)
            .await
            .map_err(|e| NotifyError::Send(e.0))
    }
}

fn clinic_copy(record: &SubmissionRecord, report: &str) -> OutboundEmail {
    OutboundEmail {
        to: CLINIC_EMAIL.to_string(),
        from_name: record.patient.full_name.clone(),
        reply_to: record.patient.email.clone(),
        subject: format!(
            "ReSKN Patch Test Form – {} – {}",
            record.patient.full_name, record.reference_id
        ),
        message: report.to_string(),
        signature_image: record.signature.signature_image.clone(),
        reference_id: record.reference_id.clone(),
    }
}

fn patient_copy(record: &SubmissionRecord, report: &str) -> OutboundEmail {
    OutboundEmail {
        to: record.patient.email.clone(),
        from_name: CLINIC_NAME.to_string(),
        reply_to: CLINIC_EMAIL.to_string(),
        subject: format!("Your ReSKN Patch Test Form – {}", record.reference_id),
        message: report.to_string(),
        signature_image: record.signature.signature_image.clone(),
        reference_id: record.reference_id.clone(),
    }
}
