use std::sync::Mutex;

use reskn_core::{MedicalAnswer, SignatureCapture};
use reskn_fitzpatrick::{QuestionId, SkinType};
use reskn_intake::{IntakeError, IntakeStep, IntakeWizard};
use reskn_notify::{MailConfig, MailError, MailTransport, OutboundEmail};

/// Records every invocation; calls whose index is listed in `fail_calls`
/// return a relay error instead of delivering.
struct RecordingTransport {
    calls: Mutex<Vec<OutboundEmail>>,
    fail_calls: Vec<usize>,
}

impl RecordingTransport {
    fn reliable() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_calls: Vec::new(),
        }
    }

    fn failing_on(calls: &[usize]) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_calls: calls.to_vec(),
        }
    }

    fn sent(&self) -> Vec<OutboundEmail> {
        self.calls.lock().unwrap().clone()
    }
}

impl MailTransport for RecordingTransport {
    async fn send(
        &self,
        _service_id: &str,
        _template_id: &str,
        email: &OutboundEmail,
    ) -> Result<(), MailError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push(email.clone());
        if self.fail_calls.contains(&index) {
            return Err(MailError("relay unavailable".to_string()));
        }
        Ok(())
    }
}

fn configured() -> MailConfig {
    MailConfig {
        public_key: "pk_live_0001".to_string(),
        ..MailConfig::default()
    }
}

fn capture() -> SignatureCapture {
    SignatureCapture {
        image: "data:image/png;base64,CCCC".to_string(),
        typed_name: "Alex Reid".to_string(),
        consent_confirmed: true,
    }
}

fn wizard_at_assessment() -> IntakeWizard {
    let mut wizard = IntakeWizard::new();
    wizard.data.patient.full_name = "Alex Reid".to_string();
    wizard.data.patient.date_of_birth = "1990-01-15".to_string();
    wizard.data.patient.email = "alex@example.com".to_string();
    wizard.data.patient.mobile = "07700 900000".to_string();
    wizard.data.treatment.patch_test_areas.push("Face".to_string());
    wizard.data.consent.accurate_info = true;
    wizard.data.consent.understands_patch_test = true;
    wizard.data.consent.follows_aftercare = true;
    wizard.data.consent.understands_postponement = true;
    wizard.data.has_signature = true;
    wizard.data.typed_signature_name = "Alex Reid".to_string();
    wizard.data.signature_consent = true;
    wizard.continue_to_assessment().unwrap();
    wizard
}

fn answer_all(wizard: &mut IntakeWizard, score: u32) {
    for id in QuestionId::ALL {
        wizard.data.answers.record(id, score).unwrap();
    }
}

#[test]
fn warnings_follow_the_flagged_safety_answers() {
    let mut wizard = IntakeWizard::new();
    assert!(!wizard.data.has_warnings());

    // Only the flagged questions raise the banner.
    wizard.data.medical.diabetes = MedicalAnswer::yes();
    assert!(!wizard.data.has_warnings());

    wizard.data.laser_safety.fake_tan = MedicalAnswer::yes();
    assert!(wizard.data.has_warnings());

    wizard.data.laser_safety.fake_tan = MedicalAnswer::no();
    wizard.data.medical.pregnant_or_breastfeeding = MedicalAnswer::yes();
    assert!(wizard.data.has_warnings());
}

#[test]
fn preview_is_withheld_until_the_first_answer() {
    let mut wizard = wizard_at_assessment();
    assert_eq!(wizard.data.preview(), None);

    wizard.data.answers.record(QuestionId::EyeColor, 4).unwrap();
    let preview = wizard.data.preview().unwrap();
    assert_eq!(preview.total_score, 4);
    assert_eq!(preview.skin_type, SkinType::TypeI);
}

#[test]
fn going_back_retains_recorded_answers() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 2);
    wizard.back_to_details().unwrap();
    assert_eq!(wizard.step(), IntakeStep::MedicalAndConsent);
    assert!(wizard.data.answers.is_complete());
    wizard.continue_to_assessment().unwrap();
    assert_eq!(wizard.step(), IntakeStep::SkinAssessment);
}

#[tokio::test]
async fn submit_seals_the_record_and_reaches_the_terminal_step() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 3);

    let transport = RecordingTransport::reliable();
    let record = wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap()
        .clone();

    assert_eq!(wizard.step(), IntakeStep::Submitted);
    assert_eq!(record.result.total_score, 30);
    assert_eq!(record.result.skin_type, SkinType::TypeV);
    assert!(record.reference_id.starts_with("RSKN-PT-"));
    assert_eq!(transport.sent().len(), 2);
    assert_eq!(wizard.submission().map(|r| r.reference_id.clone()), Some(record.reference_id));
}

#[tokio::test]
async fn submit_is_refused_while_the_assessment_is_incomplete() {
    let mut wizard = wizard_at_assessment();
    wizard.data.answers.record(QuestionId::EyeColor, 1).unwrap();

    let transport = RecordingTransport::reliable();
    let err = wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap_err();
    assert_eq!(err, IntakeError::StepIncomplete(IntakeStep::SkinAssessment));
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn submit_is_refused_outside_the_assessment_step() {
    let mut wizard = IntakeWizard::new();
    let transport = RecordingTransport::reliable();
    let err = wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap_err();
    assert!(matches!(err, IntakeError::InvalidTransition { .. }));
}

#[tokio::test]
async fn dispatch_failure_keeps_the_wizard_retryable() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 1);

    let transport = RecordingTransport::failing_on(&[0]);
    let err = wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap_err();
    assert_eq!(err, IntakeError::Dispatch("relay unavailable".to_string()));
    assert_eq!(wizard.step(), IntakeStep::SkinAssessment);
    assert!(wizard.submission().is_none());
    assert!(wizard.pending_reference_id().is_some());
}

#[tokio::test]
async fn unconfigured_relay_surfaces_the_fixed_message() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 0);

    let transport = RecordingTransport::reliable();
    let err = wizard
        .submit(&MailConfig::default(), &transport, &capture())
        .await
        .unwrap_err();
    assert_eq!(
        err,
        IntakeError::Dispatch("Email service not configured. Please contact the clinic.".to_string())
    );
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn retry_reuses_the_original_reference_id() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 2);

    // First attempt: the clinic copy fails outright.
    let transport = RecordingTransport::failing_on(&[0]);
    wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap_err();
    let first_attempt_id = transport.sent()[0].reference_id.clone();
    assert_eq!(wizard.pending_reference_id(), Some(first_attempt_id.as_str()));

    // Retry: both copies go out under the same reference id.
    let retry_transport = RecordingTransport::reliable();
    let record = wizard
        .submit(&configured(), &retry_transport, &capture())
        .await
        .unwrap()
        .clone();
    assert_eq!(record.reference_id, first_attempt_id);
    let resent = retry_transport.sent();
    assert_eq!(resent.len(), 2);
    assert!(resent.iter().all(|e| e.reference_id == first_attempt_id));
}

#[tokio::test]
async fn retry_after_partial_failure_skips_the_clinic_copy() {
    let mut wizard = wizard_at_assessment();
    answer_all(&mut wizard, 4);

    // Clinic copy delivered, patient copy failed.
    let transport = RecordingTransport::failing_on(&[1]);
    let err = wizard
        .submit(&configured(), &transport, &capture())
        .await
        .unwrap_err();
    assert_eq!(err, IntakeError::Dispatch("relay unavailable".to_string()));
    assert_eq!(transport.sent().len(), 2);

    // The retry only re-sends the patient copy.
    let retry_transport = RecordingTransport::reliable();
    wizard
        .submit(&configured(), &retry_transport, &capture())
        .await
        .unwrap();
    let resent = retry_transport.sent();
    assert_eq!(resent.len(), 1);
    assert_eq!(resent[0].to, "alex@example.com");
    assert_eq!(wizard.step(), IntakeStep::Submitted);
}
