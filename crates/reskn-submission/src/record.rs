use serde::{Deserialize, Serialize};
use ts_rs::TS;

use reskn_core::{
    ConsentData, LaserSafety, MedicalScreening, PatientDetails, SignatureCapture, SignatureData,
    TreatmentDetails,
};
use reskn_fitzpatrick::{AnswerSet, ClassificationResult, QUESTIONS, classify};

use crate::error::AssembleError;
use crate::reference::{display_timestamp, generate_reference_id};

/// Borrowed view of the wizard's accumulated state, handed to `assemble`.
#[derive(Debug, Clone, Copy)]
pub struct IntakeSnapshot<'a> {
    pub patient: &'a PatientDetails,
    pub medical: &'a MedicalScreening,
    pub medications: &'a str,
    pub allergies: &'a str,
    pub laser_safety: &'a LaserSafety,
    pub treatment: &'a TreatmentDetails,
    pub consent: &'a ConsentData,
    pub ethnic_background: Option<&'a str>,
    pub answers: &'a AnswerSet,
}

/// The aggregate root: everything collected by the wizard plus the final
/// classification, sealed under one reference id. Created exactly once per
/// encounter and never mutated afterwards; this is the value that gets
/// rendered and emailed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SubmissionRecord {
    pub reference_id: String,
    pub submitted_at: String,
    pub patient: PatientDetails,
    pub medical: MedicalScreening,
    pub medications: String,
    pub allergies: String,
    pub laser_safety: LaserSafety,
    pub treatment: TreatmentDetails,
    pub consent: ConsentData,
    pub signature: SignatureData,
    pub ethnic_background: Option<String>,
    pub answers: AnswerSet,
    pub result: ClassificationResult,
}

/// Build a submission record from the wizard's state and the signature
/// widget's capture. Refuses unless every questionnaire entry is answered;
/// the classification is computed from the same answer set that is sealed
/// into the record, so the two can never drift apart.
pub fn assemble(
    snapshot: IntakeSnapshot<'_>,
    capture: &SignatureCapture,
) -> Result<SubmissionRecord, AssembleError> {
    if !snapshot.answers.is_complete() {
        return Err(AssembleError::QuestionnaireIncomplete {
            answered: snapshot.answers.len(),
            expected: QUESTIONS.len(),
        });
    }
    let result = classify(snapshot.answers)?;

    let submitted_at = display_timestamp();
    let signature = SignatureData {
        signature_image: capture.image.clone(),
        typed_name: capture.typed_name.clone(),
        signed_at: submitted_at.clone(),
        consent_confirmed: capture.consent_confirmed,
    };

    Ok(SubmissionRecord {
        reference_id: generate_reference_id(),
        submitted_at,
        patient: snapshot.patient.clone(),
        medical: snapshot.medical.clone(),
        medications: snapshot.medications.to_string(),
        allergies: snapshot.allergies.to_string(),
        laser_safety: snapshot.laser_safety.clone(),
        treatment: snapshot.treatment.clone(),
        consent: *snapshot.consent,
        signature,
        ethnic_background: snapshot.ethnic_background.map(str::to_string),
        answers: snapshot.answers.clone(),
        result,
    })
}
