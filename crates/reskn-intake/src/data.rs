use serde::{Deserialize, Serialize};
use ts_rs::TS;

use reskn_core::{
    ConsentData, LaserSafety, MedicalScreening, PatientDetails, TreatmentDetails,
};
use reskn_fitzpatrick::{AnswerSet, ClassificationResult, classify};
use reskn_submission::IntakeSnapshot;

/// Everything the wizard accumulates across both steps. The UI binds
/// directly to these fields; the wizard only interprets them through the
/// validity predicates and derived flags below.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct IntakeData {
    pub patient: PatientDetails,
    pub medical: MedicalScreening,
    pub medications: String,
    pub allergies: String,
    pub laser_safety: LaserSafety,
    pub treatment: TreatmentDetails,
    pub consent: ConsentData,
    pub typed_signature_name: String,
    pub signature_consent: bool,
    /// Fed by the signature widget's ink-change notification.
    pub has_signature: bool,
    pub ethnic_background: Option<String>,
    pub answers: AnswerSet,
}

impl IntakeData {
    /// Step-1 gate: contact details, at least one treatment area, all four
    /// consents, and a complete signature block.
    pub fn step1_valid(&self) -> bool {
        self.patient.required_fields_complete()
            && !self.treatment.patch_test_areas.is_empty()
            && self.consent.all_given()
            && self.has_signature
            && !self.typed_signature_name.trim().is_empty()
            && self.signature_consent
    }

    /// Step-2 gate: every assessment question answered.
    pub fn step2_valid(&self) -> bool {
        self.answers.is_complete()
    }

    /// True when any answer indicates the clinic should review before
    /// treatment. Never blocks a transition; it only flags the submission
    /// for manual review.
    pub fn has_warnings(&self) -> bool {
        self.medical.pregnant_or_breastfeeding.answer
            || self.laser_safety.isotretinoin.answer
            || self.laser_safety.sun_exposure.answer
            || self.laser_safety.fake_tan.answer
            || self.laser_safety.broken_skin.answer
    }

    /// Live classification for the assessment page. Withholds a result
    /// until at least one question is answered; a scoring error (a
    /// catalogue defect) also withholds rather than surfacing.
    pub fn preview(&self) -> Option<ClassificationResult> {
        if self.answers.is_empty() {
            return None;
        }
        classify(&self.answers).ok()
    }

    pub(crate) fn snapshot(&self) -> IntakeSnapshot<'_> {
        IntakeSnapshot {
            patient: &self.patient,
            medical: &self.medical,
            medications: &self.medications,
            allergies: &self.allergies,
            laser_safety: &self.laser_safety,
            treatment: &self.treatment,
            consent: &self.consent,
            ethnic_background: self.ethnic_background.as_deref(),
            answers: &self.answers,
        }
    }
}
