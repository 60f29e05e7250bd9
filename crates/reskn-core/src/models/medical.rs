use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A yes/no clinical question with an optional free-text elaboration.
/// Every screening and safety question shares this shape, so warning-flag
/// and report-rendering logic stays uniform instead of branching per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalAnswer {
    pub answer: bool,
    pub details: Option<String>,
}

impl MedicalAnswer {
    pub fn no() -> Self {
        Self::default()
    }

    pub fn yes() -> Self {
        Self {
            answer: true,
            details: None,
        }
    }

    pub fn yes_with(details: impl Into<String>) -> Self {
        Self {
            answer: true,
            details: Some(details.into()),
        }
    }
}

/// The general medical screening questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicalScreening {
    pub pregnant_or_breastfeeding: MedicalAnswer,
    pub diabetes: MedicalAnswer,
    pub epilepsy: MedicalAnswer,
    pub autoimmune: MedicalAnswer,
    pub photosensitivity: MedicalAnswer,
    pub keloid_scarring: MedicalAnswer,
    pub skin_conditions: MedicalAnswer,
    pub vitiligo: MedicalAnswer,
    pub herpes_simplex: MedicalAnswer,
    pub skin_cancer: MedicalAnswer,
    pub hormonal_conditions: MedicalAnswer,
    pub other_conditions: Option<String>,
}

impl MedicalScreening {
    /// Report label and answer for every screening question, in the fixed
    /// order the clinic report lists them.
    pub fn entries(&self) -> [(&'static str, &MedicalAnswer); 11] {
        [
            ("Pregnant or breastfeeding", &self.pregnant_or_breastfeeding),
            ("Diabetes", &self.diabetes),
            ("Epilepsy", &self.epilepsy),
            ("Autoimmune condition(s)", &self.autoimmune),
            (
                "Photosensitivity / light sensitivity",
                &self.photosensitivity,
            ),
            ("History of keloid scarring", &self.keloid_scarring),
            (
                "Eczema / psoriasis / dermatitis in treatment area",
                &self.skin_conditions,
            ),
            ("Vitiligo", &self.vitiligo),
            ("Herpes simplex (cold sores)", &self.herpes_simplex),
            ("History of skin cancer", &self.skin_cancer),
            ("Hormonal conditions (e.g., PCOS)", &self.hormonal_conditions),
        ]
    }
}

/// The laser-specific contraindication questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LaserSafety {
    pub isotretinoin: MedicalAnswer,
    pub sun_exposure: MedicalAnswer,
    pub fake_tan: MedicalAnswer,
    pub waxing_epilating: MedicalAnswer,
    pub recent_treatments: MedicalAnswer,
    pub broken_skin: MedicalAnswer,
    pub tattoos: MedicalAnswer,
    pub pacemaker: MedicalAnswer,
    pub anticoagulants: MedicalAnswer,
    pub pigmentation_changes: MedicalAnswer,
}

impl LaserSafety {
    pub fn entries(&self) -> [(&'static str, &MedicalAnswer); 10] {
        [
            (
                "Isotretinoin (Roaccutane) in last 6-12 months",
                &self.isotretinoin,
            ),
            ("Sun exposure or sunbeds in last 2-4 weeks", &self.sun_exposure),
            (
                "Fake tan currently or within last 2 weeks",
                &self.fake_tan,
            ),
            (
                "Waxing/epilating/threading in treatment area in last 4 weeks",
                &self.waxing_epilating,
            ),
            (
                "Recent chemical peels/microneedling/laser/IPL in last 4 weeks",
                &self.recent_treatments,
            ),
            (
                "Broken skin, irritation, infection, or active cold sore",
                &self.broken_skin,
            ),
            (
                "Tattoos / permanent makeup in treatment area",
                &self.tattoos,
            ),
            (
                "Pacemaker or implanted electronic device",
                &self.pacemaker,
            ),
            (
                "Anticoagulants or bleeding disorder",
                &self.anticoagulants,
            ),
            (
                "History of pigmentation changes after skin treatments",
                &self.pigmentation_changes,
            ),
        ]
    }
}
