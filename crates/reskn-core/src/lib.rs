//! reskn-core
//!
//! Pure domain types for the pre-laser patch test intake: patient details,
//! the medical screening and laser-safety questionnaires, treatment
//! selections, consent, and signature records. No I/O and no scoring:
//! this is the shared vocabulary of the reskn system.

pub mod models;

pub use models::consent::ConsentData;
pub use models::medical::{LaserSafety, MedicalAnswer, MedicalScreening};
pub use models::patient::PatientDetails;
pub use models::signature::{SignatureCapture, SignatureData};
pub use models::treatment::{
    HAIR_REMOVAL_METHODS, PreviousLaser, TREATMENT_AREAS, TreatmentDetails,
};
