use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Identifying and contact details collected on the first wizard step.
/// Name, date of birth, email, and mobile are required by the step-1
/// validity predicate; the rest are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientDetails {
    pub full_name: String,
    pub date_of_birth: String,
    pub email: String,
    pub mobile: String,
    pub address: Option<String>,
    pub emergency_contact_name: Option<String>,
    pub emergency_contact_phone: Option<String>,
}

impl PatientDetails {
    /// True when every required contact field is filled in. Whitespace-only
    /// input counts as empty.
    pub fn required_fields_complete(&self) -> bool {
        !self.full_name.trim().is_empty()
            && !self.date_of_birth.trim().is_empty()
            && !self.email.trim().is_empty()
            && !self.mobile.trim().is_empty()
    }
}
