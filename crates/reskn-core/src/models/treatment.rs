use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Areas offered for a patch test. The form renders one checkbox per area;
/// anything else goes in the free-text `other_area` field.
pub const TREATMENT_AREAS: [&str; 8] = [
    "Face", "Neck", "Underarms", "Bikini", "Legs", "Arms", "Back", "Chest",
];

/// Hair removal methods the patient may have used recently.
pub const HAIR_REMOVAL_METHODS: [&str; 5] = [
    "Shaving",
    "Hair removal cream",
    "Waxing",
    "Epilator",
    "Threading",
];

/// Previous laser hair removal history, with a separate note for any
/// adverse reactions experienced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PreviousLaser {
    pub answer: bool,
    pub details: Option<String>,
    pub adverse_reactions: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentDetails {
    pub patch_test_areas: Vec<String>,
    pub other_area: Option<String>,
    pub previous_laser: PreviousLaser,
    pub recent_hair_removal: Vec<String>,
}
