use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The four consent declarations. All must be ticked before the wizard
/// allows progression past step 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ConsentData {
    pub accurate_info: bool,
    pub understands_patch_test: bool,
    pub follows_aftercare: bool,
    pub understands_postponement: bool,
}

impl ConsentData {
    pub fn all_given(&self) -> bool {
        self.accurate_info
            && self.understands_patch_test
            && self.follows_aftercare
            && self.understands_postponement
    }

    /// Report label and value for each declaration, in report order.
    pub fn entries(&self) -> [(&'static str, bool); 4] {
        [
            (
                "I confirm the information I have provided is accurate",
                self.accurate_info,
            ),
            (
                "I understand a patch test is required for safety",
                self.understands_patch_test,
            ),
            ("I agree to follow aftercare advice", self.follows_aftercare),
            (
                "I understand treatment may be postponed if unsafe",
                self.understands_postponement,
            ),
        ]
    }
}
