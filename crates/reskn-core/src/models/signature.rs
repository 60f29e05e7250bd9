use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What the signature widget yields on demand: a base64 raster of the
/// drawing (empty string when nothing was drawn), the typed name, and the
/// signature-consent checkbox.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignatureCapture {
    pub image: String,
    pub typed_name: String,
    pub consent_confirmed: bool,
}

/// The sealed signature block inside a submission record. `signed_at` is
/// stamped at assembly time and never recomputed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SignatureData {
    pub signature_image: String,
    pub typed_name: String,
    pub signed_at: String,
    pub consent_confirmed: bool,
}
