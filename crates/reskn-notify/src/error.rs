use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotifyError {
    /// The relay credentials are missing or still the placeholder. The
    /// display string is the exact message shown to the patient; retrying
    /// cannot succeed, so the UI offers no retry for this one.
    #[error("Email service not configured. Please contact the clinic.")]
    NotConfigured,

    /// A send failed; carries the relay's error message verbatim.
    #[error("{0}")]
    Send(String),
}
