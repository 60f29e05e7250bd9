use serde::{Deserialize, Serialize};

/// Key value a fresh deployment ships with until the relay account's real
/// public key is filled in.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "YOUR_PUBLIC_KEY";

/// Credentials for the external mail relay. The defaults carry the
/// clinic's service and template ids with the placeholder public key, so
/// an unconfigured deployment fails fast instead of attempting a send.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            service_id: "service_s2m1r8g".to_string(),
            template_id: "template_sfokh15".to_string(),
            public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
        }
    }
}

impl MailConfig {
    /// False when any credential is missing or the public key is still the
    /// placeholder.
    pub fn is_configured(&self) -> bool {
        !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.public_key.is_empty()
            && self.public_key != PLACEHOLDER_PUBLIC_KEY
    }
}
