use std::future::Future;

use serde::Serialize;
use thiserror::Error;

/// Error raised by a mail transport. The message is what the relay
/// reported and is surfaced to the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct MailError(pub String);

/// Template parameters for one outbound message, mirroring the relay's
/// template fields one-to-one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub to: String,
    pub from_name: String,
    pub reply_to: String,
    pub subject: String,
    pub message: String,
    pub signature_image: String,
    pub reference_id: String,
}

/// The narrow capability the external mail relay exposes: one
/// fire-and-forget send per call, failing with the relay's error message.
pub trait MailTransport: Send + Sync {
    fn send(
        &self,
        service_id: &str,
        template_id: &str,
        email: &OutboundEmail,
    ) -> impl Future<Output = Result<(), MailError>> + Send;
}
