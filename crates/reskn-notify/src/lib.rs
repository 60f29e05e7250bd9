//! reskn-notify
//!
//! Turns a sealed submission record into the canonical plain-text clinic
//! report and delivers it twice through the external mail relay: one copy
//! to the clinic, one to the patient. Tracks per-copy delivery so a retry
//! after a partial failure never duplicates an email.

pub mod config;
pub mod dispatch;
pub mod error;
pub mod mailer;
pub mod report;

pub use config::{MailConfig, PLACEHOLDER_PUBLIC_KEY};
pub use dispatch::{CLINIC_EMAIL, CLINIC_NAME, DispatchOutcome, Dispatcher};
pub use error::NotifyError;
pub use mailer::{MailError, MailTransport, OutboundEmail};
pub use report::render_report;
