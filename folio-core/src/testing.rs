//! Test doubles for the delivery and logger capabilities.
//!
//! Enabled for this crate's own tests and, through the `testing` feature, for
//! downstream crates' dev-dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use folio_mailer::{Email, Mailer, MailerError};
use serde_json::{Value, json};

use crate::config::ContactConfig;
use crate::logger::SubmissionLogger;
use crate::submission::ContactSubmission;

/// Records every email it is asked to send; optionally fails each send.
#[derive(Debug, Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<Email>>,
    failure: Option<(u16, String)>,
}

impl RecordingMailer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer whose every send fails with a provider rejection.
    pub fn failing(status: u16, body: impl Into<String>) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            failure: Some((status, body.into())),
        }
    }

    /// The error each send returns, if this mailer fails.
    pub fn failure(&self) -> Option<MailerError> {
        self.failure
            .as_ref()
            .map(|(status, body)| MailerError::Provider {
                status: *status,
                body: body.clone(),
            })
    }

    pub fn sent(&self) -> Vec<Email> {
        self.sent.lock().map(|sent| sent.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email);
        }
        match self.failure() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

/// Captures dry-run log calls as `(submission, recipient)` pairs.
#[derive(Debug, Default)]
pub struct RecordingLogger {
    entries: Mutex<Vec<(ContactSubmission, String)>>,
}

impl RecordingLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<(ContactSubmission, String)> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }
}

impl SubmissionLogger for RecordingLogger {
    fn log_submission(&self, submission: &ContactSubmission, recipient: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push((submission.clone(), recipient.to_string()));
        }
    }
}

/// Recipient used by [`dry_run_config`] and [`sending_config`].
pub const TEST_RECIPIENT: &str = "owner@example.com";
pub const TEST_SENDER: &str = "relay@example.com";

pub fn dry_run_config(logger: Arc<RecordingLogger>) -> ContactConfig {
    ContactConfig::new(TEST_RECIPIENT, TEST_SENDER).with_logger(logger)
}

pub fn sending_config(mailer: Arc<RecordingMailer>, logger: Arc<RecordingLogger>) -> ContactConfig {
    dry_run_config(logger).with_mailer(mailer)
}

/// The canonical valid submission body.
pub fn jane() -> Value {
    json!({
        "name": "Jane",
        "email": "jane@example.com",
        "subject": "Hi",
        "message": "line1\nline2"
    })
}
