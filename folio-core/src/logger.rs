use crate::submission::ContactSubmission;

/// Receives submissions when no delivery transport is configured.
pub trait SubmissionLogger: Send + Sync {
    fn log_submission(&self, submission: &ContactSubmission, recipient: &str);
}

/// Default dry-run logger: one structured `tracing` event per submission.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl SubmissionLogger for TracingLogger {
    fn log_submission(&self, submission: &ContactSubmission, recipient: &str) {
        tracing::info!(
            to = %recipient,
            name = %submission.name,
            email = %submission.email,
            subject = %submission.subject,
            message = %submission.message,
            "Contact form submission (no email transport configured)"
        );
    }
}
