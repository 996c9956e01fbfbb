use std::sync::Arc;

use folio_mailer::ContactNotificationEmail;

use crate::config::ContactConfig;
use crate::error::{ContactError, Result};
use crate::request::ContactRequest;
use crate::response::DispatchResult;
use crate::submission::ContactSubmission;

/// Whether the dispatcher itself answers CORS preflight (`OPTIONS`) requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreflightPolicy {
    #[default]
    Answer,
    /// The host answers preflight before the function runs; `OPTIONS` is just another method.
    Host,
}

/// Validates a contact request and sends or logs it, with preflight answered.
pub async fn handle(request: ContactRequest, config: &ContactConfig) -> DispatchResult {
    handle_with_policy(request, config, PreflightPolicy::Answer).await
}

pub async fn handle_with_policy(
    request: ContactRequest,
    config: &ContactConfig,
    preflight: PreflightPolicy,
) -> DispatchResult {
    if preflight == PreflightPolicy::Answer && request.is_method("OPTIONS") {
        return DispatchResult::preflight();
    }

    match process(request, config).await {
        Ok(()) => DispatchResult::success(),
        Err(err) => {
            if err.status_code() >= 500 {
                tracing::error!(error = %err, "Error processing contact form");
            } else {
                tracing::debug!(error = %err, "Rejected contact form request");
            }
            err.into()
        }
    }
}

async fn process(request: ContactRequest, config: &ContactConfig) -> Result<()> {
    if !request.is_method("POST") {
        return Err(ContactError::MethodNotAllowed);
    }

    let body = request.body.into_json()?;
    let submission = ContactSubmission::from_json(&body)?;

    deliver(&submission, config).await
}

async fn deliver(submission: &ContactSubmission, config: &ContactConfig) -> Result<()> {
    let Some(mailer) = &config.mailer else {
        config
            .logger
            .log_submission(submission, &config.recipient_email);
        return Ok(());
    };

    let email = ContactNotificationEmail::build(
        &config.sender_email,
        &config.recipient_email,
        submission.details(),
    )?;

    mailer.send_email(email).await?;

    tracing::info!(to = %config.recipient_email, "Contact form submission delivered");
    Ok(())
}

/// A dispatcher bound to one configuration and preflight policy, shared across requests.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: Arc<ContactConfig>,
    preflight: PreflightPolicy,
}

impl Dispatcher {
    pub fn new(config: Arc<ContactConfig>) -> Self {
        Self {
            config,
            preflight: PreflightPolicy::default(),
        }
    }

    pub fn with_preflight(mut self, preflight: PreflightPolicy) -> Self {
        self.preflight = preflight;
        self
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn preflight(&self) -> PreflightPolicy {
        self.preflight
    }

    pub async fn handle(&self, request: ContactRequest) -> DispatchResult {
        handle_with_policy(request, &self.config, self.preflight).await
    }
}
