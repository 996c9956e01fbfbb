use std::sync::Arc;

use folio_mailer::{Mailer, MailerConfig, MailerError};

use crate::logger::{SubmissionLogger, TracingLogger};

pub const DEFAULT_RECIPIENT_EMAIL: &str = "your.email@example.com";
pub const DEFAULT_SENDER_EMAIL: &str = "noreply@yourdomain.com";

/// Plain settings read from the environment once at process start.
#[derive(Debug, Clone)]
pub struct ContactSettings {
    pub recipient_email: String,
    pub sender_email: String,
    pub mailer: MailerConfig,
}

impl ContactSettings {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        Self {
            recipient_email: get("RECIPIENT_EMAIL")
                .unwrap_or_else(|| DEFAULT_RECIPIENT_EMAIL.to_string()),
            sender_email: get("SENDER_EMAIL").unwrap_or_else(|| DEFAULT_SENDER_EMAIL.to_string()),
            mailer: MailerConfig::from_lookup(&lookup),
        }
    }

    /// Builds the runtime config, constructing the delivery transport if one is configured.
    pub fn into_config(self) -> Result<ContactConfig, MailerError> {
        let mailer = self.mailer.build_transport()?;

        Ok(ContactConfig {
            recipient_email: self.recipient_email,
            sender_email: self.sender_email,
            mailer: mailer.map(Arc::from),
            logger: Arc::new(TracingLogger),
        })
    }
}

impl Default for ContactSettings {
    fn default() -> Self {
        Self {
            recipient_email: DEFAULT_RECIPIENT_EMAIL.to_string(),
            sender_email: DEFAULT_SENDER_EMAIL.to_string(),
            mailer: MailerConfig::default(),
        }
    }
}

/// Read-only configuration handed to the dispatcher.
///
/// `mailer: None` is dry-run mode: submissions go to `logger` instead of being sent.
#[derive(Clone)]
pub struct ContactConfig {
    pub recipient_email: String,
    pub sender_email: String,
    pub mailer: Option<Arc<dyn Mailer>>,
    pub logger: Arc<dyn SubmissionLogger>,
}

impl ContactConfig {
    pub fn new(recipient_email: impl Into<String>, sender_email: impl Into<String>) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            sender_email: sender_email.into(),
            mailer: None,
            logger: Arc::new(TracingLogger),
        }
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn is_dry_run(&self) -> bool {
        self.mailer.is_none()
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RECIPIENT_EMAIL, DEFAULT_SENDER_EMAIL)
    }
}

impl std::fmt::Debug for ContactConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContactConfig")
            .field("recipient_email", &self.recipient_email)
            .field("sender_email", &self.sender_email)
            .field("dry_run", &self.is_dry_run())
            .finish()
    }
}
