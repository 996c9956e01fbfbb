use crate::{FileTransport, Mailer, MailerError, SendGridTransport};
use std::path::PathBuf;

/// Selects which delivery transport, if any, the relay uses.
///
/// `transport: None` means no credentials were supplied; callers treat that
/// as dry-run mode and log submissions instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct MailerConfig {
    pub transport: Option<TransportConfig>,
}

#[derive(Clone)]
pub enum TransportConfig {
    SendGrid {
        api_key: String,
        base_url: Option<String>,
    },
    File {
        output_dir: PathBuf,
    },
}

impl std::fmt::Debug for TransportConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportConfig::SendGrid { base_url, .. } => f
                .debug_struct("SendGrid")
                .field("api_key", &"[REDACTED]")
                .field("base_url", base_url)
                .finish(),
            TransportConfig::File { output_dir } => f
                .debug_struct("File")
                .field("output_dir", output_dir)
                .finish(),
        }
    }
}

impl MailerConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let transport = if let Some(api_key) = get("SENDGRID_API_KEY") {
            Some(TransportConfig::SendGrid {
                api_key,
                base_url: get("SENDGRID_API_URL"),
            })
        } else {
            get("MAILER_FILE_OUTPUT_DIR").map(|output_dir| TransportConfig::File {
                output_dir: PathBuf::from(output_dir),
            })
        };

        Self { transport }
    }

    pub fn is_dry_run(&self) -> bool {
        self.transport.is_none()
    }

    pub fn build_transport(&self) -> Result<Option<Box<dyn Mailer>>, MailerError> {
        let Some(transport) = &self.transport else {
            return Ok(None);
        };

        let mailer: Box<dyn Mailer> = match transport {
            TransportConfig::SendGrid { api_key, base_url } => match base_url {
                Some(base_url) => Box::new(SendGridTransport::with_base_url(
                    api_key.as_str(),
                    base_url.as_str(),
                )?),
                None => Box::new(SendGridTransport::new(api_key.as_str())?),
            },
            TransportConfig::File { output_dir } => Box::new(FileTransport::new(output_dir)?),
        };

        Ok(Some(mailer))
    }
}
