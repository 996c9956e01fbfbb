//! Builder for assembling a [`Folio`] relay from settings and optional overrides.
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::{FolioBuilder, Platform};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let folio = FolioBuilder::from_env().build()?;
//!     let app = folio.router(Platform::Vercel)?;
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use folio_axum::{
    AzureFunctionsAdapter, ContactService, CorsConfig, NetlifyAdapter, Platform, RoutePathError,
};
use folio_core::{ContactConfig, ContactSettings, SubmissionLogger};
use folio_mailer::Mailer;

/// Errors that can occur when building a [`Folio`] instance.
#[derive(Debug, thiserror::Error)]
pub enum FolioBuilderError {
    /// The configured delivery transport could not be constructed
    #[error("Mailer configuration failed: {0}")]
    MailerConfiguration(String),
}

/// Builds a [`Folio`] from [`ContactSettings`] and [`CorsConfig`].
///
/// An explicit mailer or logger replaces whatever the settings would produce.
pub struct FolioBuilder {
    settings: ContactSettings,
    cors: CorsConfig,
    mailer: Option<Arc<dyn Mailer>>,
    logger: Option<Arc<dyn SubmissionLogger>>,
}

impl FolioBuilder {
    pub fn new(settings: ContactSettings) -> Self {
        Self {
            settings,
            cors: CorsConfig::default(),
            mailer: None,
            logger: None,
        }
    }

    /// Reads contact and CORS settings from the process environment.
    pub fn from_env() -> Self {
        Self::new(ContactSettings::from_env()).with_cors(CorsConfig::from_env())
    }

    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    pub fn with_mailer(mut self, mailer: Arc<dyn Mailer>) -> Self {
        self.mailer = Some(mailer);
        self
    }

    pub fn with_logger(mut self, logger: Arc<dyn SubmissionLogger>) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn build(self) -> Result<Folio, FolioBuilderError> {
        let mut config = match self.mailer {
            Some(mailer) => ContactConfig::new(
                self.settings.recipient_email,
                self.settings.sender_email,
            )
            .with_mailer(mailer),
            None => self
                .settings
                .into_config()
                .map_err(|e| FolioBuilderError::MailerConfiguration(e.to_string()))?,
        };

        if let Some(logger) = self.logger {
            config = config.with_logger(logger);
        }

        if config.is_dry_run() {
            tracing::warn!("No email transport configured; submissions will be logged only");
        }

        Ok(Folio {
            config: Arc::new(config),
            cors: self.cors,
        })
    }
}

/// A configured relay, ready to be put behind any supported platform.
#[derive(Debug, Clone)]
pub struct Folio {
    config: Arc<ContactConfig>,
    cors: CorsConfig,
}

impl Folio {
    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.cors
    }

    /// Axum router for an HTTP-hosted platform at its default path.
    pub fn router(&self, platform: Platform) -> Result<axum::Router, RoutePathError> {
        self.router_builder(platform).build()
    }

    pub fn router_builder(&self, platform: Platform) -> folio_axum::ContactRouterBuilder {
        folio_axum::routes(self.config.clone(), platform).with_cors(self.cors.clone())
    }

    pub fn netlify(&self) -> ContactService<NetlifyAdapter> {
        ContactService::new(NetlifyAdapter, self.config.clone(), self.cors.clone())
    }

    pub fn azure_functions(&self) -> ContactService<AzureFunctionsAdapter> {
        ContactService::new(AzureFunctionsAdapter, self.config.clone(), self.cors.clone())
    }
}
