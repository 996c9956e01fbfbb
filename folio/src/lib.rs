//! # folio
//!
//! The contact-form backend for a personal portfolio site. A submission is
//! validated once and then either emailed to the site owner or, when no email
//! transport is configured, logged. The JSON response contract is the same on
//! every supported host:
//!
//! - Vercel and Azure Static Web Apps (plain HTTP)
//! - Azure Functions (custom handler)
//! - Netlify Functions (Lambda-style events)
//!
//! ## Configuration
//!
//! | Variable | Default |
//! |----------|---------|
//! | `RECIPIENT_EMAIL` | `your.email@example.com` |
//! | `SENDER_EMAIL` | `noreply@yourdomain.com` |
//! | `SENDGRID_API_KEY` | unset: log-only mode |
//! | `SENDGRID_API_URL` | `https://api.sendgrid.com` |
//! | `MAILER_FILE_OUTPUT_DIR` | unset |
//! | `CORS_ALLOWED_ORIGIN` | `*` |
//!
//! ## Example
//!
//! ```rust,no_run
//! use folio::{FolioBuilder, Platform};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let folio = FolioBuilder::from_env().build()?;
//!     let app = folio.router(Platform::Vercel)?;
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

mod builder;

pub use builder::{Folio, FolioBuilder, FolioBuilderError};

/// Re-export core types from folio_core
pub use folio_core::{
    ContactConfig, ContactError, ContactRequest, ContactSettings, ContactSubmission,
    DispatchResult, Dispatcher, PreflightPolicy, RequestBody, ResponseBody, SubmissionLogger,
    TracingLogger, handle,
};

/// Re-export adapter types from folio_axum
pub use folio_axum::{
    AzureFunctionsAdapter, AzureInvocation, AzureInvocationResponse, ContactService, CorsConfig,
    HttpAdapter, NetlifyAdapter, NetlifyEvent, NetlifyResponse, Platform, RequestAdapter,
    RoutePathError, normalize_route_path,
};

/// Re-export delivery types from folio_mailer
pub use folio_mailer::{Email, FileTransport, Mailer, MailerConfig, MailerError, SendGridTransport};
