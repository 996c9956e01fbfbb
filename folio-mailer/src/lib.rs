//! Email delivery for the folio contact relay.
//!
//! The [`Mailer`] trait is the delivery capability the dispatcher calls. Concrete
//! transports are [`SendGridTransport`] for production and [`FileTransport`] as a
//! local outbox; [`MailerConfig`] picks one from the environment.

pub mod config;
pub mod email;
pub mod email_types;
pub mod error;
pub mod mailer;
pub mod templates;
pub mod transports;

pub use config::{MailerConfig, TransportConfig};
pub use email::{Email, EmailBuilder};
pub use email_types::{CONTACT_SUBJECT_PREFIX, ContactDetails, ContactNotificationEmail};
pub use error::MailerError;
pub use mailer::Mailer;
pub use templates::{ContactHtmlTemplate, ContactTextTemplate};
pub use transports::{DEFAULT_SENDGRID_URL, FileTransport, SendGridTransport};
