//! Core of the folio contact relay: request validation and dispatch.
//!
//! [`handle`] is the whole contract. It takes a platform-neutral
//! [`ContactRequest`] plus a read-only [`ContactConfig`], and returns a
//! [`DispatchResult`] for the transport adapter to serialize. A submission that
//! passes validation is emailed through the configured
//! [`Mailer`](folio_mailer::Mailer). With no mailer configured, it goes to the
//! [`SubmissionLogger`].

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod logger;
pub mod request;
pub mod response;
pub mod submission;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ContactConfig, ContactSettings, DEFAULT_RECIPIENT_EMAIL, DEFAULT_SENDER_EMAIL};
pub use dispatcher::{Dispatcher, PreflightPolicy, handle, handle_with_policy};
pub use error::ContactError;
pub use logger::{SubmissionLogger, TracingLogger};
pub use request::{ContactRequest, RequestBody};
pub use response::{DispatchResult, ResponseBody, SUCCESS_MESSAGE};
pub use submission::ContactSubmission;
