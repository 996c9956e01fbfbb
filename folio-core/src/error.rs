use folio_mailer::MailerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContactError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("All fields are required")]
    MissingFields,

    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    #[error("Delivery failed: {0}")]
    Delivery(#[from] MailerError),

    /// The host refused the body before it reached the dispatcher (too large, wrong content type).
    #[error("Request body rejected ({status}): {reason}")]
    BodyRejected { status: u16, reason: String },
}

impl ContactError {
    pub fn status_code(&self) -> u16 {
        match self {
            ContactError::MethodNotAllowed => 405,
            ContactError::MissingFields
            | ContactError::InvalidEmail
            | ContactError::MalformedBody(_) => 400,
            ContactError::BodyRejected { status, .. } => *status,
            ContactError::Delivery(_) => 500,
        }
    }

    /// The `error` field of the JSON response.
    pub fn public_message(&self) -> &'static str {
        match self {
            ContactError::MethodNotAllowed => "Method not allowed",
            ContactError::MissingFields => "All fields are required",
            ContactError::InvalidEmail => "Invalid email address",
            ContactError::MalformedBody(_) | ContactError::BodyRejected { .. } => {
                "Invalid request body"
            }
            ContactError::Delivery(_) => "Internal server error",
        }
    }

    /// The `message` field of the JSON response, present only when there is a cause to report.
    pub fn detail(&self) -> Option<String> {
        match self {
            ContactError::MalformedBody(cause) => Some(cause.clone()),
            ContactError::BodyRejected { reason, .. } => Some(reason.clone()),
            ContactError::Delivery(cause) => Some(cause.to_string()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ContactError>;
