use serde_json::{Value, json};

use crate::error::ContactError;

pub const SUCCESS_MESSAGE: &str = "Message sent successfully";

/// Outcome of one dispatch, produced once and handed to the transport adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchResult {
    pub ok: bool,
    pub status_code: u16,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Empty,
    Success {
        message: String,
    },
    Error {
        error: String,
        message: Option<String>,
    },
}

impl DispatchResult {
    pub fn success() -> Self {
        Self {
            ok: true,
            status_code: 200,
            body: ResponseBody::Success {
                message: SUCCESS_MESSAGE.to_string(),
            },
        }
    }

    /// Answer to a CORS preflight request.
    pub fn preflight() -> Self {
        Self {
            ok: true,
            status_code: 200,
            body: ResponseBody::Empty,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.body {
            ResponseBody::Error { error, .. } => Some(error),
            _ => None,
        }
    }
}

impl From<ContactError> for DispatchResult {
    fn from(err: ContactError) -> Self {
        Self {
            ok: false,
            status_code: err.status_code(),
            body: ResponseBody::Error {
                error: err.public_message().to_string(),
                message: err.detail(),
            },
        }
    }
}

impl ResponseBody {
    /// JSON wire form; `None` for an empty body.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            ResponseBody::Empty => None,
            ResponseBody::Success { message } => Some(json!({
                "success": true,
                "message": message,
            })),
            ResponseBody::Error {
                error,
                message: Some(message),
            } => Some(json!({
                "error": error,
                "message": message,
            })),
            ResponseBody::Error {
                error,
                message: None,
            } => Some(json!({ "error": error })),
        }
    }

    /// Serialized body text; the empty string for an empty body.
    pub fn to_text(&self) -> String {
        self.to_json()
            .map(|value| value.to_string())
            .unwrap_or_default()
    }
}
