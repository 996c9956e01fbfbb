use serde_json::Value;

use crate::error::ContactError;

/// The platform-neutral inbound request the dispatcher works on.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    pub method: String,
    pub body: RequestBody,
}

/// Request payload as the hosting platform handed it over: either untouched
/// bytes, or JSON the platform already parsed.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    Raw(Vec<u8>),
    Json(Value),
}

impl ContactRequest {
    pub fn new(method: impl Into<String>, body: RequestBody) -> Self {
        Self {
            method: method.into(),
            body,
        }
    }

    pub fn post_json(body: Value) -> Self {
        Self::new("POST", RequestBody::Json(body))
    }

    pub fn is_method(&self, method: &str) -> bool {
        self.method.eq_ignore_ascii_case(method)
    }
}

impl RequestBody {
    /// Parses raw bytes as JSON; already-structured bodies pass through.
    pub fn into_json(self) -> Result<Value, ContactError> {
        match self {
            RequestBody::Json(value) => Ok(value),
            RequestBody::Raw(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| ContactError::MalformedBody(e.to_string())),
            RequestBody::Empty => Err(ContactError::MalformedBody(
                "Request body is empty".to_string(),
            )),
        }
    }
}

impl From<Vec<u8>> for RequestBody {
    fn from(bytes: Vec<u8>) -> Self {
        if bytes.is_empty() {
            RequestBody::Empty
        } else {
            RequestBody::Raw(bytes)
        }
    }
}

impl From<&str> for RequestBody {
    fn from(text: &str) -> Self {
        RequestBody::from(text.as_bytes().to_vec())
    }
}
