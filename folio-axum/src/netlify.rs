use std::collections::BTreeMap;

use base64::{Engine as _, engine::general_purpose::STANDARD};
use folio_core::{ContactError, ContactRequest, DispatchResult, RequestBody};
use serde::{Deserialize, Serialize};

use crate::adapter::{Platform, RequestAdapter};
use crate::cors::CorsConfig;

/// Lambda-style event Netlify hands to a function. Fields other than these are ignored.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetlifyEvent {
    pub http_method: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NetlifyResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NetlifyAdapter;

impl RequestAdapter for NetlifyAdapter {
    type Request = NetlifyEvent;
    type Response = NetlifyResponse;

    fn platform(&self) -> Platform {
        Platform::Netlify
    }

    fn extract(&self, event: NetlifyEvent) -> Result<ContactRequest, ContactError> {
        let body = match event.body {
            None => RequestBody::Empty,
            Some(body) if event.is_base64_encoded => STANDARD
                .decode(body.as_bytes())
                .map(RequestBody::from)
                .map_err(|e| ContactError::MalformedBody(format!("Invalid base64 body: {e}")))?,
            Some(body) => RequestBody::from(body.into_bytes()),
        };

        Ok(ContactRequest::new(event.http_method, body))
    }

    fn respond(&self, result: DispatchResult, cors: &CorsConfig) -> NetlifyResponse {
        NetlifyResponse {
            status_code: result.status_code,
            headers: cors
                .response_headers()
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
            body: result.body.to_text(),
        }
    }
}
