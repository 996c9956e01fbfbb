//! Azure Functions custom handler.
//!
//! The Functions host POSTs an invocation envelope to `/{function_name}` and
//! expects the HTTP output binding (`res`) back inside `Outputs`.

use std::collections::BTreeMap;

use folio_core::{ContactError, ContactRequest, DispatchResult, RequestBody};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::adapter::{Platform, RequestAdapter};
use crate::cors::CorsConfig;

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AzureInvocation {
    pub data: AzureInvocationData,
    #[serde(default)]
    pub metadata: Value,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AzureInvocationData {
    pub req: AzureHttpRequest,
}

/// Only the method and body are read; `Url`, `Headers`, `Query` and `Params` are ignored
/// whatever shape the host sends them in.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AzureHttpRequest {
    pub method: String,
    /// A JSON string as received, or a value the host already parsed.
    #[serde(default)]
    pub body: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct AzureInvocationResponse {
    pub outputs: AzureOutputs,
    pub logs: Vec<String>,
    pub return_value: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AzureOutputs {
    pub res: AzureHttpResponse,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AzureHttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AzureFunctionsAdapter;

impl RequestAdapter for AzureFunctionsAdapter {
    type Request = AzureInvocation;
    type Response = AzureInvocationResponse;

    fn platform(&self) -> Platform {
        Platform::AzureFunctions
    }

    fn extract(&self, invocation: AzureInvocation) -> Result<ContactRequest, ContactError> {
        let req = invocation.data.req;
        let body = match req.body {
            None | Some(Value::Null) => RequestBody::Empty,
            Some(Value::String(text)) => RequestBody::from(text.into_bytes()),
            Some(value) => RequestBody::Json(value),
        };

        Ok(ContactRequest::new(req.method, body))
    }

    fn respond(&self, result: DispatchResult, cors: &CorsConfig) -> AzureInvocationResponse {
        let logs = vec![format!(
            "Contact form submission received ({})",
            result.status_code
        )];

        AzureInvocationResponse {
            outputs: AzureOutputs {
                res: AzureHttpResponse {
                    status_code: result.status_code,
                    headers: cors
                        .response_headers()
                        .into_iter()
                        .map(|(name, value)| (name.to_string(), value))
                        .collect(),
                    body: result.body.to_text(),
                },
            },
            logs,
            return_value: None,
        }
    }
}
