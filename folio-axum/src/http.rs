use axum::{
    body::Bytes,
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
};
use folio_core::{ContactError, ContactRequest, DispatchResult, RequestBody};

use crate::adapter::{Platform, RequestAdapter};
use crate::cors::CorsConfig;

/// Plain HTTP hosting (Vercel, Static Web Apps): method and raw body in, HTTP response out.
#[derive(Debug, Clone, Copy)]
pub struct HttpAdapter {
    platform: Platform,
}

impl HttpAdapter {
    pub fn new(platform: Platform) -> Self {
        Self { platform }
    }
}

impl RequestAdapter for HttpAdapter {
    type Request = (Method, Bytes);
    type Response = Response;

    fn platform(&self) -> Platform {
        self.platform
    }

    fn extract(&self, (method, body): Self::Request) -> Result<ContactRequest, ContactError> {
        Ok(ContactRequest::new(
            method.as_str(),
            RequestBody::from(body.to_vec()),
        ))
    }

    fn respond(&self, result: DispatchResult, cors: &CorsConfig) -> Response {
        let status =
            StatusCode::from_u16(result.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, result.body.to_text()).into_response();
        cors.apply(response.headers_mut());
        response
    }
}
