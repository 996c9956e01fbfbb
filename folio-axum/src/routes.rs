use std::sync::Arc;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{
        State,
        rejection::{BytesRejection, JsonRejection},
    },
    http::Method,
    response::{IntoResponse, Response},
    routing::{any, get, post},
};
use folio_core::ContactError;
use thiserror::Error;

use crate::{
    adapter::{ContactService, RequestAdapter},
    azure::{AzureFunctionsAdapter, AzureInvocation},
    http::HttpAdapter,
    types::HealthResponse,
};

pub const HEALTH_PATH: &str = "/health";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoutePathError {
    #[error("Route path must not be empty")]
    Empty,

    #[error("Route path {0} is reserved for the health check")]
    Reserved(String),

    #[error("Route path {0} must not contain captures, wildcards or empty segments")]
    Invalid(String),
}

/// Turns `contact`, `/contact` or `api/contact/` into a single static route path.
pub fn normalize_route_path(path: &str) -> Result<String, RoutePathError> {
    let trimmed = path.trim().trim_matches('/');
    if trimmed.is_empty() {
        return Err(RoutePathError::Empty);
    }

    let normalized = format!("/{trimmed}");
    if trimmed.split('/').any(str::is_empty) || trimmed.contains(['{', '}', '*', ':']) {
        return Err(RoutePathError::Invalid(normalized));
    }
    if normalized == HEALTH_PATH {
        return Err(RoutePathError::Reserved(normalized));
    }

    Ok(normalized)
}

/// Every method is routed to the handler so the dispatcher decides between preflight and 405.
pub fn create_http_router(
    service: Arc<ContactService<HttpAdapter>>,
    path: &str,
) -> Result<Router, RoutePathError> {
    let path = normalize_route_path(path)?;

    Ok(Router::new()
        .route(&path, any(http_contact_handler))
        .route(HEALTH_PATH, get(health_handler::<HttpAdapter>))
        .with_state(service))
}

pub fn create_azure_router(
    service: Arc<ContactService<AzureFunctionsAdapter>>,
    function_name: &str,
) -> Result<Router, RoutePathError> {
    let path = normalize_route_path(function_name)?;

    Ok(Router::new()
        .route(&path, post(azure_contact_handler))
        .route(HEALTH_PATH, get(health_handler::<AzureFunctionsAdapter>))
        .with_state(service))
}

async fn http_contact_handler(
    State(service): State<Arc<ContactService<HttpAdapter>>>,
    method: Method,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    match body {
        Ok(body) => service.call((method, body)).await,
        Err(rejection) => service.reject(ContactError::BodyRejected {
            status: rejection.status().as_u16(),
            reason: rejection.body_text(),
        }),
    }
}

/// The host expects the invocation response envelope even when its own request was unreadable.
async fn azure_contact_handler(
    State(service): State<Arc<ContactService<AzureFunctionsAdapter>>>,
    invocation: Result<Json<AzureInvocation>, JsonRejection>,
) -> impl IntoResponse {
    let response = match invocation {
        Ok(Json(invocation)) => service.call(invocation).await,
        Err(rejection) => service.reject(ContactError::BodyRejected {
            status: rejection.status().as_u16(),
            reason: rejection.body_text(),
        }),
    };

    Json(response)
}

async fn health_handler<A>(State(service): State<Arc<ContactService<A>>>) -> impl IntoResponse
where
    A: RequestAdapter + 'static,
{
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        platform: service.adapter().platform().to_string(),
        dry_run: service.dispatcher().config().is_dry_run(),
    })
}
