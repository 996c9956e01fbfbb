//! # folio Axum integration
//!
//! Transport adapters that put the folio contact dispatcher behind each hosting
//! platform, plus ready-to-serve Axum routers for the ones that speak HTTP.
//!
//! ## Platforms
//!
//! - **Vercel** and **Static Web Apps**: plain HTTP via [`HttpAdapter`] and [`routes`]
//! - **Azure Functions**: custom-handler invocation envelopes via [`AzureFunctionsAdapter`]
//! - **Netlify**: Lambda-style events via [`NetlifyAdapter`]
//!
//! Every adapter applies the same [`CorsConfig`] headers to every response.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use folio_core::ContactSettings;
//! use folio_axum::{CorsConfig, Platform};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = Arc::new(ContactSettings::from_env().into_config().unwrap());
//!
//!     let app = folio_axum::routes(config, Platform::Vercel)
//!         .with_cors(CorsConfig::new("https://jane.dev"))
//!         .build()
//!         .unwrap();
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
//!     axum::serve(listener, app).await.unwrap();
//! }
//! ```

mod adapter;
mod azure;
mod cors;
mod http;
mod netlify;
mod routes;
mod types;

pub use adapter::{ContactService, Platform, RequestAdapter};
pub use azure::{
    AzureFunctionsAdapter, AzureHttpRequest, AzureHttpResponse, AzureInvocation,
    AzureInvocationData, AzureInvocationResponse, AzureOutputs,
};
pub use cors::{CorsConfig, DEFAULT_ALLOWED_HEADERS, DEFAULT_ALLOWED_METHODS, DEFAULT_ALLOWED_ORIGIN};
pub use http::HttpAdapter;
pub use netlify::{NetlifyAdapter, NetlifyEvent, NetlifyResponse};
pub use routes::{
    HEALTH_PATH, RoutePathError, create_azure_router, create_http_router, normalize_route_path,
};
pub use types::HealthResponse;

use axum::Router;
use folio_core::ContactConfig;
use std::sync::Arc;

pub const DEFAULT_CONTACT_PATH: &str = "/api/contact";
pub const DEFAULT_AZURE_FUNCTION: &str = "contact";

/// Create contact routes for an HTTP-hosted platform.
///
/// Azure Functions is served at `/{path}` as a custom handler, where `path`
/// is the function name (default `contact`). Every other platform is served
/// as plain HTTP at `path` (default `/api/contact`). Deployed Netlify functions
/// receive events rather than HTTP; drive [`NetlifyAdapter`] through
/// [`ContactService::call_json`] for those.
pub fn routes(config: Arc<ContactConfig>, platform: Platform) -> ContactRouterBuilder {
    ContactRouterBuilder {
        config,
        platform,
        cors: CorsConfig::default(),
        path: None,
    }
}

/// Builder for configuring contact routes
pub struct ContactRouterBuilder {
    config: Arc<ContactConfig>,
    platform: Platform,
    cors: CorsConfig,
    path: Option<String>,
}

impl ContactRouterBuilder {
    /// Set the CORS headers applied to every response
    pub fn with_cors(mut self, cors: CorsConfig) -> Self {
        self.cors = cors;
        self
    }

    /// Override the route path (or function name, for Azure Functions).
    ///
    /// A missing leading slash is added; `/health` and paths with captures are refused by [`build`](Self::build).
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Build the router with the configured options
    pub fn build(self) -> Result<Router, RoutePathError> {
        match self.platform {
            Platform::AzureFunctions => {
                let function_name = self.path.as_deref().unwrap_or(DEFAULT_AZURE_FUNCTION);
                let service = ContactService::new(AzureFunctionsAdapter, self.config, self.cors);
                create_azure_router(Arc::new(service), function_name)
            }
            platform => {
                let path = self.path.as_deref().unwrap_or(DEFAULT_CONTACT_PATH);
                let service = ContactService::new(HttpAdapter::new(platform), self.config, self.cors);
                create_http_router(Arc::new(service), path)
            }
        }
    }
}
