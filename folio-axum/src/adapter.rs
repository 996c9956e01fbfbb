use std::fmt;
use std::sync::Arc;

use folio_core::{
    ContactConfig, ContactError, ContactRequest, DispatchResult, Dispatcher, PreflightPolicy,
};
use serde::{Serialize, de::DeserializeOwned};

use crate::cors::CorsConfig;

/// Hosting targets the relay can be deployed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    StaticWebApps,
    AzureFunctions,
    Netlify,
    Vercel,
}

impl Platform {
    /// Static Web Apps answers preflight at the edge; every other host forwards it to us.
    pub fn answers_preflight(self) -> bool {
        !matches!(self, Platform::StaticWebApps)
    }

    pub fn preflight_policy(self) -> PreflightPolicy {
        if self.answers_preflight() {
            PreflightPolicy::Answer
        } else {
            PreflightPolicy::Host
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Platform::StaticWebApps => "static-web-apps",
            Platform::AzureFunctions => "azure-functions",
            Platform::Netlify => "netlify",
            Platform::Vercel => "vercel",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Translates one platform's request/response shapes to and from the dispatcher contract.
pub trait RequestAdapter: Send + Sync {
    type Request;
    type Response;

    fn platform(&self) -> Platform;

    fn extract(&self, request: Self::Request) -> Result<ContactRequest, ContactError>;

    fn respond(&self, result: DispatchResult, cors: &CorsConfig) -> Self::Response;
}

/// An adapter bound to a dispatcher and CORS headers; one per process.
pub struct ContactService<A> {
    adapter: A,
    dispatcher: Dispatcher,
    cors: CorsConfig,
}

impl<A: RequestAdapter> ContactService<A> {
    pub fn new(adapter: A, config: Arc<ContactConfig>, cors: CorsConfig) -> Self {
        let dispatcher =
            Dispatcher::new(config).with_preflight(adapter.platform().preflight_policy());

        Self {
            adapter,
            dispatcher,
            cors,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn dispatcher(&self) -> &Dispatcher {
        &self.dispatcher
    }

    pub fn cors(&self) -> &CorsConfig {
        &self.cors
    }

    pub async fn call(&self, request: A::Request) -> A::Response {
        let request = match self.adapter.extract(request) {
            Ok(request) => request,
            Err(err) => return self.reject(err),
        };

        let result = self.dispatcher.handle(request).await;

        tracing::debug!(
            platform = %self.adapter.platform(),
            status = result.status_code,
            "Contact request handled"
        );

        self.adapter.respond(result, &self.cors)
    }

    /// Answers a request that never reached the dispatcher, with the usual CORS headers.
    pub fn reject(&self, err: ContactError) -> A::Response {
        tracing::debug!(
            platform = %self.adapter.platform(),
            error = %err,
            "Could not extract contact request"
        );

        self.adapter.respond(DispatchResult::from(err), &self.cors)
    }
}

impl<A> ContactService<A>
where
    A: RequestAdapter,
    A::Request: DeserializeOwned,
    A::Response: Serialize,
{
    /// Handles one event given as JSON text and returns the platform response as JSON text.
    ///
    /// An event that does not parse is answered with a 400 in the platform's envelope.
    pub async fn call_json(&self, event: &str) -> Result<String, serde_json::Error> {
        let response = match serde_json::from_str::<A::Request>(event) {
            Ok(request) => self.call(request).await,
            Err(err) => self.reject(ContactError::MalformedBody(err.to_string())),
        };
        serde_json::to_string(&response)
    }
}

impl<A: fmt::Debug> fmt::Debug for ContactService<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactService")
            .field("adapter", &self.adapter)
            .field("dispatcher", &self.dispatcher)
            .field("cors", &self.cors)
            .finish()
    }
}
