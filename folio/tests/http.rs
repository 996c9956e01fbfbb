//! Router-level tests for the HTTP-hosted platforms.

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Request, StatusCode, header},
};
use folio::{ContactSettings, CorsConfig, FolioBuilder, Platform};
use folio_core::testing::{RecordingLogger, RecordingMailer, jane};
use serde_json::{Value, json};
use tower::ServiceExt;

struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: String,
}

impl TestResponse {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

async fn send(app: Router, method: &str, uri: &str, body: impl Into<Body>) -> TestResponse {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    TestResponse {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}

fn dry_run_app(platform: Platform, logger: Arc<RecordingLogger>) -> Router {
    FolioBuilder::new(ContactSettings::default())
        .with_logger(logger)
        .build()
        .unwrap()
        .router(platform)
        .unwrap()
}

fn assert_cors(headers: &HeaderMap, origin: &str) {
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], origin);
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_METHODS], "POST, OPTIONS");
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_HEADERS], "Content-Type");
    assert_eq!(headers[header::CONTENT_TYPE], "application/json");
}

#[tokio::test]
async fn test_vercel_dry_run_submission() {
    let logger = Arc::new(RecordingLogger::new());
    let app = dry_run_app(Platform::Vercel, logger.clone());

    let response = send(app, "POST", "/api/contact", jane().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_cors(&response.headers, "*");
    assert_eq!(
        response.json(),
        json!({"success": true, "message": "Message sent successfully"})
    );

    let entries = logger.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].1, "your.email@example.com");
}

#[tokio::test]
async fn test_vercel_sends_with_mailer() {
    let mailer = Arc::new(RecordingMailer::new());
    let app = FolioBuilder::new(ContactSettings::default())
        .with_mailer(mailer.clone())
        .build()
        .unwrap()
        .router(Platform::Vercel)
        .unwrap();

    let response = send(app, "POST", "/api/contact", jane().to_string()).await;
    assert_eq!(response.status, StatusCode::OK);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to, vec!["your.email@example.com".to_string()]);
    assert_eq!(sent[0].from, "noreply@yourdomain.com");
    assert!(sent[0].html_body.as_deref().unwrap().contains("line1<br>line2"));
}

#[tokio::test]
async fn test_get_is_rejected_with_cors() {
    let logger = Arc::new(RecordingLogger::new());
    let app = dry_run_app(Platform::Vercel, logger.clone());

    let response = send(app, "GET", "/api/contact", Body::empty()).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_cors(&response.headers, "*");
    assert_eq!(response.json(), json!({"error": "Method not allowed"}));
    assert!(logger.entries().is_empty());
}

#[tokio::test]
async fn test_validation_errors() {
    let logger = Arc::new(RecordingLogger::new());

    let mut missing = jane();
    missing.as_object_mut().unwrap().remove("subject");
    let response = send(
        dry_run_app(Platform::Vercel, logger.clone()),
        "POST",
        "/api/contact",
        missing.to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "All fields are required"}));

    let mut bad_email = jane();
    bad_email["email"] = json!("foo bar@baz.com");
    let response = send(
        dry_run_app(Platform::Vercel, logger.clone()),
        "POST",
        "/api/contact",
        bad_email.to_string(),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json(), json!({"error": "Invalid email address"}));

    assert!(logger.entries().is_empty());
}

#[tokio::test]
async fn test_malformed_json() {
    let app = dry_run_app(Platform::Vercel, Arc::new(RecordingLogger::new()));

    let response = send(app, "POST", "/api/contact", "{\"name\": \"Jane\"").await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_cors(&response.headers, "*");
    let body = response.json();
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["message"].is_string());
}

#[tokio::test]
async fn test_preflight_answered_on_vercel() {
    let app = dry_run_app(Platform::Vercel, Arc::new(RecordingLogger::new()));

    let response = send(app, "OPTIONS", "/api/contact", Body::empty()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_cors(&response.headers, "*");
    assert!(response.body.is_empty());
}

#[tokio::test]
async fn test_preflight_left_to_static_web_apps_host() {
    let app = dry_run_app(Platform::StaticWebApps, Arc::new(RecordingLogger::new()));

    let response = send(app, "OPTIONS", "/api/contact", Body::empty()).await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.json(), json!({"error": "Method not allowed"}));
}

#[tokio::test]
async fn test_configured_origin_and_path() {
    let folio = FolioBuilder::new(ContactSettings::default())
        .with_logger(Arc::new(RecordingLogger::new()))
        .with_cors(CorsConfig::new("https://jane.dev"))
        .build()
        .unwrap();
    let app = folio
        .router_builder(Platform::Vercel)
        .with_path("/contact")
        .build()
        .unwrap();

    let response = send(app, "POST", "/contact", jane().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_cors(&response.headers, "https://jane.dev");
}

#[tokio::test]
async fn test_azure_custom_handler_route() {
    let logger = Arc::new(RecordingLogger::new());
    let app = dry_run_app(Platform::AzureFunctions, logger.clone());

    let invocation = json!({
        "Data": {
            "req": {
                "Method": "POST",
                "Headers": { "Content-Type": ["application/json"] },
                "Body": jane().to_string()
            }
        },
        "Metadata": {}
    });

    let response = send(app, "POST", "/contact", invocation.to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["Outputs"]["res"]["statusCode"], 200);
    assert_eq!(
        body["Outputs"]["res"]["headers"]["Access-Control-Allow-Origin"],
        "*"
    );
    let inner: Value =
        serde_json::from_str(body["Outputs"]["res"]["body"].as_str().unwrap()).unwrap();
    assert_eq!(inner["success"], true);
    assert_eq!(logger.entries().len(), 1);
}

#[tokio::test]
async fn test_health_reports_mode() {
    let app = dry_run_app(Platform::StaticWebApps, Arc::new(RecordingLogger::new()));

    let response = send(app, "GET", "/health", Body::empty()).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["platform"], "static-web-apps");
    assert_eq!(body["dry_run"], true);
}

#[tokio::test]
async fn test_oversized_body_keeps_cors() {
    let logger = Arc::new(RecordingLogger::new());
    let app = dry_run_app(Platform::Vercel, logger.clone());

    let response = send(app, "POST", "/api/contact", vec![b'a'; 3 * 1024 * 1024]).await;

    assert_eq!(response.status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_cors(&response.headers, "*");
    let body = response.json();
    assert_eq!(body["error"], "Invalid request body");
    assert!(body["message"].is_string());
    assert!(logger.entries().is_empty());
}

#[tokio::test]
async fn test_unreadable_azure_envelope_is_answered_in_envelope() {
    let app = dry_run_app(Platform::AzureFunctions, Arc::new(RecordingLogger::new()));

    let response = send(app, "POST", "/contact", "not an invocation").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["Outputs"]["res"]["statusCode"], 400);
    assert_eq!(
        body["Outputs"]["res"]["headers"]["Access-Control-Allow-Origin"],
        "*"
    );
    let inner: Value =
        serde_json::from_str(body["Outputs"]["res"]["body"].as_str().unwrap()).unwrap();
    assert_eq!(inner["error"], "Invalid request body");
}

#[tokio::test]
async fn test_relative_path_is_served() {
    let folio = FolioBuilder::new(ContactSettings::default())
        .with_logger(Arc::new(RecordingLogger::new()))
        .build()
        .unwrap();
    let app = folio
        .router_builder(Platform::Vercel)
        .with_path("contact")
        .build()
        .unwrap();

    let response = send(app, "POST", "/contact", jane().to_string()).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_cors(&response.headers, "*");
}
