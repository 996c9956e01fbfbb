use crate::{Email, Mailer, MailerError};
use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use std::time::Duration;

pub const DEFAULT_SENDGRID_URL: &str = "https://api.sendgrid.com";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Delivers mail through the SendGrid v3 `mail/send` API.
#[derive(Debug)]
pub struct SendGridTransport {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
}

impl SendGridTransport {
    pub fn new(api_key: impl Into<String>) -> Result<Self, MailerError> {
        Self::with_base_url(api_key, DEFAULT_SENDGRID_URL)
    }

    pub fn with_base_url(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, MailerError> {
        let api_key: String = api_key.into();
        if api_key.is_empty() {
            return Err(MailerError::Config(
                "SendGrid API key must not be empty".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            api_key: SecretString::from(api_key),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self) -> String {
        format!("{}/v3/mail/send", self.base_url)
    }
}

#[async_trait]
impl Mailer for SendGridTransport {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        email.validate()?;

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.api_key.expose_secret())
            .json(&SendGridPayload::from_email(&email))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "SendGrid rejected message");
            return Err(MailerError::Provider {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(status = status.as_u16(), "SendGrid accepted message");
        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct SendGridPayload<'a> {
    personalizations: Vec<Personalization<'a>>,
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: Vec<Address<'a>>,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    value: &'a str,
}

impl<'a> SendGridPayload<'a> {
    fn from_email(email: &'a Email) -> Self {
        // SendGrid requires text/plain to precede text/html
        let mut content = Vec::with_capacity(2);
        if let Some(text) = &email.text_body {
            content.push(Content {
                kind: "text/plain",
                value: text,
            });
        }
        if let Some(html) = &email.html_body {
            content.push(Content {
                kind: "text/html",
                value: html,
            });
        }

        Self {
            personalizations: vec![Personalization {
                to: email.to.iter().map(|to| Address { email: to }).collect(),
            }],
            from: Address { email: &email.from },
            reply_to: email.reply_to.as_deref().map(|email| Address { email }),
            subject: &email.subject,
            content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::State, http::HeaderMap, http::StatusCode, routing::post};
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Captured {
        requests: Arc<Mutex<Vec<(Option<String>, Value)>>>,
    }

    async fn spawn_provider(status: StatusCode) -> (String, Captured) {
        let captured = Captured::default();

        let app = Router::new()
            .route(
                "/v3/mail/send",
                post(
                    move |State(captured): State<Captured>,
                          headers: HeaderMap,
                          Json(body): Json<Value>| async move {
                        let auth = headers
                            .get("authorization")
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        captured.requests.lock().unwrap().push((auth, body));
                        (status, "provider says no")
                    },
                ),
            )
            .with_state(captured.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{addr}"), captured)
    }

    fn contact_email() -> Email {
        Email::builder()
            .to("owner@example.com")
            .from("noreply@yourdomain.com")
            .reply_to("jane@example.com")
            .subject("Portfolio Contact: Hi")
            .text_body("line1\nline2")
            .html_body("<p>line1<br>line2</p>")
            .build()
            .unwrap()
    }

    #[test]
    fn test_payload_shape() {
        let email = contact_email();
        let payload = serde_json::to_value(SendGridPayload::from_email(&email)).unwrap();

        assert_eq!(
            payload,
            json!({
                "personalizations": [{ "to": [{ "email": "owner@example.com" }] }],
                "from": { "email": "noreply@yourdomain.com" },
                "reply_to": { "email": "jane@example.com" },
                "subject": "Portfolio Contact: Hi",
                "content": [
                    { "type": "text/plain", "value": "line1\nline2" },
                    { "type": "text/html", "value": "<p>line1<br>line2</p>" }
                ]
            })
        );
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = SendGridTransport::new("");
        assert!(matches!(result, Err(MailerError::Config(_))));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let transport = SendGridTransport::with_base_url("key", "http://localhost:9/").unwrap();
        assert_eq!(transport.endpoint(), "http://localhost:9/v3/mail/send");
    }

    #[tokio::test]
    async fn test_send_posts_to_provider() {
        let (base_url, captured) = spawn_provider(StatusCode::ACCEPTED).await;
        let transport = SendGridTransport::with_base_url("SG.test-key", base_url).unwrap();

        transport.send_email(contact_email()).await.unwrap();

        let requests = captured.requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        let (auth, body) = &requests[0];
        assert_eq!(auth.as_deref(), Some("Bearer SG.test-key"));
        assert_eq!(body["reply_to"]["email"], "jane@example.com");
        assert_eq!(body["personalizations"][0]["to"][0]["email"], "owner@example.com");
    }

    #[tokio::test]
    async fn test_send_surfaces_provider_rejection() {
        let (base_url, _captured) = spawn_provider(StatusCode::UNAUTHORIZED).await;
        let transport = SendGridTransport::with_base_url("SG.bad-key", base_url).unwrap();

        let err = transport.send_email(contact_email()).await.unwrap_err();
        match err {
            MailerError::Provider { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "provider says no");
            }
            other => panic!("Expected provider error, got {other:?}"),
        }
    }
}
