use crate::{Email, Mailer, MailerError};
use async_trait::async_trait;
use lettre::message::{MultiPart, SinglePart};
use lettre::transport::file::FileTransport as LettreFileTransport;
use lettre::{Message, Transport};
use std::path::{Path, PathBuf};

/// Development outbox: every message is written to `output_dir` as an `.eml` file.
#[derive(Debug, Clone)]
pub struct FileTransport {
    transport: LettreFileTransport,
    output_dir: PathBuf,
}

impl FileTransport {
    pub fn new<P: AsRef<Path>>(output_dir: P) -> Result<Self, MailerError> {
        let output_dir = output_dir.as_ref().to_path_buf();

        if !output_dir.exists() {
            std::fs::create_dir_all(&output_dir)?;
        }

        let transport = LettreFileTransport::new(&output_dir);

        Ok(Self {
            transport,
            output_dir,
        })
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[async_trait]
impl Mailer for FileTransport {
    async fn send_email(&self, email: Email) -> Result<(), MailerError> {
        let message = build_message(email)?;

        // lettre's FileTransport is sync
        let transport = self.transport.clone();
        let id = tokio::task::spawn_blocking(move || transport.send(&message))
            .await
            .map_err(|e| MailerError::Builder(format!("Failed to write email: {e}")))??;

        tracing::debug!(id = %id, dir = %self.output_dir.display(), "Wrote email to outbox");
        Ok(())
    }
}

fn build_message(email: Email) -> Result<Message, MailerError> {
    let mut message_builder = Message::builder()
        .from(email.from.parse()?)
        .subject(email.subject);

    for to in email.to {
        message_builder = message_builder.to(to.parse()?);
    }

    if let Some(reply_to) = email.reply_to {
        message_builder = message_builder.reply_to(reply_to.parse()?);
    }

    let message = match (email.text_body, email.html_body) {
        (Some(text), Some(html)) => message_builder.multipart(
            MultiPart::alternative()
                .singlepart(SinglePart::plain(text))
                .singlepart(SinglePart::html(html)),
        )?,
        (None, Some(html)) => message_builder.singlepart(SinglePart::html(html))?,
        (Some(text), None) => message_builder.singlepart(SinglePart::plain(text))?,
        (None, None) => return Err(MailerError::Builder("No email body provided".to_string())),
    };

    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn contact_email() -> Email {
        Email {
            to: vec!["owner@example.com".to_string()],
            from: "noreply@yourdomain.com".to_string(),
            reply_to: Some("jane@example.com".to_string()),
            subject: "Portfolio Contact: Hi".to_string(),
            html_body: Some("<p>line1<br>line2</p>".to_string()),
            text_body: Some("line1\nline2".to_string()),
        }
    }

    #[tokio::test]
    async fn test_file_transport_writes_eml() {
        let temp_dir = tempdir().unwrap();
        let transport = FileTransport::new(temp_dir.path()).unwrap();

        transport.send_email(contact_email()).await.unwrap();

        let written: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().path())
            .collect();
        assert_eq!(written.len(), 1);
        assert_eq!(written[0].extension().and_then(|e| e.to_str()), Some("eml"));

        let contents = std::fs::read_to_string(&written[0]).unwrap();
        assert!(contents.contains("Reply-To: jane@example.com"));
        assert!(contents.contains("Subject: Portfolio Contact: Hi"));
    }

    #[tokio::test]
    async fn test_file_transport_creates_missing_dir() {
        let temp_dir = tempdir().unwrap();
        let nested = temp_dir.path().join("outbox").join("contact");
        let transport = FileTransport::new(&nested).unwrap();

        assert!(nested.exists());
        assert_eq!(transport.output_dir(), nested.as_path());
    }

    #[tokio::test]
    async fn test_file_transport_rejects_bad_address() {
        let temp_dir = tempdir().unwrap();
        let transport = FileTransport::new(temp_dir.path()).unwrap();

        let mut email = contact_email();
        email.reply_to = Some("not an address".to_string());

        let result = transport.send_email(email).await;
        assert!(matches!(result, Err(MailerError::Address(_))));
    }
}
