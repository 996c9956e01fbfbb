use crate::{
    Email, MailerError,
    templates::{ContactHtmlTemplate, ContactTextTemplate},
};
use askama::Template;

pub const CONTACT_SUBJECT_PREFIX: &str = "Portfolio Contact: ";

/// The fields of a contact-form submission, as rendered into the notification.
#[derive(Debug, Clone, Copy)]
pub struct ContactDetails<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub subject: &'a str,
    pub message: &'a str,
}

/// Notification sent to the site owner for each contact-form submission.
/// Replies go straight to the submitter.
pub struct ContactNotificationEmail;

impl ContactNotificationEmail {
    pub fn build(from: &str, to: &str, details: ContactDetails<'_>) -> Result<Email, MailerError> {
        let html_body = ContactHtmlTemplate::new(
            details.name,
            details.email,
            details.subject,
            details.message,
        )
        .render()?;

        let text_body = ContactTextTemplate {
            name: details.name,
            email: details.email,
            message: details.message,
        }
        .render()?;

        Email::builder()
            .from(from)
            .to(to)
            .reply_to(details.email)
            .subject(format!("{CONTACT_SUBJECT_PREFIX}{}", details.subject))
            .html_body(html_body)
            .text_body(text_body)
            .build()
    }
}
