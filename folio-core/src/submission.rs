use folio_mailer::ContactDetails;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ContactError;
use crate::validation::{is_present, validate_email};

/// A validated contact-form submission. Lives for one request only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactSubmission {
    /// Pulls the four fields out of a JSON body and validates them.
    ///
    /// Presence is checked for every field before the email pattern, so a body
    /// with a missing name and a bad email reports the missing field.
    pub fn from_json(body: &Value) -> Result<Self, ContactError> {
        let field = |key: &str| body.get(key).and_then(Value::as_str);

        let fields = [
            field("name"),
            field("email"),
            field("subject"),
            field("message"),
        ];

        if !fields.iter().all(|value| is_present(*value)) {
            return Err(ContactError::MissingFields);
        }

        let [Some(name), Some(email), Some(subject), Some(message)] = fields else {
            return Err(ContactError::MissingFields);
        };

        validate_email(email)?;

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        })
    }

    pub fn details(&self) -> ContactDetails<'_> {
        ContactDetails {
            name: &self.name,
            email: &self.email,
            subject: &self.subject,
            message: &self.message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "name": "Jane",
            "email": "jane@example.com",
            "subject": "Hi",
            "message": "line1\nline2"
        })
    }

    #[test]
    fn test_valid_submission() {
        let submission = ContactSubmission::from_json(&valid()).unwrap();
        assert_eq!(submission.name, "Jane");
        assert_eq!(submission.message, "line1\nline2");
    }

    #[test]
    fn test_each_field_required() {
        for field in ["name", "email", "subject", "message"] {
            let mut missing = valid();
            missing.as_object_mut().unwrap().remove(field);
            assert!(
                matches!(
                    ContactSubmission::from_json(&missing),
                    Err(ContactError::MissingFields)
                ),
                "missing {field} should be rejected"
            );

            let mut empty = valid();
            empty[field] = json!("");
            assert!(matches!(
                ContactSubmission::from_json(&empty),
                Err(ContactError::MissingFields)
            ));

            let mut null = valid();
            null[field] = Value::Null;
            assert!(matches!(
                ContactSubmission::from_json(&null),
                Err(ContactError::MissingFields)
            ));
        }
    }

    #[test]
    fn test_non_string_field_counts_as_missing() {
        let mut body = valid();
        body["name"] = json!(42);
        assert!(matches!(
            ContactSubmission::from_json(&body),
            Err(ContactError::MissingFields)
        ));
    }

    #[test]
    fn test_non_object_body() {
        for body in [json!([]), json!("text"), Value::Null, json!(7)] {
            assert!(matches!(
                ContactSubmission::from_json(&body),
                Err(ContactError::MissingFields)
            ));
        }
    }

    #[test]
    fn test_missing_field_reported_before_bad_email() {
        let body = json!({ "email": "foo", "subject": "Hi", "message": "x" });
        assert!(matches!(
            ContactSubmission::from_json(&body),
            Err(ContactError::MissingFields)
        ));
    }

    #[test]
    fn test_invalid_email() {
        let mut body = valid();
        body["email"] = json!("foo@bar");
        assert!(matches!(
            ContactSubmission::from_json(&body),
            Err(ContactError::InvalidEmail)
        ));
    }
}
