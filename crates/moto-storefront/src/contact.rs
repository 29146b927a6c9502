//! Contact form state and validation.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

const MAX_NAME_CHARS: usize = 100;
const MAX_EMAIL_CHARS: usize = 255;
const MAX_MESSAGE_CHARS: usize = 1000;

fn email_regex() -> Option<&'static Regex> {
    static EMAIL: OnceLock<Option<Regex>> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).ok()).as_ref()
}

/// Form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

/// Values entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Per-field validation messages. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.message.is_none()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::Email => self.email.as_deref(),
            Field::Message => self.message.as_deref(),
        }
    }

    fn clear(&mut self, field: Field) {
        match field {
            Field::Name => self.name = None,
            Field::Email => self.email = None,
            Field::Message => self.message = None,
        }
    }
}

/// Check every field. Only the first failing rule per field is reported.
pub fn validate(values: &ContactMessage) -> FieldErrors {
    FieldErrors {
        name: validate_name(&values.name),
        email: validate_email(&values.email),
        message: validate_message(&values.message),
    }
}

fn validate_name(name: &str) -> Option<String> {
    if name.trim().is_empty() {
        Some("Name is required".to_string())
    } else if name.chars().count() > MAX_NAME_CHARS {
        Some("Name must be less than 100 characters".to_string())
    } else {
        None
    }
}

fn validate_email(email: &str) -> Option<String> {
    if email.trim().is_empty() {
        Some("Email is required".to_string())
    } else if !email_regex().is_some_and(|re| re.is_match(email)) {
        Some("Please enter a valid email address".to_string())
    } else if email.chars().count() > MAX_EMAIL_CHARS {
        Some("Email must be less than 255 characters".to_string())
    } else {
        None
    }
}

fn validate_message(message: &str) -> Option<String> {
    if message.trim().is_empty() {
        Some("Message is required".to_string())
    } else if message.chars().count() > MAX_MESSAGE_CHARS {
        Some("Message must be less than 1000 characters".to_string())
    } else {
        None
    }
}

/// The contact form: current values and the errors from the last submit.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    values: ContactMessage,
    errors: FieldErrors,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &ContactMessage {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Edit a field. Any error shown for it is cleared.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.values.name = value,
            Field::Email => self.values.email = value,
            Field::Message => self.values.message = value,
        }
        self.errors.clear(field);
    }

    /// Validate and send. On success the form is reset and the sent
    /// message returned; otherwise the errors are kept for display.
    pub fn submit(&mut self) -> Result<ContactMessage, FieldErrors> {
        let errors = validate(&self.values);
        if !errors.is_empty() {
            tracing::debug!(?errors, "contact form rejected");
            self.errors = errors.clone();
            return Err(errors);
        }

        let sent = std::mem::take(&mut self.values);
        self.errors = FieldErrors::default();
        tracing::info!(name = %sent.name, email = %sent.email, "contact message submitted");
        Ok(sent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new();
        form.set(Field::Name, "Valentino");
        form.set(Field::Email, "vr46@example.com");
        form.set(Field::Message, "Do you ship to Tavullia?");
        form
    }

    #[test]
    fn test_empty_form_reports_required() {
        let errors = validate(&ContactMessage::default());
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Message), Some("Message is required"));
    }

    #[test]
    fn test_whitespace_counts_as_missing() {
        let values = ContactMessage {
            name: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(validate(&values).name.as_deref(), Some("Name is required"));
    }

    #[test]
    fn test_email_format() {
        for bad in ["rider", "rider@", "rider@track", "ri der@track.it", "a@b@c.d"] {
            let values = ContactMessage {
                email: bad.to_string(),
                ..Default::default()
            };
            assert_eq!(
                validate(&values).email.as_deref(),
                Some("Please enter a valid email address"),
                "{bad}"
            );
        }
        let values = ContactMessage {
            email: "rider@track.it".to_string(),
            ..Default::default()
        };
        assert!(validate(&values).email.is_none());
    }

    #[test]
    fn test_length_limits() {
        let values = ContactMessage {
            name: "n".repeat(101),
            email: format!("{}@example.com", "e".repeat(250)),
            message: "m".repeat(1001),
        };
        let errors = validate(&values);
        assert_eq!(errors.name.as_deref(), Some("Name must be less than 100 characters"));
        assert_eq!(errors.email.as_deref(), Some("Email must be less than 255 characters"));
        assert_eq!(
            errors.message.as_deref(),
            Some("Message must be less than 1000 characters")
        );

        let values = ContactMessage {
            name: "n".repeat(100),
            email: "a@b.co".to_string(),
            message: "m".repeat(1000),
        };
        assert!(validate(&values).is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        let values = ContactMessage {
            name: "é".repeat(100),
            email: "a@b.co".to_string(),
            message: "ok".to_string(),
        };
        assert!(validate(&values).name.is_none());
    }

    #[test]
    fn test_submit_resets_form() {
        let mut form = filled();
        let sent = form.submit().unwrap();
        assert_eq!(sent.name, "Valentino");
        assert_eq!(form.values(), &ContactMessage::default());
        assert!(form.errors().is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_values_and_errors() {
        let mut form = filled();
        form.set(Field::Email, "not-an-email");
        let errors = form.submit().unwrap_err();

        assert!(errors.name.is_none());
        assert!(errors.email.is_some());
        assert_eq!(form.values().email, "not-an-email");
        assert_eq!(form.errors(), &errors);

        form.set(Field::Email, "still wrong");
        assert!(form.errors().email.is_none());
    }
}
