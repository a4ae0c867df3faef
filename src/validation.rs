//! Form validation
//!
//! Every rule is checked independently, so the caller gets the full list of
//! problems in field order rather than the first one.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::formatting::digits_only;
use crate::types::{FieldName, FormData};

/// Minimum digit count for a non-empty phone number
pub const MIN_PHONE_DIGITS: usize = 11;

static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex should be valid"));

/// A user-correctable problem with one field
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    #[error("Full name is required")]
    FullNameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Enter a valid email address")]
    EmailInvalid,

    #[error("Enter a valid phone number (at least 11 digits)")]
    PhoneTooShort,

    #[error("Message is required")]
    MessageRequired,

    #[error("You must agree to the privacy policy")]
    ConsentRequired,
}

impl FieldError {
    /// The field this error belongs to
    pub fn field(&self) -> FieldName {
        match self {
            FieldError::FullNameRequired => FieldName::FullName,
            FieldError::EmailRequired | FieldError::EmailInvalid => FieldName::Email,
            FieldError::PhoneTooShort => FieldName::Phone,
            FieldError::MessageRequired => FieldName::Message,
            FieldError::ConsentRequired => FieldName::PrivacyPolicy,
        }
    }
}

/// Check an email address against the `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// Validate a form snapshot. An empty list means the form can be sent.
pub fn validate(data: &FormData) -> Vec<FieldError> {
    let mut errors = Vec::new();

    if data.full_name.trim().is_empty() {
        errors.push(FieldError::FullNameRequired);
    }

    if data.email.trim().is_empty() {
        errors.push(FieldError::EmailRequired);
    } else if !is_valid_email(&data.email) {
        errors.push(FieldError::EmailInvalid);
    }

    if !data.phone.trim().is_empty() && digits_only(&data.phone).len() < MIN_PHONE_DIGITS {
        errors.push(FieldError::PhoneTooShort);
    }

    if data.message.trim().is_empty() {
        errors.push(FieldError::MessageRequired);
    }

    if !data.privacy_policy {
        errors.push(FieldError::ConsentRequired);
    }

    errors
}

/// Join validation errors into the text of one status message
pub fn join_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> FormData {
        FormData {
            full_name: "Ivan Petrov".to_string(),
            email: "ivan@example.com".to_string(),
            phone: "+7 (999) 123-45-67".to_string(),
            organization: String::new(),
            message: "Hello".to_string(),
            privacy_policy: true,
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_phone_is_optional() {
        let data = FormData {
            phone: "   ".to_string(),
            ..valid_form()
        };
        assert!(validate(&data).is_empty());
    }

    #[test]
    fn test_missing_name_only() {
        let data = FormData {
            full_name: String::new(),
            email: "a@b.com".to_string(),
            phone: String::new(),
            organization: String::new(),
            message: "hi".to_string(),
            privacy_policy: true,
        };
        assert_eq!(validate(&data), vec![FieldError::FullNameRequired]);
    }

    #[test]
    fn test_whitespace_counts_as_blank() {
        let data = FormData {
            full_name: " \t".to_string(),
            message: "\n".to_string(),
            ..valid_form()
        };
        assert_eq!(
            validate(&data),
            vec![FieldError::FullNameRequired, FieldError::MessageRequired]
        );
    }

    #[test]
    fn test_all_rules_reported_in_order() {
        let data = FormData {
            phone: "+7 (999) 12".to_string(),
            email: "not-an-email".to_string(),
            ..FormData::default()
        };
        assert_eq!(
            validate(&data),
            vec![
                FieldError::FullNameRequired,
                FieldError::EmailInvalid,
                FieldError::PhoneTooShort,
                FieldError::MessageRequired,
                FieldError::ConsentRequired,
            ]
        );
    }

    #[test]
    fn test_blank_email_is_required_not_invalid() {
        let data = FormData {
            email: "  ".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&data), vec![FieldError::EmailRequired]);
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last+tag@sub.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@@b.com"));
        assert!(!is_valid_email(" a@b.com"));
    }

    #[test]
    fn test_phone_digit_threshold() {
        let ten = FormData {
            phone: "+7 (999) 123-45-6".to_string(),
            ..valid_form()
        };
        assert_eq!(validate(&ten), vec![FieldError::PhoneTooShort]);

        let eleven = FormData {
            phone: "79991234567".to_string(),
            ..valid_form()
        };
        assert!(validate(&eleven).is_empty());
    }

    #[test]
    fn test_error_fields() {
        assert_eq!(FieldError::EmailInvalid.field(), FieldName::Email);
        assert_eq!(FieldError::ConsentRequired.field(), FieldName::PrivacyPolicy);
    }

    #[test]
    fn test_join_errors() {
        let joined = join_errors(&[FieldError::FullNameRequired, FieldError::MessageRequired]);
        assert_eq!(joined, "Full name is required\nMessage is required");
        assert_eq!(join_errors(&[]), "");
    }
}
