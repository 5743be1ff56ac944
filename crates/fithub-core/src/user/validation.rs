//! Registration form validation.
//!
//! Runs before a record reaches the selection store; the store itself accepts
//! any record.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use super::model::UserDetails;
use crate::error::FithubError;

/// Phone numbers must carry this many digits once separators are removed.
const PHONE_DIGITS: std::ops::RangeInclusive<usize> = 10..=11;

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| Regex::new(r"^\S+@\S+\.\S+$").expect("email regex must compile"))
}

/// A rejected form field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// camelCase field name, matching the persisted layout.
    pub field: &'static str,
    pub message: String,
}

/// All field errors of one validation pass, in form order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct ValidationErrors {
    pub errors: Vec<FieldError>,
}

impl ValidationErrors {
    fn push(&mut self, field: &'static str, message: &str) {
        self.errors.push(FieldError {
            field,
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Message for a single field, if it was rejected.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .errors
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

impl std::error::Error for ValidationErrors {}

impl From<ValidationErrors> for FithubError {
    fn from(errors: ValidationErrors) -> Self {
        FithubError::Validation(errors.to_string())
    }
}

impl UserDetails {
    /// Checks the registration form rules.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        if self.first_name.trim().is_empty() {
            errors.push("firstName", "First name is required");
        }
        if self.last_name.trim().is_empty() {
            errors.push("lastName", "Last name is required");
        }

        if self.email.trim().is_empty() {
            errors.push("email", "Email is required");
        } else if !email_pattern().is_match(&self.email) {
            errors.push("email", "Email is invalid");
        }

        if self.phone.trim().is_empty() {
            errors.push("phone", "Phone number is required");
        } else {
            let digits = self.phone.chars().filter(|c| c.is_ascii_digit()).count();
            if !PHONE_DIGITS.contains(&digits) {
                errors.push("phone", "Phone number is invalid");
            }
        }

        if self.address.trim().is_empty() {
            errors.push("address", "Address is required");
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_user() -> UserDetails {
        UserDetails {
            first_name: "Nadia".to_string(),
            last_name: "Rahman".to_string(),
            email: "nadia@example.com".to_string(),
            phone: "017-0000-0000".to_string(),
            address: "12 Lake Road, Dhaka".to_string(),
        }
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(valid_user().validate().is_ok());
    }

    #[test]
    fn test_empty_form_reports_every_field_in_order() {
        let errors = UserDetails::default().validate().unwrap_err();
        let fields: Vec<&str> = errors.errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec!["firstName", "lastName", "email", "phone", "address"]
        );
        assert_eq!(errors.get("email"), Some("Email is required"));
        assert_eq!(errors.get("phone"), Some("Phone number is required"));
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let user = UserDetails {
            first_name: "   ".to_string(),
            ..valid_user()
        };
        let errors = user.validate().unwrap_err();
        assert_eq!(errors.get("firstName"), Some("First name is required"));
        assert_eq!(errors.errors.len(), 1);
    }

    #[test]
    fn test_invalid_email() {
        for email in ["nadia", "nadia@example", "na dia@example.com", "@.x"] {
            let user = UserDetails {
                email: email.to_string(),
                ..valid_user()
            };
            let errors = user.validate().unwrap_err();
            assert_eq!(errors.get("email"), Some("Email is invalid"), "{}", email);
        }
    }

    #[test]
    fn test_phone_digit_count() {
        for phone in ["0170000000", "01700000000", "+880 1700-000000"] {
            let digits = phone.chars().filter(|c| c.is_ascii_digit()).count();
            let user = UserDetails {
                phone: phone.to_string(),
                ..valid_user()
            };
            assert_eq!(user.validate().is_ok(), (10..=11).contains(&digits), "{}", phone);
        }

        let user = UserDetails {
            phone: "12345".to_string(),
            ..valid_user()
        };
        assert_eq!(
            user.validate().unwrap_err().get("phone"),
            Some("Phone number is invalid")
        );
    }

    #[test]
    fn test_converts_to_validation_error() {
        let err: FithubError = UserDetails::default().validate().unwrap_err().into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("firstName: First name is required"));
    }

    #[test]
    fn test_full_name() {
        assert_eq!(valid_user().full_name(), "Nadia Rahman");
    }
}
