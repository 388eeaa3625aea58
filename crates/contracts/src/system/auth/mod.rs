//! Sign-in / sign-up form contracts and their field validation.
//!
//! There is no session here: a form that validates is all the client needs
//! before moving on to the feed.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{label} is required")]
    Required {
        field: &'static str,
        label: &'static str,
    },

    #[error("Enter a valid email address")]
    InvalidEmail,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Accept the community guidelines to continue")]
    TermsNotAccepted,

    #[error("Posts are limited to {max} characters ({len} entered)")]
    TooLong { len: usize, max: usize },
}

impl FieldError {
    /// Name of the form field the message belongs under.
    pub fn field(&self) -> &'static str {
        match self {
            FieldError::Required { field, .. } => *field,
            FieldError::InvalidEmail => "email",
            FieldError::PasswordTooShort { .. } => "password",
            FieldError::PasswordMismatch => "confirm_password",
            FieldError::TermsNotAccepted => "accept_terms",
            FieldError::TooLong { .. } => "body",
        }
    }
}

/// First message for `field`, if any.
pub fn error_for(errors: &[FieldError], field: &str) -> Option<String> {
    errors
        .iter()
        .find(|e| e.field() == field)
        .map(ToString::to_string)
}

/// Loose shape check: non-empty local part, and a domain of at least two
/// dot-separated labels, none of them empty.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

fn require(
    errors: &mut Vec<FieldError>,
    value: &str,
    field: &'static str,
    label: &'static str,
) -> bool {
    if value.trim().is_empty() {
        errors.push(FieldError::Required { field, label });
        false
    } else {
        true
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
}

impl SignInForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if require(&mut errors, &self.email, "email", "Email") && !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        require(&mut errors, &self.password, "password", "Password");
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SignUpForm {
    pub display_name: String,
    pub email: String,
    pub instrument: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub accept_terms: bool,
}

impl SignUpForm {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        require(&mut errors, &self.display_name, "display_name", "Display name");
        if require(&mut errors, &self.email, "email", "Email") && !is_valid_email(&self.email) {
            errors.push(FieldError::InvalidEmail);
        }
        if require(&mut errors, &self.password, "password", "Password")
            && self.password.chars().count() < MIN_PASSWORD_LEN
        {
            errors.push(FieldError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        if self.password != self.confirm_password {
            errors.push(FieldError::PasswordMismatch);
        }
        if !self.accept_terms {
            errors.push(FieldError::TermsNotAccepted);
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

    fn valid_sign_up() -> SignUpForm {
        SignUpForm {
            display_name: "Nina Vale".to_string(),
            email: "nina@example.com".to_string(),
            instrument: Some("Bass".to_string()),
            password: "walking-bassline".to_string(),
            confirm_password: "walking-bassline".to_string(),
            accept_terms: true,
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("nina@example.com"));
        assert!(is_valid_email("  nina@studio.example.org "));
        assert!(!is_valid_email("nina"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("nina@example"));
        assert!(!is_valid_email("nina@.com"));
        assert!(!is_valid_email("nina@example."));
        assert!(!is_valid_email("ni na@example.com"));
        assert!(!is_valid_email("nina@a@example.com"));
    }

    #[test]
    fn test_email_domain_labels_must_not_be_empty() {
        assert!(!is_valid_email("a@b..c"));
        assert!(!is_valid_email("nina@studio..example.org"));
        assert!(!is_valid_email("nina@example.com."));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn test_sign_in_requires_both_fields() {
        let errors = SignInForm::default().validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(FieldError::field).collect();
        assert_eq!(fields, ["email", "password"]);
    }

    #[test]
    fn test_sign_in_rejects_bad_email() {
        let form = SignInForm {
            email: "nina.example.com".to_string(),
            password: "secret".to_string(),
        };
        assert_eq!(form.validate(), Err(vec![FieldError::InvalidEmail]));
    }

    #[test]
    fn test_sign_up_accepts_valid_form() {
        assert_eq!(valid_sign_up().validate(), Ok(()));

        let mut no_instrument = valid_sign_up();
        no_instrument.instrument = None;
        assert_eq!(no_instrument.validate(), Ok(()));
    }

    #[test]
    fn test_sign_up_collects_every_error() {
        let form = SignUpForm {
            display_name: "  ".to_string(),
            email: "nina".to_string(),
            instrument: None,
            password: "short".to_string(),
            confirm_password: "shorter".to_string(),
            accept_terms: false,
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(
            errors,
            vec![
                FieldError::Required {
                    field: "display_name",
                    label: "Display name",
                },
                FieldError::InvalidEmail,
                FieldError::PasswordTooShort { min: 8 },
                FieldError::PasswordMismatch,
                FieldError::TermsNotAccepted,
            ]
        );
        assert_eq!(
            error_for(&errors, "password").as_deref(),
            Some("Password must be at least 8 characters")
        );
        assert_eq!(
            error_for(&errors, "display_name").as_deref(),
            Some("Display name is required")
        );
        assert_eq!(error_for(&errors, "instrument"), None);
    }
}
