// src/application/validation.rs
//
// Resolver-level input validation. Each checker inspects every field of its
// input shape and returns the full list of violations instead of stopping at
// the first one; an empty list means the input is valid.
use crate::application::error::{ApplicationError, ApplicationResult};

pub const MIN_PASSWORD_LENGTH: usize = 5;
pub const MIN_TITLE_LENGTH: usize = crate::domain::post::MIN_TITLE_LENGTH;
pub const MIN_CONTENT_LENGTH: usize = crate::domain::post::MIN_CONTENT_LENGTH;

/// Literal some clients send for an untouched image field; it must never
/// overwrite a stored image URL.
pub const IMAGE_URL_PLACEHOLDER: &str = "undefined";

pub fn validate_registration(email: &str, password: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if !is_email(email) {
        errors.push("e-mail is invalid".to_string());
    }
    if password.trim().is_empty() || password.len() < MIN_PASSWORD_LENGTH {
        errors.push("password too short".to_string());
    }
    errors
}

pub fn validate_post_input(title: &str, content: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if title.trim().is_empty() || title.len() < MIN_TITLE_LENGTH {
        errors.push("title is invalid".to_string());
    }
    if content.trim().is_empty() || content.len() < MIN_CONTENT_LENGTH {
        errors.push("content is invalid".to_string());
    }
    errors
}

pub fn validate_status(status: &str) -> Vec<String> {
    if status.trim().is_empty() {
        vec!["status must not be empty".to_string()]
    } else {
        Vec::new()
    }
}

/// Promote an accumulated error list into a failure.
pub fn ensure_valid(errors: Vec<String>) -> ApplicationResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ApplicationError::invalid_input(errors))
    }
}

/// RFC-shaped address check: exactly one `@`, a non-empty local part, and a
/// dotted domain without whitespace. Deliberately not a full RFC 5322 parser.
fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    if value.chars().any(char::is_whitespace) || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
