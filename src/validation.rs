use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ContactBookError, ContactBookResult};

fn phone_pattern() -> &'static Regex {
    static PHONE_RE: OnceLock<Regex> = OnceLock::new();
    // Anchored at both ends: an unanchored match would accept trailing garbage.
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?1?\d{9,15}$").expect("valid phone regex"))
}

fn email_pattern() -> &'static Regex {
    static EMAIL_RE: OnceLock<Regex> = OnceLock::new();
    EMAIL_RE.get_or_init(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").expect("valid email regex"))
}

/// True iff the whole string is an international phone number: an optional
/// leading `+`, an optional country prefix `1`, then 9-15 digits.
pub fn is_valid_phone(phone: &str) -> bool {
    phone_pattern().is_match(phone)
}

/// True iff the whole string has the shape `local@domain.tld`, with
/// word characters, dots, and hyphens on either side of the `@`.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Validates a phone number, returning the trimmed string on success.
pub fn valid_phone(phone: &str) -> ContactBookResult<String> {
    let trimmed = phone.trim();
    if is_valid_phone(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ContactBookError::InvalidPhone {
            value: trimmed.to_string(),
        })
    }
}

/// Validates an email address, returning the trimmed string on success.
pub fn valid_email(email: &str) -> ContactBookResult<String> {
    let trimmed = email.trim();
    if is_valid_email(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(ContactBookError::InvalidEmail {
            value: trimmed.to_string(),
        })
    }
}

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: &str) -> ContactBookResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactBookError::BlankField {
            field: field.to_string(),
        })
    } else {
        Ok(trimmed)
    }
}

/// Trims an optional string, returning None if blank.
pub fn trim_optional(value: Option<&str>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
