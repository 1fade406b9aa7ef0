//! Field-level validation rules for user payloads.
//!
//! Each function validates one field and reports the first violated rule for
//! that field; the `Validate` derive on the DTOs runs them all, so a payload
//! with several bad fields yields one error per field.

use regex::Regex;
use std::sync::LazyLock;
use validator::{ValidateEmail, ValidationError};

/// Usernames: ASCII letters and digits only.
static USER_NAME_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());

/// Person names: Unicode letters and digits, no punctuation or spaces.
static PERSON_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N}]+$").unwrap());

/// Departments: Unicode letters/digits/spaces plus a small punctuation set.
static DEPARTMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{L}\p{N},.:;&# ]+$").unwrap());

fn rule_violation(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

/// userName: 4-255 characters, alphanumeric only.
pub fn validate_user_name(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if !(4..=255).contains(&len) {
        return Err(rule_violation(
            "length",
            "userName must be between 4 and 255 characters",
        ));
    }
    if !USER_NAME_RE.is_match(value) {
        return Err(rule_violation(
            "alphanumeric",
            "userName must contain only alphanumeric characters",
        ));
    }
    Ok(())
}

/// firstName/lastName: 1-255 characters, Unicode letters and digits only.
pub fn validate_person_name(value: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if !(1..=255).contains(&len) {
        return Err(rule_violation(
            "length",
            "name must be between 1 and 255 characters",
        ));
    }
    if !PERSON_NAME_RE.is_match(value) {
        return Err(rule_violation(
            "alphanumeric_unicode",
            "name must contain only letters and digits",
        ));
    }
    Ok(())
}

/// email: at most 255 characters, valid email syntax.
pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > 255 {
        return Err(rule_violation(
            "length",
            "email must be at most 255 characters",
        ));
    }
    if !value.validate_email() {
        return Err(rule_violation("email", "email must be a valid address"));
    }
    Ok(())
}

/// status: one of the closed status codes.
pub fn validate_status_code(value: &str) -> Result<(), ValidationError> {
    if !crate::models::UserStatus::CODES.contains(&value) {
        return Err(rule_violation(
            "user_status",
            "status must be one of 'A', 'I' or 'T'",
        ));
    }
    Ok(())
}

/// department: optional; an empty string is allowed, a whitespace-only string
/// is not, and anything else must stay within the allowed character set.
pub fn validate_department(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    if value.chars().count() > 255 {
        return Err(rule_violation(
            "length",
            "department must be at most 255 characters",
        ));
    }
    if value.trim().is_empty() {
        return Err(rule_violation(
            "not_blank",
            "department must not be blank",
        ));
    }
    if !DEPARTMENT_RE.is_match(value) {
        return Err(rule_violation(
            "department_charset",
            "department contains characters outside the allowed set",
        ));
    }
    Ok(())
}
