//! Field rules shared by the member entity and its payloads

use std::borrow::Cow;
use validator::ValidationError;

/// Status assigned when a create payload omits it
pub const DEFAULT_STATUS: &str = "Active";

pub(crate) fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

fn error(code: &'static str, message: &'static str) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(Cow::Borrowed(message));
    err
}

pub(crate) fn validate_full_name(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "fullName is required"));
    }
    Ok(())
}

pub(crate) fn validate_status(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error("required", "status is required"));
    }
    Ok(())
}

pub(crate) fn validate_phone_number(value: &str) -> Result<(), ValidationError> {
    if is_valid_phone(value) {
        Ok(())
    } else {
        Err(error("phone", "phoneNumber must be a valid phone number"))
    }
}

/// Phone syntax check.
///
/// Every `+` is ignored. After an optional trailing extension (`ext.`,
/// `ext` or `x` followed by digits) only digits and the separators ` `, `-`,
/// `.`, `(`, `)` may remain, with at least one digit.
pub fn is_valid_phone(value: &str) -> bool {
    let without_plus = value.replace('+', "");
    let rest = strip_extension(without_plus.trim_end());

    let mut has_digit = false;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            has_digit = true;
        } else if !matches!(c, ' ' | '-' | '.' | '(' | ')') {
            return false;
        }
    }
    has_digit
}

fn strip_extension(value: &str) -> &str {
    let lower = value.to_ascii_lowercase();
    for marker in ["ext.", "ext", "x"] {
        if let Some(pos) = lower.rfind(marker) {
            let digits = value[pos + marker.len()..].trim_start();
            if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
                return &value[..pos];
            }
        }
    }
    value
}
