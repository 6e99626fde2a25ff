//! Phone number utilities
//!
//! Normalization of free-form user-entered phone numbers into canonical
//! dialable forms, plus validation and log-masking helpers.

use once_cell::sync::Lazy;
use regex::Regex;

// International phone number regex (E.164 format)
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// Strip every character that is not a decimal digit.
///
/// `None` yields an empty string. No length validation is performed.
pub fn numerize(input: Option<&str>) -> String {
    input
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect()
}

/// Convert a free-form phone number into international dialing format.
///
/// - 11 digits become `+<digits>`
/// - 10 digits become `+1<digits>` (US country code assumed)
/// - a 12-character string that already carries a `+` prefix passes
///   through unchanged
///
/// Anything else is rejected with `None`. Note that a 12-digit string
/// *without* a `+` prefix is not auto-prefixed; callers relying on the
/// historical behavior expect it to be rejected.
pub fn internationalize(input: Option<&str>) -> Option<String> {
    let digits = numerize(input);
    match digits.len() {
        11 => Some(format!("+{}", digits)),
        10 => Some(format!("+1{}", digits)),
        _ => None,
    }
}

/// Check if a phone number is in valid E.164 format
pub fn is_valid_e164(phone: &str) -> bool {
    E164_REGEX.is_match(phone)
}

/// Mask a phone number for logging, keeping only the last four digits
/// (e.g. `+******7890`).
///
/// The input is free-form user text; it is reduced to its digits (and a
/// leading `+`) before masking so slicing stays on character boundaries.
pub fn mask_phone_number(phone: &str) -> String {
    let normalized: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    let (prefix, digits) = match normalized.strip_prefix('+') {
        Some(rest) => ("+", rest),
        None => ("", normalized.as_str()),
    };

    let visible = 4;
    if digits.len() <= visible {
        return format!("{}{}", prefix, "*".repeat(digits.len()));
    }
    format!(
        "{}{}{}",
        prefix,
        "*".repeat(digits.len() - visible),
        &digits[digits.len() - visible..]
    )
}

/// True when the value is absent, empty, or whitespace-only
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}
