//! One-time confirmation codes
//!
//! Codes prove ownership of a phone number before outbound messaging is
//! enabled. Comparison is case-insensitive so that custom alphanumeric
//! codes survive user-entered case differences.

use rand::Rng;

/// Length of a confirmation code
pub const CODE_LENGTH: usize = 6;

/// Generate a random 6-digit confirmation code
pub fn generate_code() -> String {
    let mut rng = rand::thread_rng();
    let code: u32 = rng.gen_range(0..1_000_000);
    format!("{:06}", code)
}

/// Compare a user-supplied code against the stored one,
/// ASCII-case-insensitively. An absent stored code compares as the empty
/// string, matching the historical behavior.
pub fn code_matches(stored: Option<&str>, supplied: &str) -> bool {
    stored.unwrap_or("").eq_ignore_ascii_case(supplied)
}
