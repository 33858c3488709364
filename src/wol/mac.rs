//! MAC address normalization
//!
//! Accepts `XX:XX:XX:XX:XX:XX`, `XX-XX-XX-XX-XX-XX` and `XXXXXXXXXXXX`
//! (any case) and produces the canonical colon-separated uppercase form.

use thiserror::Error;

/// Value meaning "no MAC address configured yet"
pub const MAC_PLACEHOLDER: &str = "XX:XX:XX:XX:XX:XX";

/// Number of hex digits in a 48-bit MAC address
const MAC_HEX_DIGITS: usize = 12;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MacError {
    #[error("Invalid MAC address length: expected 12 hex digits, found {0}")]
    InvalidLength(usize),

    #[error("Invalid MAC address characters in '{0}': only hexadecimal digits are allowed")]
    InvalidCharacters(String),
}

/// Normalize a MAC address to `XX:XX:XX:XX:XX:XX`
///
/// Separators (`:`, `-` and spaces) are stripped and the remainder is
/// uppercased before validation, so the function is idempotent on its output.
pub fn normalize_mac(input: &str) -> Result<String, MacError> {
    let digits = input
        .chars()
        .filter(|c| !matches!(c, ':' | '-' | ' '))
        .collect::<String>()
        .to_uppercase();

    let len = digits.chars().count();
    if len != MAC_HEX_DIGITS {
        return Err(MacError::InvalidLength(len));
    }

    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(MacError::InvalidCharacters(input.to_string()));
    }

    // All ASCII from here on, so byte slicing is safe
    let pairs: Vec<&str> = (0..MAC_HEX_DIGITS)
        .step_by(2)
        .map(|i| &digits[i..i + 2])
        .collect();
    Ok(pairs.join(":"))
}
