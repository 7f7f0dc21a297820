//! Character variety sections - case mixing, digits, special characters.
//!
//! Classification is ASCII only: `É` is neither an uppercase letter nor a
//! digit, so it counts as a special character.

use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

/// Checks for at least one ASCII uppercase and one ASCII lowercase letter.
pub fn case_mix_section(password: &SecretString) -> SectionResult {
    let pwd = password.expose_secret();
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());

    if !(has_upper && has_lower) {
        return Some("Include both uppercase and lowercase letters.");
    }
    None
}

/// Checks for at least one ASCII digit.
pub fn digit_section(password: &SecretString) -> SectionResult {
    if !password.expose_secret().chars().any(|c| c.is_ascii_digit()) {
        return Some("Include numbers.");
    }
    None
}

/// Checks for at least one character outside `[A-Za-z0-9]`.
pub fn special_section(password: &SecretString) -> SectionResult {
    if !password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
    {
        return Some("Add special characters (e.g., @, #, $).");
    }
    None
}
