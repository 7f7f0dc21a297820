//! Denylist section - checks if password is a known common password.

use crate::denylist::is_denylisted;
use secrecy::{ExposeSecret, SecretString};
use super::SectionResult;

const DENYLIST_REASON: &str = "Avoid common passwords.";

/// Checks if the password is in the denylist of common passwords.
///
/// # Returns
/// - `Some(reason)` if password is denylisted
/// - `None` if password is not in denylist
pub fn denylist_section(password: &SecretString) -> SectionResult {
    if is_denylisted(password.expose_secret()) {
        return Some(DENYLIST_REASON);
    }
    None
}
