//! Denylist of common passwords
//!
//! The set is built once on first use and is read-only afterwards.

use std::collections::HashSet;
use std::sync::LazyLock;

const COMMON_PASSWORDS: &[&str] = &[
    "password",
    "123456",
    "123456789",
    "12345678",
    "12345",
    "1234567",
    "admin",
    "1234567890",
    "letmein",
    "1234",
    "qwertyuiop",
    "123321",
    "password1",
    "123123",
];

static DENYLIST: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    let set: HashSet<&'static str> = COMMON_PASSWORDS.iter().copied().collect();

    #[cfg(feature = "tracing")]
    tracing::debug!("Denylist initialized: {} passwords", set.len());

    set
});

/// Checks if a password is in the denylist.
///
/// Matching is exact and case-sensitive: `"Password"` is not denylisted.
pub fn is_denylisted(password: &str) -> bool {
    DENYLIST.contains(password)
}

/// Iterates over the denylisted passwords in no particular order.
pub fn denylist() -> impl Iterator<Item = &'static str> {
    DENYLIST.iter().copied()
}

/// Number of distinct denylisted passwords.
pub fn denylist_len() -> usize {
    DENYLIST.len()
}
