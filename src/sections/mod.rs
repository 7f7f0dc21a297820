//! Password evaluation sections
//!
//! Each section checks a single aspect of password strength.

mod denylist;
mod length;
mod variety;

pub use denylist::denylist_section;
pub use length::{MIN_LENGTH, length_section};
pub use variety::{case_mix_section, digit_section, special_section};

/// Result type for section evaluation functions.
/// - `Some(reason)` - Section failed with reason
/// - `None` - Section passed
pub type SectionResult = Option<&'static str>;

/// Signature shared by every section.
pub type Section = fn(&secrecy::SecretString) -> SectionResult;
