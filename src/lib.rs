//! Rule-based password strength rating
//!
//! This library rates a password on a five-level scale using four checks
//! (length, case mixing, digits, special characters) and a denylist of
//! common passwords, and reports a suggestion for every failed check.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation
//! - `tracing`: Enables logging via tracing crate
//! - `cli` (default): Builds the interactive `pwd-rating` binary
//!
//! # Example
//!
//! ```rust
//! use pwd_rating::{evaluate, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("A1b2C3$d".to_string().into());
//! let evaluation = evaluate(&password);
//!
//! assert_eq!(evaluation.strength(), PasswordStrength::VeryStrong);
//! assert!(evaluation.reasons.is_empty());
//! ```

// Internal modules
mod denylist;
mod evaluator;
mod sections;
mod session;
mod types;

// Public API
pub use denylist::{denylist, denylist_len, is_denylisted};
pub use evaluator::{evaluate, evaluate_str};
pub use sections::MIN_LENGTH;
pub use session::{PROMPT, QUIT_COMMAND, Session, SessionError, Transcript};
pub use types::{PasswordEvaluation, PasswordScore, PasswordStrength, SCORED_CHECKS};

#[cfg(feature = "async")]
pub use evaluator::{EVALUATION_DEBOUNCE, evaluate_tx};
