//! Rating types shared by the evaluator and the session loop.

use std::fmt;

/// Number of scored checks (length, case mix, digits, special characters).
pub const SCORED_CHECKS: u8 = 4;

/// Count of satisfied strength checks, always within `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    pub const MAX: PasswordScore = PasswordScore(SCORED_CHECKS);

    /// Builds a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(SCORED_CHECKS))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(*self)
    }
}

/// Five-level qualitative rating, ordered from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score onto the fixed rating table: 0 very weak ... 4 very strong.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0 => PasswordStrength::VeryWeak,
            1 => PasswordStrength::Weak,
            2 => PasswordStrength::Moderate,
            3 => PasswordStrength::Strong,
            _ => PasswordStrength::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PasswordStrength::VeryWeak => "very weak",
            PasswordStrength::Weak => "weak",
            PasswordStrength::Moderate => "moderate",
            PasswordStrength::Strong => "strong",
            PasswordStrength::VeryStrong => "very strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one password.
///
/// `reasons` holds one suggestion per failed check, in check order. A
/// denylisted password carries a zero score and the single denylist reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub reasons: Vec<String>,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        self.score.strength()
    }

    pub fn passed_checks(&self) -> u8 {
        self.score.value()
    }

    pub fn failed_checks(&self) -> usize {
        self.reasons.len()
    }
}
