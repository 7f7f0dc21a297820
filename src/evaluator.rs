//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    Section, case_mix_section, denylist_section, digit_section, length_section, special_section,
};
use crate::types::{PasswordEvaluation, PasswordScore};

/// Delay before an async evaluation runs, so rapid edits can cancel it first.
#[cfg(feature = "async")]
pub const EVALUATION_DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Scored sections, in the order their reasons are reported.
const SCORED_SECTIONS: [(&str, Section); 4] = [
    ("length", length_section),
    ("case_mix", case_mix_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Evaluates password strength and returns the rating with its feedback.
///
/// A denylisted password short-circuits to a zero score with a single
/// reason. Otherwise every scored section runs: each pass adds one point,
/// each failure appends its reason. The result depends on the password only.
pub fn evaluate(password: &SecretString) -> PasswordEvaluation {
    if let Some(reason) = denylist_section(password) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected by denylist");

        return PasswordEvaluation {
            score: PasswordScore::default(),
            reasons: vec![reason.to_string()],
        };
    }

    let mut reasons = Vec::new();
    let mut score: u8 = 0;

    for (_section_name, section_fn) in SCORED_SECTIONS {
        match section_fn(password) {
            Some(reason) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(section = _section_name, "section failed");
                reasons.push(reason.to_string());
            }
            None => score += 1,
        }
    }

    let evaluation = PasswordEvaluation {
        score: PasswordScore::new(score),
        reasons,
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = evaluation.score.value(),
        strength = %evaluation.strength(),
        "password evaluated"
    );

    evaluation
}

/// Convenience wrapper for callers holding a plain string.
pub fn evaluate_str(password: &str) -> PasswordEvaluation {
    evaluate(&SecretString::new(password.into()))
}

/// Async version that sends the evaluation result via channel.
///
/// Waits [`EVALUATION_DEBOUNCE`] first; if `token` is cancelled meanwhile,
/// nothing is evaluated or sent.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation cancelled before start");
            return;
        }
        _ = tokio::time::sleep(EVALUATION_DEBOUNCE) => {}
    }

    let evaluation = evaluate(password);

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PasswordStrength;

    const LENGTH: &str = "Use at least 8 characters.";
    const CASE: &str = "Include both uppercase and lowercase letters.";
    const DIGIT: &str = "Include numbers.";
    const SPECIAL: &str = "Add special characters (e.g., @, #, $).";

    fn check(pwd: &str, strength: PasswordStrength, reasons: &[&str]) {
        let evaluation = evaluate_str(pwd);
        assert_eq!(evaluation.strength(), strength, "strength for {:?}", pwd);
        assert_eq!(evaluation.reasons, reasons, "reasons for {:?}", pwd);
    }

    #[test]
    fn test_evaluate_denylisted_password() {
        check("password", PasswordStrength::VeryWeak, &["Avoid common passwords."]);
    }

    #[test]
    fn test_evaluate_every_denylisted_password() {
        for pwd in crate::denylist::denylist() {
            let evaluation = evaluate_str(pwd);
            assert_eq!(evaluation.strength(), PasswordStrength::VeryWeak);
            assert_eq!(evaluation.reasons, vec!["Avoid common passwords.".to_string()]);
        }
    }

    #[test]
    fn test_evaluate_moderate_password() {
        check("Abcd123", PasswordStrength::Moderate, &[LENGTH, SPECIAL]);
    }

    #[test]
    fn test_evaluate_short_password_still_strong() {
        check("Abc123$", PasswordStrength::Strong, &[LENGTH]);
        check("Ab1$", PasswordStrength::Strong, &[LENGTH]);
    }

    #[test]
    fn test_evaluate_very_strong_password() {
        check("A1b2C3$d", PasswordStrength::VeryStrong, &[]);
    }

    #[test]
    fn test_evaluate_empty_password() {
        check("", PasswordStrength::VeryWeak, &[LENGTH, CASE, DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_missing_single_class() {
        check("abcd1234$", PasswordStrength::Strong, &[CASE]);
        check("AbcdEFG$", PasswordStrength::Strong, &[DIGIT]);
        check("AbcdEFG1", PasswordStrength::Strong, &[SPECIAL]);
    }

    #[test]
    fn test_evaluate_weak_password() {
        check("abcdefgh", PasswordStrength::Weak, &[CASE, DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_denylist_is_case_sensitive() {
        // "Password" is not denylisted; it is scored normally
        check("Password", PasswordStrength::Moderate, &[DIGIT, SPECIAL]);
    }

    #[test]
    fn test_evaluate_reasons_match_score() {
        let samples = ["", "a", "aB", "aB1", "aB1!", "abcdefgh", "Abcdefg1", "Abcdef1!", "  ", "ÉÉÉÉÉÉÉÉ"];
        for pwd in samples {
            let evaluation = evaluate_str(pwd);
            assert_eq!(
                evaluation.failed_checks(),
                4 - evaluation.passed_checks() as usize,
                "mismatch for {:?}",
                pwd
            );
        }
    }

    #[test]
    fn test_evaluate_idempotent() {
        for pwd in ["", "password", "Abc123$", "A1b2C3$d"] {
            assert_eq!(evaluate_str(pwd), evaluate_str(pwd));
        }
    }

    #[test]
    fn test_evaluate_adding_class_never_lowers_rating() {
        let base = "abcdefgh";
        let additions = ["A", "1", "$"];
        let mut current = base.to_string();
        let mut previous = evaluate_str(&current).strength();
        for extra in additions {
            current.push_str(extra);
            let next = evaluate_str(&current).strength();
            assert!(next >= previous, "{:?} lowered rating", current);
            previous = next;
        }
        assert_eq!(previous, PasswordStrength::VeryStrong);
    }

    #[test]
    fn test_evaluate_non_ascii_is_special() {
        // 8 chars, no ASCII letters or digits
        check("ÉÉÉÉÉÉÉÉ", PasswordStrength::Moderate, &[CASE, DIGIT]);
    }
}
