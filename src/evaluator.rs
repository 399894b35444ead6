//! Password strength evaluator - rule scoring and the per-keystroke report.

use secrecy::{ExposeSecret, SecretString};

use crate::dictionary::CommonPasswords;
use crate::entropy::estimate_entropy;
use crate::sections::{MIN_LENGTH, REQUIREMENTS};
use crate::types::{
    PasswordReport, RequirementStatus, RuleEvaluation, StrengthLabel, StrengthResult,
};

/// Evaluates the composition rules.
///
/// The base score gives one point per satisfied check (minimum length, mixed
/// case, digit, symbol). Independently the requirement list is evaluated, and
/// when every requirement passes the result is forced to the requirement
/// count with label "Very Strong". Both paths count the same four checks, so
/// the forced score always equals the base score.
pub fn evaluate_rules(password: &SecretString) -> RuleEvaluation {
    let base_score = base_score(password.expose_secret());
    let mut strength = StrengthResult::from_score(base_score);

    let requirements: Vec<RequirementStatus> = REQUIREMENTS
        .iter()
        .map(|r| RequirementStatus {
            label: r.label,
            passed: (r.check)(password),
        })
        .collect();

    let passed = requirements.iter().filter(|r| r.passed).count();
    if passed == requirements.len() {
        debug_assert_eq!(
            usize::from(base_score),
            requirements.len(),
            "base score and requirement list disagree"
        );
        strength = StrengthResult {
            score: requirements.len() as u8,
            label: StrengthLabel::VeryStrong,
        };
    }

    RuleEvaluation {
        requirements,
        base_score,
        strength,
    }
}

fn base_score(pwd: &str) -> u8 {
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| !c.is_ascii_alphanumeric());

    let mut score = 0;
    if pwd.chars().count() >= MIN_LENGTH {
        score += 1;
    }
    if has_lower && has_upper {
        score += 1;
    }
    if has_digit {
        score += 1;
    }
    if has_symbol {
        score += 1;
    }
    score
}

/// Runs every synchronous check on the password.
///
/// Pure: the same password and dictionary always produce the same report.
pub fn evaluate_password(
    password: &SecretString,
    dictionary: &CommonPasswords,
) -> PasswordReport {
    let rules = evaluate_rules(password);

    PasswordReport {
        strength: rules.strength,
        entropy: estimate_entropy(password),
        is_common: dictionary.contains(password),
        requirements: rules.requirements,
    }
}
