//! Result types shared by the evaluators.

use std::fmt;

/// Highest score the rule evaluator can assign.
pub const MAX_SCORE: u8 = 4;

/// Strength label, ordered from weakest to strongest.
///
/// The discriminant doubles as the score the label is indexed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLabel {
    TooShort = 0,
    Weak = 1,
    Fair = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl StrengthLabel {
    /// Maps a score to its label. Scores above [`MAX_SCORE`] saturate.
    pub fn from_score(score: u8) -> Self {
        match score {
            0 => StrengthLabel::TooShort,
            1 => StrengthLabel::Weak,
            2 => StrengthLabel::Fair,
            3 => StrengthLabel::Strong,
            _ => StrengthLabel::VeryStrong,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StrengthLabel::TooShort => "Too Short",
            StrengthLabel::Weak => "Weak",
            StrengthLabel::Fair => "Fair",
            StrengthLabel::Strong => "Strong",
            StrengthLabel::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Discrete strength score in `0..=MAX_SCORE` plus its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrengthResult {
    pub score: u8,
    pub label: StrengthLabel,
}

impl StrengthResult {
    pub fn from_score(score: u8) -> Self {
        let score = score.min(MAX_SCORE);
        Self {
            score,
            label: StrengthLabel::from_score(score),
        }
    }
}

/// Pass/fail state of one composition requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequirementStatus {
    pub label: &'static str,
    pub passed: bool,
}

impl RequirementStatus {
    /// CSS-style class used by front ends to colour the entry.
    pub fn class(&self) -> &'static str {
        if self.passed { "pass" } else { "fail" }
    }
}

/// Output of the rule evaluator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEvaluation {
    /// Requirements in their canonical order.
    pub requirements: Vec<RequirementStatus>,
    /// One point per satisfied base check, before the all-pass override.
    pub base_score: u8,
    /// Final result after the override.
    pub strength: StrengthResult,
}

impl RuleEvaluation {
    pub fn passed_count(&self) -> usize {
        self.requirements.iter().filter(|r| r.passed).count()
    }
}

/// Everything computed synchronously for one candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub strength: StrengthResult,
    /// Bits per character, `None` for an empty candidate.
    pub entropy: Option<f64>,
    pub is_common: bool,
    pub requirements: Vec<RequirementStatus>,
}

impl PasswordReport {
    /// `Entropy: 2.75 bits/char`, or an empty string for an empty candidate.
    pub fn entropy_text(&self) -> String {
        match self.entropy {
            Some(bits) => format!("Entropy: {bits:.2} bits/char"),
            None => String::new(),
        }
    }

    pub fn dictionary_warning(&self) -> &'static str {
        if self.is_common { "Very common password!" } else { "" }
    }
}

/// How a finished breach check should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachClass {
    Safe,
    Pwned,
}

impl BreachClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            BreachClass::Safe => "safe",
            BreachClass::Pwned => "pwned",
        }
    }
}

/// Breach state shown for the current candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreachStatus {
    /// Empty candidate: nothing checked, nothing shown.
    Cleared,
    /// A check is in flight.
    Pending,
    /// Occurrence count reported by the breach service.
    Found(u64),
    /// The check could not complete. The cause is logged, never shown.
    Failed,
}

impl BreachStatus {
    pub const ERROR_MESSAGE: &'static str = "Error checking breaches";

    pub fn message(&self) -> String {
        match self {
            BreachStatus::Cleared | BreachStatus::Pending => String::new(),
            BreachStatus::Found(0) => "Never seen in breaches".to_string(),
            BreachStatus::Found(count) => format!("Pwned {} times!", group_thousands(*count)),
            BreachStatus::Failed => Self::ERROR_MESSAGE.to_string(),
        }
    }

    pub fn class(&self) -> Option<BreachClass> {
        match self {
            BreachStatus::Found(0) => Some(BreachClass::Safe),
            BreachStatus::Found(_) => Some(BreachClass::Pwned),
            _ => None,
        }
    }
}

/// Formats `1234567` as `1,234,567`.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_indexed_by_score() {
        let labels: Vec<_> = (0..=MAX_SCORE)
            .map(|s| StrengthLabel::from_score(s).as_str())
            .collect();
        assert_eq!(labels, ["Too Short", "Weak", "Fair", "Strong", "Very Strong"]);
    }

    #[test]
    fn test_strength_result_saturates() {
        let result = StrengthResult::from_score(9);
        assert_eq!(result.score, MAX_SCORE);
        assert_eq!(result.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_breach_status_messages() {
        assert_eq!(BreachStatus::Cleared.message(), "");
        assert_eq!(BreachStatus::Pending.message(), "");
        assert_eq!(BreachStatus::Found(0).message(), "Never seen in breaches");
        assert_eq!(BreachStatus::Found(52_256).message(), "Pwned 52,256 times!");
        assert_eq!(BreachStatus::Failed.message(), "Error checking breaches");
    }

    #[test]
    fn test_breach_status_class() {
        assert_eq!(BreachStatus::Found(0).class(), Some(BreachClass::Safe));
        assert_eq!(BreachStatus::Found(3).class(), Some(BreachClass::Pwned));
        assert_eq!(BreachStatus::Failed.class(), None);
        assert_eq!(BreachStatus::Cleared.class(), None);
    }

    #[test]
    fn test_report_texts() {
        let report = PasswordReport {
            strength: StrengthResult::from_score(0),
            entropy: None,
            is_common: false,
            requirements: Vec::new(),
        };
        assert_eq!(report.entropy_text(), "");
        assert_eq!(report.dictionary_warning(), "");

        let report = PasswordReport { entropy: Some(1.0), is_common: true, ..report };
        assert_eq!(report.entropy_text(), "Entropy: 1.00 bits/char");
        assert_eq!(report.dictionary_warning(), "Very common password!");
    }
}
