//! Password composition requirements
//!
//! Each section checks one requirement. [`REQUIREMENTS`] fixes their order.

mod length;
mod variety;

pub use length::{MIN_LENGTH, length_section};
pub use variety::{digit_section, mixed_case_section, symbol_section};

use secrecy::SecretString;

use crate::types::MAX_SCORE;

/// Pass/fail check for one requirement.
pub type SectionCheck = fn(&SecretString) -> bool;

/// A requirement: predicate plus the label shown next to it.
#[derive(Debug, Clone, Copy)]
pub struct Requirement {
    pub label: &'static str,
    pub check: SectionCheck,
}

/// The fixed, ordered requirement list.
pub const REQUIREMENTS: [Requirement; 4] = [
    Requirement { label: "At least 8 characters", check: length_section },
    Requirement { label: "Mixed lower + upper case", check: mixed_case_section },
    Requirement { label: "At least one digit", check: digit_section },
    Requirement { label: "At least one symbol", check: symbol_section },
];

// The all-pass override assigns `REQUIREMENTS.len()` as the score.
const _: () = assert!(REQUIREMENTS.len() == MAX_SCORE as usize);
