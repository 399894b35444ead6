//! Character variety sections - case mix, digits and symbols.
//!
//! Letters and digits are ASCII classes: anything outside `[A-Za-z0-9]`,
//! accented letters included, counts as a symbol.

use secrecy::{ExposeSecret, SecretString};

/// Requires at least one `a-z` and at least one `A-Z`.
pub fn mixed_case_section(password: &SecretString) -> bool {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    has_lower && has_upper
}

pub fn digit_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

pub fn symbol_section(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| !c.is_ascii_alphanumeric())
}
