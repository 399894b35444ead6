//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

pub const MIN_LENGTH: usize = 8;

/// Checks if the password has at least [`MIN_LENGTH`] characters.
///
/// Length is counted in Unicode scalar values, not bytes.
pub fn length_section(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}
