//! On-demand SHA-256 display digest.
//!
//! Unrelated to the breach lookup digest, which lives in [`crate::breach`].

use data_encoding::HEXLOWER;
use secrecy::{ExposeSecret, SecretString};
use sha2::{Digest, Sha256};

/// Length of a revealed digest in hex characters.
pub const REVEALED_HASH_LEN: usize = 64;

/// Returns the lowercase hex SHA-256 of the password's UTF-8 bytes, or `None`
/// for an empty password.
///
/// Meant for an explicit "show hash" action, not for every keystroke. Nothing
/// is cached between calls.
pub fn reveal_hash(password: &SecretString) -> Option<String> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }
    Some(HEXLOWER.encode(Sha256::digest(pwd.as_bytes()).as_slice()))
}
