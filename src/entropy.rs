//! Per-character entropy estimate.

use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;

/// Estimates Shannon entropy in bits per character.
///
/// This is the empirical entropy of the character multiset observed in this
/// one string: `-sum(p * log2(p))` over each distinct character with
/// `p = count / length`. It says nothing about how the password was
/// generated and is not a cryptographic entropy bound. `"aaaa"` scores 0.0
/// and `"ab"` scores 1.0, while `"abcd"` scores the same 2.0 as any
/// other four distinct characters.
///
/// Returns `None` for an empty password.
pub fn estimate_entropy(password: &SecretString) -> Option<f64> {
    let pwd = password.expose_secret();
    if pwd.is_empty() {
        return None;
    }

    // Ordered so the float sum is bit-identical across calls
    let mut freq: BTreeMap<char, usize> = BTreeMap::new();
    let mut len = 0usize;
    for c in pwd.chars() {
        *freq.entry(c).or_insert(0) += 1;
        len += 1;
    }

    let len = len as f64;
    let entropy = freq
        .values()
        .map(|&count| {
            let p = count as f64 / len;
            -p * p.log2()
        })
        .sum::<f64>();

    // A single repeated symbol sums to -0.0
    Some(if entropy <= 0.0 { 0.0 } else { entropy })
}
