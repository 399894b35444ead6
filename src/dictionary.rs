//! Common-password dictionary
//!
//! Loads the word list once and answers exact-match membership queries.

use secrecy::{ExposeSecret, SecretString};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DictionaryLoadError {
    #[error("Dictionary file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read dictionary file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Dictionary file is empty")]
    EmptyFile,
}

/// Read-only set of common passwords.
///
/// Entries are trimmed when loaded. Lookups compare the candidate as-is:
/// case-sensitive, no trimming, no normalization.
#[derive(Debug, Clone, Default)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// An empty dictionary. Nothing is ever reported as common.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parses newline-delimited text. Blank lines are skipped.
    pub fn parse(content: &str) -> Self {
        content.lines().collect()
    }

    /// Loads the dictionary from a word-list file.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File contains no entries
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryLoadError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(DictionaryLoadError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;
        let dictionary = Self::parse(&content);
        if dictionary.is_empty() {
            return Err(DictionaryLoadError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Dictionary loaded: {} passwords from {:?}", dictionary.len(), path);

        Ok(dictionary)
    }

    /// Like [`from_path`](Self::from_path), but a failed load is logged and
    /// yields an empty dictionary so the rest of the checks keep working.
    pub fn load_or_empty<P: AsRef<Path>>(path: P) -> Self {
        match Self::from_path(&path) {
            Ok(dictionary) => dictionary,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::error!(
                    "Could not load dictionary {:?}, continuing without it: {}",
                    path.as_ref(),
                    _e
                );
                Self::empty()
            }
        }
    }

    /// Exact-match membership, O(1) on average.
    pub fn contains(&self, password: &SecretString) -> bool {
        self.entries.contains(password.expose_secret())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: AsRef<str>> FromIterator<S> for CommonPasswords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|l| l.as_ref().trim().to_string())
            .filter(|l| !l.is_empty())
            .collect();
        Self { entries }
    }
}

/// Returns `true` if the password is in the dictionary.
pub fn is_common(password: &SecretString, dictionary: &CommonPasswords) -> bool {
    dictionary.contains(password)
}
