//! Runtime configuration resolved from the environment.

use std::path::PathBuf;

pub const DICTIONARY_PATH_VAR: &str = "PWD_DICTIONARY_PATH";
pub const BREACH_ENDPOINT_VAR: &str = "PWD_BREACH_ENDPOINT";

pub const DEFAULT_DICTIONARY_PATH: &str = "./assets/common_passwords.txt";
pub const DEFAULT_BREACH_ENDPOINT: &str = "http://127.0.0.1:5000/api/breach-check";

/// Where the word list lives and where breach queries go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub dictionary_path: PathBuf,
    pub breach_endpoint: String,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            dictionary_path: PathBuf::from(DEFAULT_DICTIONARY_PATH),
            breach_endpoint: DEFAULT_BREACH_ENDPOINT.to_string(),
        }
    }
}

impl CheckerConfig {
    /// Resolves the configuration.
    ///
    /// Priority for each field:
    /// 1. Environment variable (`PWD_DICTIONARY_PATH`, `PWD_BREACH_ENDPOINT`)
    /// 2. Built-in default
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            dictionary_path: std::env::var(DICTIONARY_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or(defaults.dictionary_path),
            breach_endpoint: std::env::var(BREACH_ENDPOINT_VAR)
                .unwrap_or(defaults.breach_endpoint),
        }
    }

    pub fn with_dictionary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.dictionary_path = path.into();
        self
    }

    pub fn with_breach_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.breach_endpoint = endpoint.into();
        self
    }
}
