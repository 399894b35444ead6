//! Password strength and breach checking library
//!
//! Scores a password against four composition rules, estimates its
//! per-character entropy, flags it when it appears in a common-password list
//! and checks breach corpora through a k-anonymity range query that never
//! sends the password or its full hash.
//!
//! # Features
//!
//! - `async` (default): Enables the breach client and [`PasswordChecker`]
//! - `tracing` (default): Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DICTIONARY_PATH`: Path to the common-password list
//!   (default: `./assets/common_passwords.txt`)
//! - `PWD_BREACH_ENDPOINT`: Breach-check service URL
//!   (default: `http://127.0.0.1:5000/api/breach-check`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_guard::{CommonPasswords, evaluate_password, reveal_hash};
//! use secrecy::SecretString;
//!
//! // Load the dictionary once at startup
//! let dictionary = CommonPasswords::load_or_empty("./assets/common_passwords.txt");
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let report = evaluate_password(&password, &dictionary);
//!
//! println!("Strength: {} ({})", report.strength.label, report.strength.score);
//! println!("{}", report.entropy_text());
//! println!("Hash: {:?}", reveal_hash(&password));
//! ```

// Internal modules
mod config;
mod dictionary;
mod entropy;
mod evaluator;
mod reveal;
mod sections;
mod types;

#[cfg(feature = "async")]
mod breach;
#[cfg(feature = "async")]
mod checker;

// Public API
pub use config::{
    BREACH_ENDPOINT_VAR, CheckerConfig, DEFAULT_BREACH_ENDPOINT, DEFAULT_DICTIONARY_PATH,
    DICTIONARY_PATH_VAR,
};
pub use dictionary::{is_common, CommonPasswords, DictionaryLoadError};
pub use entropy::estimate_entropy;
pub use evaluator::{evaluate_password, evaluate_rules};
pub use reveal::{reveal_hash, REVEALED_HASH_LEN};
pub use sections::{Requirement, REQUIREMENTS};
pub use types::{
    BreachClass, BreachStatus, PasswordReport, RequirementStatus, RuleEvaluation, StrengthLabel,
    StrengthResult, MAX_SCORE,
};

#[cfg(feature = "async")]
pub use breach::{
    BreachCheckError, BreachClient, BreachTransport, HttpReply, RangeKey, ReqwestTransport,
};
#[cfg(feature = "async")]
pub use checker::{check_breach_tx, PasswordChecker};
