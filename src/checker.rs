//! Password checker - wires the dictionary, the evaluators and the breach client.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;

use crate::breach::{BreachClient, BreachTransport, ReqwestTransport};
use crate::config::CheckerConfig;
use crate::dictionary::CommonPasswords;
use crate::evaluator::evaluate_password;
use crate::reveal::reveal_hash;
use crate::types::{BreachStatus, PasswordReport};

/// Per-input entry point for a password field.
///
/// The synchronous report and the asynchronous breach check are independent.
/// Breach checks are never cancelled, but each one is tagged with a generation
/// number: when it completes after a newer check has started, its result is
/// discarded instead of overwriting the newer state.
pub struct PasswordChecker<T> {
    dictionary: Arc<CommonPasswords>,
    breach: BreachClient<T>,
    generation: AtomicU64,
}

impl PasswordChecker<ReqwestTransport> {
    /// Builds a checker from configuration.
    ///
    /// A missing or unreadable dictionary is logged and replaced by an empty
    /// one.
    pub fn from_config(config: &CheckerConfig) -> Self {
        let dictionary = CommonPasswords::load_or_empty(&config.dictionary_path);
        Self::new(dictionary, BreachClient::with_reqwest(config.breach_endpoint.clone()))
    }
}

impl<T: BreachTransport> PasswordChecker<T> {
    pub fn new(dictionary: impl Into<Arc<CommonPasswords>>, breach: BreachClient<T>) -> Self {
        Self {
            dictionary: dictionary.into(),
            breach,
            generation: AtomicU64::new(0),
        }
    }

    pub fn dictionary(&self) -> &CommonPasswords {
        &self.dictionary
    }

    /// Strength, entropy, dictionary and requirement checks.
    pub fn evaluate(&self, password: &SecretString) -> PasswordReport {
        evaluate_password(password, &self.dictionary)
    }

    /// SHA-256 hex for the explicit reveal action.
    pub fn reveal_hash(&self, password: &SecretString) -> Option<String> {
        reveal_hash(password)
    }

    /// Checks the password against the breach service.
    ///
    /// An empty password resets the state to [`BreachStatus::Cleared`] with no
    /// network call. Every failure collapses to [`BreachStatus::Failed`].
    /// Returns `None` when a newer check started while this one was in flight.
    pub async fn check_breach(&self, password: &SecretString) -> Option<BreachStatus> {
        let ticket = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        if password.expose_secret().is_empty() {
            return Some(BreachStatus::Cleared);
        }

        let status = match self.breach.check(password).await {
            Ok(count) => BreachStatus::Found(count),
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Breach check failed: {}", _e);
                BreachStatus::Failed
            }
        };

        if self.generation.load(Ordering::SeqCst) != ticket {
            #[cfg(feature = "tracing")]
            tracing::debug!("Discarding stale breach result (generation {})", ticket);
            return None;
        }

        Some(status)
    }
}

/// Runs a breach check and streams its states through a channel.
///
/// Sends [`BreachStatus::Pending`] for a non-empty password, then the final
/// status unless the check went stale.
pub async fn check_breach_tx<T: BreachTransport>(
    checker: &PasswordChecker<T>,
    password: &SecretString,
    tx: mpsc::Sender<BreachStatus>,
) {
    if !password.expose_secret().is_empty() && tx.send(BreachStatus::Pending).await.is_err() {
        #[cfg(feature = "tracing")]
        tracing::error!("Breach status receiver dropped before the check started");
        return;
    }

    if let Some(status) = checker.check_breach(password).await {
        if let Err(_e) = tx.send(status).await {
            #[cfg(feature = "tracing")]
            tracing::error!("Failed to send breach status: {}", _e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breach::mock::MockTransport;
    use crate::types::{BreachClass, StrengthLabel};
    use std::time::Duration;

    const ENDPOINT: &str = "http://breach.test/api/breach-check";

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn checker(transport: MockTransport) -> PasswordChecker<MockTransport> {
        let dictionary: CommonPasswords = ["password", "123456"].into_iter().collect();
        PasswordChecker::new(dictionary, BreachClient::new(ENDPOINT, transport))
    }

    #[test]
    fn test_evaluate_uses_injected_dictionary() {
        let checker = checker(MockTransport::new());

        let report = checker.evaluate(&secret("password"));
        assert!(report.is_common);
        assert_eq!(report.dictionary_warning(), "Very common password!");

        let report = checker.evaluate(&secret("Abcdef1!"));
        assert!(!report.is_common);
        assert_eq!(report.strength.label, StrengthLabel::VeryStrong);
    }

    #[test]
    fn test_reveal_hash_length() {
        let checker = checker(MockTransport::new());
        assert_eq!(checker.reveal_hash(&secret("Abcdef1!")).map(|h| h.len()), Some(64));
        assert_eq!(checker.reveal_hash(&secret("")), None);
    }

    #[tokio::test]
    async fn test_check_breach_found() {
        let checker = checker(MockTransport::new().reply(200, r#"{"count": 52256}"#));

        let status = checker.check_breach(&secret("password")).await;
        assert_eq!(status, Some(BreachStatus::Found(52256)));
        assert_eq!(status.unwrap().class(), Some(BreachClass::Pwned));
    }

    #[tokio::test]
    async fn test_check_breach_safe() {
        let checker = checker(MockTransport::new().reply(200, r#"{"count": 0}"#));

        let status = checker.check_breach(&secret("x8#Lq!v0Zr")).await.unwrap();
        assert_eq!(status.message(), "Never seen in breaches");
        assert_eq!(status.class(), Some(BreachClass::Safe));
    }

    #[tokio::test]
    async fn test_check_breach_errors_collapse() {
        let transport = MockTransport::new()
            .reply(500, "")
            .reply(200, "{")
            .fail("connection reset");
        let checker = checker(transport);

        for _ in 0..3 {
            let status = checker.check_breach(&secret("password")).await;
            assert_eq!(status, Some(BreachStatus::Failed));
            assert_eq!(status.unwrap().message(), "Error checking breaches");
        }
    }

    #[tokio::test]
    async fn test_check_breach_empty_password_clears() {
        let checker = checker(MockTransport::new());

        let status = checker.check_breach(&secret("")).await;
        assert_eq!(status, Some(BreachStatus::Cleared));
        assert_eq!(checker.breach.transport().call_count(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_result_is_discarded() {
        let transport = MockTransport::new()
            .reply_after(Duration::from_millis(500), 200, r#"{"count": 7}"#)
            .reply_after(Duration::from_millis(10), 200, r#"{"count": 0}"#);
        let checker = checker(transport);

        let first = secret("passwor");
        let second = secret("password");
        let (slow, fast) = tokio::join!(
            checker.check_breach(&first),
            checker.check_breach(&second)
        );

        assert_eq!(fast, Some(BreachStatus::Found(0)));
        assert_eq!(slow, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clearing_invalidates_in_flight_check() {
        let transport =
            MockTransport::new().reply_after(Duration::from_millis(100), 200, r#"{"count": 7}"#);
        let checker = checker(transport);

        let typed = secret("p");
        let cleared = secret("");
        let (in_flight, reset) = tokio::join!(
            checker.check_breach(&typed),
            checker.check_breach(&cleared)
        );

        assert_eq!(reset, Some(BreachStatus::Cleared));
        assert_eq!(in_flight, None);
    }

    #[tokio::test]
    async fn test_check_breach_tx_sends_pending_then_result() {
        let checker = checker(MockTransport::new().reply(200, r#"{"count": 3}"#));
        let (tx, mut rx) = mpsc::channel(2);

        check_breach_tx(&checker, &secret("password"), tx).await;

        assert_eq!(rx.recv().await, Some(BreachStatus::Pending));
        assert_eq!(rx.recv().await, Some(BreachStatus::Found(3)));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_check_breach_tx_empty_password() {
        let checker = checker(MockTransport::new());
        let (tx, mut rx) = mpsc::channel(2);

        check_breach_tx(&checker, &secret(""), tx).await;

        assert_eq!(rx.recv().await, Some(BreachStatus::Cleared));
        assert_eq!(rx.recv().await, None);
    }
}
