//! k-anonymity breach check client
//!
//! The password is hashed locally with SHA-1. Only the 5-character prefix and
//! the 35-character suffix of the uppercase hex digest are posted to the
//! breach service as `{"prefix": "...", "suffix": "..."}`. The service answers
//! `{"count": N}`, the number of times that exact hash appears in breach
//! corpora.
//!
//! The client trusts the service to have matched the suffix. It does not
//! receive or check the other hashes sharing the prefix.

use async_trait::async_trait;
use data_encoding::HEXUPPER;
use reqwest::header::CONTENT_TYPE;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use sha1::{Digest, Sha1};
use thiserror::Error;

pub(crate) const PREFIX_LEN: usize = 5;

#[derive(Error, Debug)]
pub enum BreachCheckError {
    #[error("Breach check skipped for an empty password")]
    EmptyPassword,
    #[error("Failed to encode range query: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("Breach service responded with status code {0}")]
    Status(u16),
    #[error("Malformed breach service response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

/// Uppercase hex SHA-1 of a password, split for the range query.
#[derive(Clone, PartialEq, Eq)]
pub struct RangeKey {
    hex: String,
}

impl RangeKey {
    pub fn new(password: &SecretString) -> Self {
        let digest = Sha1::digest(password.expose_secret().as_bytes());
        Self {
            hex: HEXUPPER.encode(digest.as_slice()),
        }
    }

    /// First 5 hex characters, the only part that identifies the range.
    pub fn prefix(&self) -> &str {
        &self.hex[..PREFIX_LEN]
    }

    /// Remaining 35 hex characters.
    pub fn suffix(&self) -> &str {
        &self.hex[PREFIX_LEN..]
    }
}

// Keep the full hash out of logs
impl std::fmt::Debug for RangeKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RangeKey").field("prefix", &self.prefix()).finish_non_exhaustive()
    }
}

#[derive(Debug, Serialize)]
struct RangeQuery<'a> {
    prefix: &'a str,
    suffix: &'a str,
}

#[derive(Debug, Deserialize)]
struct RangeCount {
    count: u64,
}

/// Raw HTTP reply handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpReply {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends one JSON POST and returns the reply.
///
/// Implementations must not retry. The body of a non-success reply may be
/// left empty.
#[async_trait]
pub trait BreachTransport: Send + Sync {
    async fn post_json(
        &self,
        endpoint: &str,
        body: Vec<u8>,
    ) -> Result<HttpReply, BreachCheckError>;
}

/// [`BreachTransport`] over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BreachTransport for ReqwestTransport {
    async fn post_json(
        &self,
        endpoint: &str,
        body: Vec<u8>,
    ) -> Result<HttpReply, BreachCheckError> {
        let resp = self
            .client
            .post(endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| BreachCheckError::Transport(Box::new(e)))?;

        let status = resp.status();
        if !status.is_success() {
            return Ok(HttpReply {
                status: status.as_u16(),
                body: Vec::new(),
            });
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| BreachCheckError::Transport(Box::new(e)))?;

        Ok(HttpReply {
            status: status.as_u16(),
            body: body.to_vec(),
        })
    }
}

/// Client for the range-query breach service.
///
/// Every call sends exactly one request. Nothing is cached or retried.
#[derive(Debug, Clone)]
pub struct BreachClient<T> {
    endpoint: String,
    transport: T,
}

impl BreachClient<ReqwestTransport> {
    pub fn with_reqwest(endpoint: impl Into<String>) -> Self {
        Self::new(endpoint, ReqwestTransport::default())
    }
}

impl<T: BreachTransport> BreachClient<T> {
    pub fn new(endpoint: impl Into<String>, transport: T) -> Self {
        Self {
            endpoint: endpoint.into(),
            transport,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Returns how many times the password appears in known breaches.
    ///
    /// An empty password fails with [`BreachCheckError::EmptyPassword`]
    /// without touching the network.
    pub async fn check(&self, password: &SecretString) -> Result<u64, BreachCheckError> {
        if password.expose_secret().is_empty() {
            return Err(BreachCheckError::EmptyPassword);
        }

        let key = RangeKey::new(password);

        #[cfg(feature = "tracing")]
        tracing::debug!("Breach check for range {}", key.prefix());

        let body = serde_json::to_vec(&RangeQuery {
            prefix: key.prefix(),
            suffix: key.suffix(),
        })
        .map_err(BreachCheckError::Encode)?;

        let reply = self.transport.post_json(&self.endpoint, body).await?;
        if !reply.is_success() {
            return Err(BreachCheckError::Status(reply.status));
        }

        let parsed: RangeCount =
            serde_json::from_slice(&reply.body).map_err(BreachCheckError::MalformedResponse)?;
        Ok(parsed.count)
    }
}
