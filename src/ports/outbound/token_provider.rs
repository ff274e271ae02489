use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

/// Short-lived bearer token obtained from the credential-grant exchange.
///
/// `expires_in` is informational only: a token is acquired fresh for every
/// search invocation, used for exactly one request, and then discarded.
#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: u64,
}

/// TokenProvider port for acquiring provider credentials
///
/// This port abstracts the machine-to-machine authentication exchange
/// (client id/secret for a short-lived bearer token).
///
/// # Async Support
/// Implementations must be `Send + Sync` to support concurrent callers;
/// each call is an independent exchange with no shared token state.
#[async_trait]
pub trait TokenProvider: Send + Sync {
    /// Exchanges the configured client credentials for a bearer token
    ///
    /// # Returns
    /// A fresh `AccessToken` for a single search request
    ///
    /// # Errors
    /// Returns an error if:
    /// - The exchange endpoint returns a non-success status
    /// - The response body cannot be parsed as a token
    /// The error carries the provider's raw response text for diagnosis.
    async fn acquire_token(&self) -> Result<AccessToken>;
}
