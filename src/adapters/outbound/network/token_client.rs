use crate::config::ProviderCredentials;
use crate::ports::outbound::{AccessToken, TokenProvider};
use crate::shared::error::FlightSearchError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const TOKEN_PATH: &str = "/v1/security/oauth2/token";
const TIMEOUT_SECONDS: u64 = 30;

/// AmadeusTokenClient adapter for the credential-grant exchange
///
/// Implements the TokenProvider port over the provider's OAuth2 token
/// endpoint. The exchange is single-shot: no retry, no token caching,
/// one fresh token per search invocation.
///
/// # Security
/// Credentials travel only in the form-encoded request body and are never
/// logged or echoed into error messages.
pub struct AmadeusTokenClient {
    client: reqwest::Client,
    base_url: String,
    credentials: ProviderCredentials,
}

impl AmadeusTokenClient {
    /// Creates a new token client for the given provider host
    pub fn new(base_url: impl Into<String>, credentials: ProviderCredentials) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("skyfare/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            credentials,
        })
    }

    fn token_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), TOKEN_PATH)
    }
}

#[async_trait]
impl TokenProvider for AmadeusTokenClient {
    async fn acquire_token(&self) -> Result<AccessToken> {
        let form = [
            ("grant_type", "client_credentials"),
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
        ];

        let response = self
            .client
            .post(self.token_url())
            .form(&form)
            .send()
            .await?;

        // Read the body as text before parsing so a rejection can surface
        // the provider's exact response.
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FlightSearchError::TokenExchange { body }.into());
        }

        let token: AccessToken = serde_json::from_str(&body)
            .map_err(|_| FlightSearchError::TokenExchange { body })?;
        Ok(token)
    }
}
