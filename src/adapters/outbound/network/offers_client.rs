use crate::ports::outbound::{AccessToken, OfferGateway, RawSearchResponse};
use crate::shared::error::FlightSearchError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

const SEARCH_PATH: &str = "/v2/shopping/flight-offers";
const TIMEOUT_SECONDS: u64 = 30;

/// AmadeusOffersClient adapter for the flight-offer search endpoint
///
/// Implements the OfferGateway port: one authenticated GET per search,
/// query values URL-encoded, bearer token in the Authorization header.
/// Failed requests surface the provider's raw response text so callers
/// can inspect provider-specific error detail.
pub struct AmadeusOffersClient {
    client: reqwest::Client,
    base_url: String,
}

impl AmadeusOffersClient {
    /// Creates a new offers client for the given provider host
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("skyfare/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Builds the full search URL, URL-encoding every query value.
    fn search_url(&self, params: &[(&'static str, String)]) -> String {
        let query = params
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&");

        format!(
            "{}{}?{}",
            self.base_url.trim_end_matches('/'),
            SEARCH_PATH,
            query
        )
    }
}

#[async_trait]
impl OfferGateway for AmadeusOffersClient {
    async fn fetch_offers(
        &self,
        params: &[(&'static str, String)],
        token: &AccessToken,
    ) -> Result<RawSearchResponse> {
        let response = self
            .client
            .get(self.search_url(params))
            .bearer_auth(&token.access_token)
            .send()
            .await?;

        // Read the body as text before parsing so a rejection can surface
        // the provider's exact response.
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(FlightSearchError::OfferSearch { body }.into());
        }

        serde_json::from_str(&body)
            .map_err(|_| FlightSearchError::OfferSearch { body }.into())
    }
}
