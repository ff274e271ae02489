use crate::ports::outbound::AccessToken;
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;

// Provider response structures. The payload is not owned by this system and
// is treated as untrusted input: every node the provider may omit is modeled
// as an Option or carries a serde default.

/// Top-level search response. A missing `data` array means zero offers,
/// never an error.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSearchResponse {
    #[serde(default)]
    pub data: Vec<RawOffer>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOffer {
    pub id: String,
    /// Provider-native price shape, carried verbatim.
    #[serde(default)]
    pub price: serde_json::Value,
    #[serde(default)]
    pub traveler_pricings: Vec<RawTravelerPricing>,
    /// Required downstream: an offer without itineraries is malformed.
    #[serde(default)]
    pub itineraries: Option<Vec<RawItinerary>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTravelerPricing {
    #[serde(default)]
    pub traveler_id: Option<String>,
    #[serde(default)]
    pub fare_option: Option<String>,
    #[serde(default)]
    pub traveler_type: Option<String>,
    #[serde(default)]
    pub price: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawItinerary {
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub segments: Vec<RawSegment>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawSegment {
    #[serde(default)]
    pub carrier_code: String,
    #[serde(default)]
    pub number: String,
    #[serde(default)]
    pub departure: RawEndpoint,
    #[serde(default)]
    pub arrival: RawEndpoint,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub aircraft: Option<RawAircraft>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEndpoint {
    #[serde(default)]
    pub iata_code: String,
    #[serde(default)]
    pub at: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawAircraft {
    #[serde(default)]
    pub code: Option<String>,
}

/// OfferGateway port for executing the authenticated offer search
///
/// This port abstracts the provider's search endpoint. It receives the
/// fully constructed query pairs and the bearer token, and returns the
/// parsed (but not yet normalized) provider payload.
#[async_trait]
pub trait OfferGateway: Send + Sync {
    /// Issues a single authenticated search request
    ///
    /// # Arguments
    /// * `params` - Ordered query pairs as built from the search criteria
    /// * `token` - Bearer token from the token provider, used once
    ///
    /// # Errors
    /// Returns an error if:
    /// - The search endpoint returns a non-success status
    /// - The response body cannot be parsed
    /// The error carries the provider's raw response text for diagnosis.
    async fn fetch_offers(
        &self,
        params: &[(&'static str, String)],
        token: &AccessToken,
    ) -> Result<RawSearchResponse>;
}
