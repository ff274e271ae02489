use crate::application::dto::OfferSearchResponse;
use crate::offer_search::domain::SearchCriteria;
use crate::shared::Result;
use async_trait::async_trait;

/// OfferSearchPort - Inbound port for the flight-offer search use case
///
/// This port defines the interface that external adapters (CLI, a future
/// HTTP layer, library consumers) use to run a search. It represents the
/// application's public API.
#[async_trait]
pub trait OfferSearchPort {
    /// Runs the full retrieval pipeline for the given criteria
    ///
    /// # Arguments
    /// * `criteria` - The user-supplied search criteria
    ///
    /// # Returns
    /// The normalized offers (provider order preserved) plus a search summary
    ///
    /// # Errors
    /// Returns an error if:
    /// - Required criteria fields are missing (before any network call)
    /// - The token exchange is rejected
    /// - The search request fails or returns an unreadable body
    /// - An offer in the response has no itineraries
    async fn search_offers(&self, criteria: SearchCriteria) -> Result<OfferSearchResponse>;
}
