use crate::offer_search::domain::{FlightOffer, SearchSummary};

/// OfferSearchResponse - Internal response DTO from the search use case
///
/// Carries the normalized offers (provider order preserved) together with
/// the summary that formatters use for their header.
#[derive(Debug, Clone)]
pub struct OfferSearchResponse {
    pub offers: Vec<FlightOffer>,
    pub summary: SearchSummary,
}

impl OfferSearchResponse {
    pub fn new(offers: Vec<FlightOffer>, summary: SearchSummary) -> Self {
        Self { offers, summary }
    }
}
