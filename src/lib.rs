//! skyfare - flight-offer search client
//!
//! This library searches one-way or round-trip flight offers against an
//! Amadeus-style provider: it exchanges client credentials for a bearer
//! token, issues a single search request, and normalizes the provider's
//! verbose offer records into a compact display model.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture:
//!
//! - **Domain Layer** (`offer_search`): search criteria, the normalized
//!   offer model, policies, and the normalization service
//! - **Application Layer** (`application`): the search use case and DTOs
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): concrete implementations of the ports
//! - **Shared** (`shared`): error types and the crate-wide Result alias
//!
//! # Example
//!
//! ```no_run
//! use skyfare::config::ProviderCredentials;
//! use skyfare::offer_search::domain::SearchCriteria;
//!
//! # #[tokio::main]
//! # async fn main() -> skyfare::shared::Result<()> {
//! let credentials = ProviderCredentials::from_env();
//! let mut criteria = SearchCriteria::new("JFK", "LHR", "2025-06-01");
//! criteria.adults = Some(2);
//!
//! let offers = skyfare::search_flights(credentials, criteria).await?;
//! println!("found {} offer(s)", offers.len());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod offer_search;
pub mod ports;
pub mod shared;

use adapters::outbound::console::NullProgressReporter;
use adapters::outbound::network::{AmadeusOffersClient, AmadeusTokenClient};
use application::use_cases::SearchOffersUseCase;
use config::{ProviderCredentials, DEFAULT_BASE_URL};
use offer_search::domain::{FlightOffer, SearchCriteria};
use ports::inbound::OfferSearchPort;
use shared::Result;

/// Searches flight offers with the default provider adapters.
///
/// This is the single consumer-facing entry point: it wires the real
/// network adapters against the default provider host and returns the
/// normalized offers in provider order. Progress output is suppressed;
/// embedders wanting feedback or a custom host should assemble
/// [`SearchOffersUseCase`](application::use_cases::SearchOffersUseCase)
/// themselves.
///
/// # Errors
/// Fails when required criteria fields are missing, the credential
/// exchange is rejected, the search request fails, or the provider
/// returns an offer without itineraries.
pub async fn search_flights(
    credentials: ProviderCredentials,
    criteria: SearchCriteria,
) -> Result<Vec<FlightOffer>> {
    let token_provider = AmadeusTokenClient::new(DEFAULT_BASE_URL, credentials)?;
    let offer_gateway = AmadeusOffersClient::new(DEFAULT_BASE_URL)?;
    let use_case =
        SearchOffersUseCase::new(token_provider, offer_gateway, NullProgressReporter::new());

    let response = use_case.search_offers(criteria).await?;
    Ok(response.offers)
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{NullProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::{FileSystemWriter, StdoutPresenter};
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::network::{AmadeusOffersClient, AmadeusTokenClient};
    pub use crate::application::dto::{OfferSearchResponse, OutputFormat};
    pub use crate::application::use_cases::SearchOffersUseCase;
    pub use crate::config::{ProviderCredentials, DEFAULT_BASE_URL};
    pub use crate::offer_search::domain::{
        FlightOffer, Itinerary, SearchCriteria, SearchSummary, Segment, SegmentEndpoint,
        TravelerPricing, TripType,
    };
    pub use crate::offer_search::policies::TravelClass;
    pub use crate::offer_search::services::OfferNormalizer;
    pub use crate::ports::inbound::OfferSearchPort;
    pub use crate::ports::outbound::{
        AccessToken, OfferFormatter, OfferGateway, OutputPresenter, ProgressReporter,
        RawSearchResponse, TokenProvider,
    };
    pub use crate::shared::error::{ExitCode, FlightSearchError};
    pub use crate::shared::Result;
}
