/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (network, console, file system).
pub mod formatter;
pub mod offer_gateway;
pub mod output_presenter;
pub mod progress_reporter;
pub mod token_provider;

pub use formatter::OfferFormatter;
pub use offer_gateway::{
    OfferGateway, RawAircraft, RawEndpoint, RawItinerary, RawOffer, RawSearchResponse, RawSegment,
    RawTravelerPricing,
};
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use token_provider::{AccessToken, TokenProvider};
