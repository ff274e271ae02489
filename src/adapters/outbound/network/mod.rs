/// Network adapters for the flight-data provider
mod offers_client;
mod token_client;

pub use offers_client::AmadeusOffersClient;
pub use token_client::AmadeusTokenClient;
