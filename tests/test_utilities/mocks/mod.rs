mod mock_offer_gateway;
mod mock_progress_reporter;
mod mock_token_provider;

pub use mock_offer_gateway::MockOfferGateway;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_token_provider::MockTokenProvider;
