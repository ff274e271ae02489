use crate::application::dto::OfferSearchResponse;
use crate::offer_search::domain::{FlightOffer, SearchCriteria, SearchSummary};
use crate::offer_search::services::OfferNormalizer;
use crate::ports::inbound::OfferSearchPort;
use crate::ports::outbound::{AccessToken, OfferGateway, ProgressReporter, TokenProvider};
use crate::shared::error::FlightSearchError;
use crate::shared::Result;
use async_trait::async_trait;
use chrono::{SecondsFormat, Utc};

/// Number of sequential network steps in one invocation.
const PIPELINE_STEPS: usize = 2;

/// SearchOffersUseCase - Core use case for flight-offer retrieval
///
/// Orchestrates validate → acquire token → fetch → normalize, using
/// generic dependency injection for all infrastructure dependencies.
/// Each invocation is independent: a fresh token is acquired every time,
/// nothing is cached, and nothing is retried.
///
/// # Type Parameters
/// * `TP` - TokenProvider implementation
/// * `OG` - OfferGateway implementation
/// * `PR` - ProgressReporter implementation
pub struct SearchOffersUseCase<TP, OG, PR> {
    token_provider: TP,
    offer_gateway: OG,
    progress_reporter: PR,
}

impl<TP, OG, PR> SearchOffersUseCase<TP, OG, PR>
where
    TP: TokenProvider,
    OG: OfferGateway,
    PR: ProgressReporter,
{
    /// Creates a new SearchOffersUseCase with injected dependencies
    pub fn new(token_provider: TP, offer_gateway: OG, progress_reporter: PR) -> Self {
        Self {
            token_provider,
            offer_gateway,
            progress_reporter,
        }
    }

    /// Executes the retrieval pipeline
    ///
    /// # Arguments
    /// * `criteria` - User-supplied search criteria
    ///
    /// # Returns
    /// The normalized offers in provider order plus a search summary
    pub async fn execute(&self, criteria: SearchCriteria) -> Result<OfferSearchResponse> {
        // Step 0: Precondition check, before any network traffic
        self.validate(&criteria)?;

        // Step 1: Credential-grant exchange
        let token = self.acquire_token().await?;

        // Step 2: Authenticated search + normalization
        let offers = self.fetch_and_normalize(&criteria, &token).await?;

        self.progress_reporter
            .report_completion(&format!("✅ Found {} offer(s)", offers.len()));

        let summary = Self::build_summary(&criteria, offers.len());
        Ok(OfferSearchResponse::new(offers, summary))
    }

    /// Rejects criteria with missing required fields
    ///
    /// # Errors
    /// Returns `FlightSearchError::MissingParameters` naming every gap.
    fn validate(&self, criteria: &SearchCriteria) -> Result<()> {
        let missing = criteria.missing_fields();
        if !missing.is_empty() {
            return Err(FlightSearchError::MissingParameters {
                missing: missing.join(", "),
            }
            .into());
        }
        Ok(())
    }

    async fn acquire_token(&self) -> Result<AccessToken> {
        self.progress_reporter
            .report_step(1, PIPELINE_STEPS, "Requesting access token");
        let token = self.token_provider.acquire_token().await?;
        self.progress_reporter.report("🔑 Access token received");
        Ok(token)
    }

    async fn fetch_and_normalize(
        &self,
        criteria: &SearchCriteria,
        token: &AccessToken,
    ) -> Result<Vec<FlightOffer>> {
        self.progress_reporter.report_step(
            2,
            PIPELINE_STEPS,
            &format!("Searching offers {}", criteria.route_label()),
        );

        let params = criteria.query_params();
        let payload = self.offer_gateway.fetch_offers(&params, token).await?;
        OfferNormalizer::normalize(payload)
    }

    fn build_summary(criteria: &SearchCriteria, offer_count: usize) -> SearchSummary {
        SearchSummary::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            env!("CARGO_PKG_NAME").to_string(),
            env!("CARGO_PKG_VERSION").to_string(),
            criteria.route_label(),
            offer_count,
        )
    }
}

#[async_trait]
impl<TP, OG, PR> OfferSearchPort for SearchOffersUseCase<TP, OG, PR>
where
    TP: TokenProvider,
    OG: OfferGateway,
    PR: ProgressReporter,
{
    async fn search_offers(&self, criteria: SearchCriteria) -> Result<OfferSearchResponse> {
        self.execute(criteria).await
    }
}
