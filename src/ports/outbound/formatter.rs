use crate::application::dto::OfferSearchResponse;
use crate::shared::Result;

/// OfferFormatter port for rendering search results
///
/// This port abstracts the output format (JSON, Markdown, etc.) applied
/// to the normalized offers and the search summary.
pub trait OfferFormatter {
    /// Formats the search response as a complete output document
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, response: &OfferSearchResponse) -> Result<String>;
}
