use crate::application::dto::OfferSearchResponse;
use crate::ports::outbound::OfferFormatter;
use crate::shared::Result;
use anyhow::Context;

/// JsonFormatter adapter emitting the normalized offers as pretty JSON
///
/// The output is exactly the offer sequence (provider order preserved),
/// suitable for piping into other tools.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferFormatter for JsonFormatter {
    fn format(&self, response: &OfferSearchResponse) -> Result<String> {
        let mut output = serde_json::to_string_pretty(&response.offers)
            .context("Failed to serialize offers to JSON")?;
        output.push('\n');
        Ok(output)
    }
}
