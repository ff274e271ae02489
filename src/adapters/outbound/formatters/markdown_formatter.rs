use crate::application::dto::OfferSearchResponse;
use crate::offer_search::domain::{FlightOffer, Itinerary};
use crate::ports::outbound::OfferFormatter;
use crate::shared::Result;
use std::fmt::Write;

/// MarkdownFormatter adapter for human-readable search results
///
/// Renders a summary header followed by one section per offer with its
/// itineraries, segments, and per-traveler pricing.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    fn write_offer(output: &mut String, index: usize, offer: &FlightOffer) {
        let _ = writeln!(
            output,
            "## Offer {} — {}\n",
            index + 1,
            format_price(&offer.price)
        );
        let _ = writeln!(output, "- Offer id: `{}`", offer.id);

        for (itinerary_index, itinerary) in offer.itineraries.iter().enumerate() {
            Self::write_itinerary(output, itinerary_index, itinerary);
        }

        if !offer.traveler_pricing.is_empty() {
            let _ = writeln!(output, "- Traveler pricing:");
            for pricing in &offer.traveler_pricing {
                let _ = writeln!(
                    output,
                    "  - traveler {} ({}, {}): {}",
                    pricing.traveler_id.as_deref().unwrap_or("?"),
                    pricing.traveler_type.as_deref().unwrap_or("?"),
                    pricing.fare_option.as_deref().unwrap_or("?"),
                    format_price(&pricing.price)
                );
            }
        }

        output.push('\n');
    }

    fn write_itinerary(output: &mut String, index: usize, itinerary: &Itinerary) {
        let _ = writeln!(
            output,
            "- Itinerary {} ({}):",
            index + 1,
            itinerary.duration
        );
        for segment in &itinerary.segments {
            let aircraft = segment
                .aircraft_code
                .as_deref()
                .map(|code| format!(" (aircraft {})", code))
                .unwrap_or_default();
            let _ = writeln!(
                output,
                "  - {} {} — {} {} → {} {} [{}]{}",
                segment.carrier_code,
                segment.flight_number,
                segment.departure.location_code,
                segment.departure.date_time,
                segment.arrival.location_code,
                segment.arrival.date_time,
                segment.duration,
                aircraft
            );
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferFormatter for MarkdownFormatter {
    fn format(&self, response: &OfferSearchResponse) -> Result<String> {
        let summary = &response.summary;
        let mut output = String::new();

        let _ = writeln!(output, "# Flight offers: {}\n", summary.route());
        let _ = writeln!(output, "- Searched: {}", summary.searched_at());
        let _ = writeln!(
            output,
            "- Generated by: {} {}",
            summary.tool_name(),
            summary.tool_version()
        );
        let _ = writeln!(output, "- Matching offers: {}\n", summary.offer_count());

        if response.offers.is_empty() {
            let _ = writeln!(output, "No offers matched the search criteria.");
            return Ok(output);
        }

        for (index, offer) in response.offers.iter().enumerate() {
            Self::write_offer(&mut output, index, offer);
        }

        Ok(output)
    }
}

/// Renders a provider-native price value as "total currency".
///
/// The price shape is passed through the pipeline verbatim, so both
/// fields are read defensively.
fn format_price(price: &serde_json::Value) -> String {
    let total = price.get("total").and_then(serde_json::Value::as_str);
    let currency = price.get("currency").and_then(serde_json::Value::as_str);

    match (total, currency) {
        (Some(total), Some(currency)) => format!("{} {}", total, currency),
        (Some(total), None) => total.to_string(),
        _ => "price unavailable".to_string(),
    }
}
