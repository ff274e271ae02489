use serde::Serialize;

// The normalized offer model. Instances are constructed once by the
// normalizer and never mutated afterwards; serialization mirrors the
// provider's camelCase field spelling.

/// A priced, bookable flight proposal: one itinerary for a one-way trip,
/// two (outbound and return) for a round trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightOffer {
    pub id: String,
    /// Provider-native price shape, passed through verbatim.
    pub price: serde_json::Value,
    /// One entry per traveler; empty when the provider omits the breakdown.
    pub traveler_pricing: Vec<TravelerPricing>,
    pub itineraries: Vec<Itinerary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelerPricing {
    pub traveler_id: Option<String>,
    pub fare_option: Option<String>,
    pub traveler_type: Option<String>,
    /// Per-traveler price, passed through verbatim.
    pub price: serde_json::Value,
}

/// One directional trip composed of one or more segments.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Itinerary {
    /// ISO-8601 duration string as reported by the provider.
    pub duration: String,
    pub segments: Vec<Segment>,
}

/// A single flight leg between two locations on a carrier.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub carrier_code: String,
    pub flight_number: String,
    pub departure: SegmentEndpoint,
    pub arrival: SegmentEndpoint,
    pub duration: String,
    /// `None` (serialized as null) when the provider reports no aircraft.
    pub aircraft_code: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentEndpoint {
    pub location_code: String,
    pub date_time: String,
}
