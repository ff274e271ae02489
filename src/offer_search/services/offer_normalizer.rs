use crate::offer_search::domain::{
    FlightOffer, Itinerary, Segment, SegmentEndpoint, TravelerPricing,
};
use crate::ports::outbound::{RawItinerary, RawOffer, RawSearchResponse, RawSegment};
use crate::shared::error::FlightSearchError;
use crate::shared::Result;

/// OfferNormalizer service mapping provider payloads to the internal model
///
/// Mapping is purely structural: no filtering, no sorting, no deduplication.
/// Output order equals the provider's input order, and normalizing the same
/// payload twice yields identical results.
pub struct OfferNormalizer;

impl OfferNormalizer {
    /// Normalizes every offer in the response's data array
    ///
    /// # Errors
    /// Fails the whole call when any offer lacks its itineraries; a partially
    /// normalized result is never returned.
    pub fn normalize(response: RawSearchResponse) -> Result<Vec<FlightOffer>> {
        response
            .data
            .into_iter()
            .map(Self::normalize_offer)
            .collect()
    }

    fn normalize_offer(raw: RawOffer) -> Result<FlightOffer> {
        // An offer without itineraries is not displayable; treat the whole
        // payload as malformed rather than silently dropping the offer.
        let itineraries = raw
            .itineraries
            .ok_or_else(|| FlightSearchError::MalformedOffer {
                offer_id: raw.id.clone(),
            })?;

        Ok(FlightOffer {
            id: raw.id,
            price: raw.price,
            traveler_pricing: raw
                .traveler_pricings
                .into_iter()
                .map(|tp| TravelerPricing {
                    traveler_id: tp.traveler_id,
                    fare_option: tp.fare_option,
                    traveler_type: tp.traveler_type,
                    price: tp.price,
                })
                .collect(),
            itineraries: itineraries.into_iter().map(Self::normalize_itinerary).collect(),
        })
    }

    fn normalize_itinerary(raw: RawItinerary) -> Itinerary {
        Itinerary {
            duration: raw.duration,
            segments: raw.segments.into_iter().map(Self::normalize_segment).collect(),
        }
    }

    fn normalize_segment(raw: RawSegment) -> Segment {
        Segment {
            carrier_code: raw.carrier_code,
            flight_number: raw.number,
            departure: SegmentEndpoint {
                location_code: raw.departure.iata_code,
                date_time: raw.departure.at,
            },
            arrival: SegmentEndpoint {
                location_code: raw.arrival.iata_code,
                date_time: raw.arrival.at,
            },
            duration: raw.duration,
            // Absent aircraft object or absent code both normalize to None.
            aircraft_code: raw.aircraft.and_then(|aircraft| aircraft.code),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(payload: &str) -> RawSearchResponse {
        serde_json::from_str(payload).expect("test payload must parse")
    }

    fn offer_payload() -> String {
        r#"{
            "data": [
                {
                    "id": "17",
                    "price": {"total": "523.40", "currency": "EUR"},
                    "travelerPricings": [
                        {
                            "travelerId": "1",
                            "fareOption": "STANDARD",
                            "travelerType": "ADULT",
                            "price": {"total": "523.40", "currency": "EUR"}
                        }
                    ],
                    "itineraries": [
                        {
                            "duration": "PT7H30M",
                            "segments": [
                                {
                                    "carrierCode": "AA",
                                    "number": "100",
                                    "departure": {"iataCode": "JFK", "at": "2025-06-01T18:00:00"},
                                    "arrival": {"iataCode": "LHR", "at": "2025-06-02T06:30:00"},
                                    "duration": "PT7H30M",
                                    "aircraft": {"code": "77W"}
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#
        .to_string()
    }

    #[test]
    fn test_normalize_full_offer() {
        let offers = OfferNormalizer::normalize(parse(&offer_payload())).unwrap();
        assert_eq!(offers.len(), 1);

        let offer = &offers[0];
        assert_eq!(offer.id, "17");
        assert_eq!(offer.price["total"], "523.40");
        assert_eq!(offer.traveler_pricing.len(), 1);
        assert_eq!(
            offer.traveler_pricing[0].traveler_type.as_deref(),
            Some("ADULT")
        );

        let segment = &offer.itineraries[0].segments[0];
        assert_eq!(segment.carrier_code, "AA");
        assert_eq!(segment.flight_number, "100");
        assert_eq!(segment.departure.location_code, "JFK");
        assert_eq!(segment.arrival.location_code, "LHR");
        assert_eq!(segment.aircraft_code.as_deref(), Some("77W"));
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let first = OfferNormalizer::normalize(parse(&offer_payload())).unwrap();
        let second = OfferNormalizer::normalize(parse(&offer_payload())).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_missing_data_array_yields_empty_result() {
        let offers = OfferNormalizer::normalize(parse(r#"{"meta": {"count": 0}}"#)).unwrap();
        assert!(offers.is_empty());
    }

    #[test]
    fn test_missing_aircraft_normalizes_to_none() {
        let payload = r#"{
            "data": [
                {
                    "id": "1",
                    "price": {"total": "100.00", "currency": "USD"},
                    "itineraries": [
                        {
                            "duration": "PT2H",
                            "segments": [
                                {
                                    "carrierCode": "DL",
                                    "number": "8",
                                    "departure": {"iataCode": "BOS", "at": "2025-07-01T08:00:00"},
                                    "arrival": {"iataCode": "ORD", "at": "2025-07-01T10:00:00"},
                                    "duration": "PT2H"
                                }
                            ]
                        }
                    ]
                }
            ]
        }"#;
        let offers = OfferNormalizer::normalize(parse(payload)).unwrap();
        assert_eq!(offers[0].itineraries[0].segments[0].aircraft_code, None);
    }

    #[test]
    fn test_aircraft_object_without_code_normalizes_to_none() {
        let payload = r#"{
            "data": [
                {
                    "id": "1",
                    "itineraries": [
                        {
                            "duration": "PT2H",
                            "segments": [{"carrierCode": "DL", "number": "8", "aircraft": {}}]
                        }
                    ]
                }
            ]
        }"#;
        let offers = OfferNormalizer::normalize(parse(payload)).unwrap();
        assert_eq!(offers[0].itineraries[0].segments[0].aircraft_code, None);
    }

    #[test]
    fn test_missing_traveler_pricings_yield_empty_sequence() {
        let payload = r#"{
            "data": [
                {"id": "1", "itineraries": [{"duration": "PT2H", "segments": []}]}
            ]
        }"#;
        let offers = OfferNormalizer::normalize(parse(payload)).unwrap();
        assert!(offers[0].traveler_pricing.is_empty());
    }

    #[test]
    fn test_missing_itineraries_fails_whole_call() {
        let payload = r#"{
            "data": [
                {"id": "ok", "itineraries": [{"duration": "PT2H", "segments": []}]},
                {"id": "broken", "price": {"total": "1.00", "currency": "EUR"}}
            ]
        }"#;
        let result = OfferNormalizer::normalize(parse(payload));
        assert!(result.is_err());
        let message = format!("{}", result.unwrap_err());
        assert!(message.contains("'broken'"));
        assert!(message.contains("no itineraries"));
    }

    #[test]
    fn test_provider_order_is_preserved() {
        let payload = r#"{
            "data": [
                {"id": "b", "itineraries": []},
                {"id": "a", "itineraries": []},
                {"id": "c", "itineraries": []}
            ]
        }"#;
        let offers = OfferNormalizer::normalize(parse(payload)).unwrap();
        let ids: Vec<&str> = offers.iter().map(|offer| offer.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }
}
