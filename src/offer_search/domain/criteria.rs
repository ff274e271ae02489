use crate::offer_search::policies::TravelClass;

/// Fixed result cap sent to the provider with every search.
const RESULT_CAP: u32 = 20;

/// Whether the traveler wants a one-way or a round-trip search.
///
/// Parsed leniently: only a recognizable "roundtrip" selects the
/// round-trip behavior, anything else degrades to one-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    OneWay,
    RoundTrip,
}

impl TripType {
    /// Parses free-form user input, case-insensitively.
    pub fn from_user_input(input: &str) -> Self {
        match input.to_lowercase().as_str() {
            "roundtrip" | "round-trip" => TripType::RoundTrip,
            _ => TripType::OneWay,
        }
    }
}

impl std::fmt::Display for TripType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripType::OneWay => write!(f, "one-way"),
            TripType::RoundTrip => write!(f, "round-trip"),
        }
    }
}

/// User-supplied criteria for one search invocation.
///
/// Dates are carried as opaque strings: the pipeline performs presence
/// checks only and forwards the values to the provider verbatim.
#[derive(Debug, Clone, Default)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub departure_date: String,
    pub return_date: Option<String>,
    /// Unset (or zero) means one adult.
    pub adults: Option<u32>,
    pub children: Option<u32>,
    pub infants: Option<u32>,
    pub trip_type: TripType,
    /// Free text; mapped through the travel-class policy at query time.
    pub travel_class: Option<String>,
}

impl SearchCriteria {
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            departure_date: departure_date.into(),
            ..Self::default()
        }
    }

    /// Names the required fields that are empty or absent.
    ///
    /// An empty return value means the criteria may go to the network.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.origin.trim().is_empty() {
            missing.push("origin");
        }
        if self.destination.trim().is_empty() {
            missing.push("destination");
        }
        if self.departure_date.trim().is_empty() {
            missing.push("departure date");
        }
        missing
    }

    /// Builds the ordered query pairs for the provider's search endpoint.
    ///
    /// Construction rules:
    /// - origin, destination, departure date and the fixed result cap always
    /// - adults falls back to 1 when unset or zero; children and infants to 0
    /// - returnDate only for round trips that actually carry a return date
    /// - travelClass only when the user's text maps through the policy table;
    ///   unrecognized class names are dropped silently
    pub fn query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("originLocationCode", self.origin.clone()),
            ("destinationLocationCode", self.destination.clone()),
            ("departureDate", self.departure_date.clone()),
            ("max", RESULT_CAP.to_string()),
            (
                "adults",
                self.adults.filter(|n| *n > 0).unwrap_or(1).to_string(),
            ),
            ("children", self.children.unwrap_or(0).to_string()),
            ("infants", self.infants.unwrap_or(0).to_string()),
        ];

        if self.trip_type == TripType::RoundTrip {
            if let Some(return_date) = self
                .return_date
                .as_ref()
                .filter(|date| !date.trim().is_empty())
            {
                params.push(("returnDate", return_date.clone()));
            }
        }

        if let Some(class) = self.travel_class.as_deref() {
            if let Some(mapped) = TravelClass::from_user_input(class) {
                params.push(("travelClass", mapped.as_query_value().to_string()));
            }
        }

        params
    }

    /// Short route label for progress messages and summaries, e.g. "JFK → LHR".
    pub fn route_label(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}
