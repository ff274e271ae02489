/// Service tier requested for the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TravelClass {
    Economy,
    PremiumEconomy,
    Business,
    First,
}

impl TravelClass {
    /// Maps free-form user input to a travel class.
    ///
    /// The lookup is total: input is lower-cased and matched against the
    /// fixed table; anything unrecognized yields `None`, which callers
    /// treat as "no class filter" rather than an error. Malformed class
    /// names therefore degrade the search to "any class".
    pub fn from_user_input(input: &str) -> Option<Self> {
        match input.to_lowercase().as_str() {
            "economy" => Some(TravelClass::Economy),
            "premium economy" => Some(TravelClass::PremiumEconomy),
            "business" => Some(TravelClass::Business),
            "first" => Some(TravelClass::First),
            _ => None,
        }
    }

    /// The provider's query-parameter spelling for this class.
    pub fn as_query_value(self) -> &'static str {
        match self {
            TravelClass::Economy => "ECONOMY",
            TravelClass::PremiumEconomy => "PREMIUM_ECONOMY",
            TravelClass::Business => "BUSINESS",
            TravelClass::First => "FIRST",
        }
    }
}

impl std::fmt::Display for TravelClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TravelClass::Economy => write!(f, "Economy"),
            TravelClass::PremiumEconomy => write!(f, "Premium Economy"),
            TravelClass::Business => write!(f, "Business"),
            TravelClass::First => write!(f, "First"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        assert_eq!(
            TravelClass::from_user_input("economy"),
            Some(TravelClass::Economy)
        );
        assert_eq!(
            TravelClass::from_user_input("premium economy"),
            Some(TravelClass::PremiumEconomy)
        );
        assert_eq!(
            TravelClass::from_user_input("business"),
            Some(TravelClass::Business)
        );
        assert_eq!(
            TravelClass::from_user_input("first"),
            Some(TravelClass::First)
        );
    }

    #[test]
    fn test_mapping_is_case_insensitive() {
        assert_eq!(
            TravelClass::from_user_input("Economy"),
            Some(TravelClass::Economy)
        );
        assert_eq!(
            TravelClass::from_user_input("PREMIUM ECONOMY"),
            Some(TravelClass::PremiumEconomy)
        );
        assert_eq!(
            TravelClass::from_user_input("First"),
            Some(TravelClass::First)
        );
    }

    #[test]
    fn test_unrecognized_input_yields_none() {
        assert_eq!(TravelClass::from_user_input("deluxe"), None);
        assert_eq!(TravelClass::from_user_input("premium-economy"), None);
        assert_eq!(TravelClass::from_user_input(""), None);
    }

    #[test]
    fn test_query_values() {
        assert_eq!(TravelClass::Economy.as_query_value(), "ECONOMY");
        assert_eq!(
            TravelClass::PremiumEconomy.as_query_value(),
            "PREMIUM_ECONOMY"
        );
        assert_eq!(TravelClass::Business.as_query_value(), "BUSINESS");
        assert_eq!(TravelClass::First.as_query_value(), "FIRST");
    }
}
