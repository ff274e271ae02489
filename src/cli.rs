use clap::Parser;

use crate::application::dto::OutputFormat;
use crate::offer_search::domain::{SearchCriteria, TripType};

/// Search one-way or round-trip flight offers between two airports
#[derive(Parser, Debug)]
#[command(name = "skyfare")]
#[command(version)]
#[command(about = "Search flight offers between two airports", long_about = None)]
pub struct Args {
    /// Origin location code, e.g. JFK
    #[arg(short = 'f', long = "from", value_name = "ORIGIN")]
    pub origin: String,

    /// Destination location code, e.g. LHR
    #[arg(short = 't', long = "to", value_name = "DESTINATION")]
    pub destination: String,

    /// Departure date, e.g. 2025-06-01
    #[arg(short = 'd', long = "depart", value_name = "DATE")]
    pub departure_date: String,

    /// Return date; only transmitted for round trips
    #[arg(short = 'r', long = "return", value_name = "DATE")]
    pub return_date: Option<String>,

    /// Trip type: one-way or roundtrip (case-insensitive)
    #[arg(long = "trip", default_value = "one-way", value_name = "TYPE")]
    pub trip_type: String,

    /// Number of adult passengers (defaults to 1)
    #[arg(long, value_name = "COUNT")]
    pub adults: Option<u32>,

    /// Number of child passengers (defaults to 0)
    #[arg(long, value_name = "COUNT")]
    pub children: Option<u32>,

    /// Number of infant passengers (defaults to 0)
    #[arg(long, value_name = "COUNT")]
    pub infants: Option<u32>,

    /// Travel class: economy, "premium economy", business or first
    #[arg(short = 'c', long = "class", value_name = "CLASS")]
    pub travel_class: Option<String>,

    /// Output format: json or markdown
    #[arg(long, default_value = "json")]
    pub format: OutputFormat,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<String>,

    /// Config file path (skyfare.config.yml in the working directory when omitted)
    #[arg(long, value_name = "FILE")]
    pub config: Option<String>,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the search criteria from the parsed arguments.
    ///
    /// # Arguments
    /// * `default_travel_class` - Class from the config file, applied when
    ///   the command line does not name one
    pub fn criteria(&self, default_travel_class: Option<String>) -> SearchCriteria {
        SearchCriteria {
            origin: self.origin.clone(),
            destination: self.destination.clone(),
            departure_date: self.departure_date.clone(),
            return_date: self.return_date.clone(),
            adults: self.adults,
            children: self.children,
            infants: self.infants,
            trip_type: TripType::from_user_input(&self.trip_type),
            travel_class: self.travel_class.clone().or(default_travel_class),
        }
    }
}
