use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts and CI systems to distinguish between
/// different kinds of failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the search completed (possibly with zero offers)
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (validation, provider rejection, network error, file I/O error)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the flight-offer search pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Provider-facing variants carry the raw response body verbatim so the
/// upstream rejection detail is never lost.
#[derive(Debug, Error)]
pub enum FlightSearchError {
    /// Required search fields were absent. Raised before any network call.
    #[error("Missing required search parameters: {missing}\n\n💡 Hint: origin, destination and departure date must all be provided")]
    MissingParameters { missing: String },

    /// The credential-grant exchange was rejected or returned an unreadable body.
    #[error("Failed to get access token: {body}")]
    TokenExchange { body: String },

    /// The offer-search endpoint returned a non-success status or an unreadable body.
    #[error("Failed to fetch flights: {body}")]
    OfferSearch { body: String },

    /// An offer in a successfully parsed response is missing its itineraries.
    #[error("Flight offer '{offer_id}' has no itineraries in the provider response\n\n💡 Hint: The provider returned an offer shape this tool does not understand; retry the search or report the offer id")]
    MalformedOffer { offer_id: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
