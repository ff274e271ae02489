/// Shared utilities - error types and the crate-wide Result alias
pub mod error;
pub mod result;

pub use error::{ExitCode, FlightSearchError};
pub use result::Result;
