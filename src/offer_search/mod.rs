/// Offer-search domain layer - criteria, offer model, policies, normalization
///
/// Pure logic only: nothing in this module performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
