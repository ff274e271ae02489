/// Domain policies - fixed mapping rules applied during query construction
pub mod travel_class;

pub use travel_class::TravelClass;
