//! Step-local mutation surfaces. Each step only touches its own slice of the selections.

pub mod service_selection;
pub mod flight_details;
pub mod hotel_selection;
pub mod confirmation;

pub use service_selection::ServiceSelection;
pub use flight_details::FlightDetailsStep;
pub use hotel_selection::HotelSelection;
pub use confirmation::{Confirmation, SeatsInput};
