pub mod models;

pub use models::codes::{Airport, CodeError, HotelCity, ServiceKind, TripDuration};
pub use models::events::BookingSubmittedEvent;
