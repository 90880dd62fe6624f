pub mod selections;
pub mod store;
pub mod session;
pub mod guard;
pub mod navigator;
pub mod steps;
pub mod quick_search;
pub mod submission;

pub use selections::{BookingSelections, FlightDetails, HotelSearchCriteria, SelectionsPatch, Services};
pub use store::SelectionStore;
pub use session::BookingSession;
pub use guard::{Navigation, Step};
pub use navigator::Navigator;
pub use quick_search::{PackageDestination, QuickSearch};
pub use steps::SeatsInput;
pub use submission::{BookingSummary, LoggingSink, RecordingSink, SubmissionSink, SubmitOutcome};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("Booking store accessed outside an active booking session")]
    NotInitialized,
    #[error("Unknown hotel: {0}")]
    UnknownHotel(String),
    #[error("Failed to serialize booking selections: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::Serialization(err.to_string())
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
