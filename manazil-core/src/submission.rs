use crate::selections::BookingSelections;
use chrono::NaiveDate;
use manazil_catalog::{Hotel, HotelCatalog};
use manazil_shared::{Airport, BookingSubmittedEvent, TripDuration};
use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

// ============================================================================
// Submission sink
// ============================================================================

/// Receiver of completed bookings. Fire-and-forget: nothing comes back.
pub trait SubmissionSink: Send + Sync {
    fn submit(&self, event: &BookingSubmittedEvent);
}

/// Default sink: writes the submission to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingSink;

impl SubmissionSink for LoggingSink {
    fn submit(&self, event: &BookingSubmittedEvent) {
        info!(
            submission_id = %event.submission_id,
            "Booking submitted: {}",
            event.selections
        );
    }
}

/// Keeps submissions in memory, for tests and local runs
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: Mutex<Vec<BookingSubmittedEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<BookingSubmittedEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, event: &BookingSubmittedEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}

/// What happened to a submit request
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Submitted(BookingSubmittedEvent),
    /// Submit is disabled; nothing was sent and nothing was reset
    Blocked { reason: String },
}

// ============================================================================
// Confirmation summary
// ============================================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub duration: Option<TripDuration>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HotelSummary {
    pub hotel: Hotel,
    pub check_in: Option<NaiveDate>,
    pub nights: Option<u32>,
}

/// Sections of the confirmation screen. A section appears only while its service
/// is selected, whatever stale details the selections still carry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BookingSummary {
    pub flight: Option<FlightSummary>,
    pub hotel: Option<HotelSummary>,
    pub visa_bus: bool,
    pub number_of_seats: u32,
    pub nothing_selected: bool,
}

impl BookingSummary {
    pub fn build(selections: &BookingSelections, catalog: &HotelCatalog) -> Self {
        let flight = selections.active_flight_details().map(|details| FlightSummary {
            origin: details.origin,
            destination: details.destination,
            duration: details.duration,
        });

        let hotel = selections
            .active_hotel_id()
            .and_then(|id| catalog.find(id))
            .map(|hotel| {
                let criteria = selections.hotel_search_criteria.as_ref();
                HotelSummary {
                    hotel: hotel.clone(),
                    check_in: criteria.map(|c| c.check_in),
                    nights: criteria.map(|c| c.duration),
                }
            });

        Self {
            flight,
            hotel,
            visa_bus: selections.services.visa_bus,
            number_of_seats: selections.number_of_seats,
            nothing_selected: !selections.services.any(),
        }
    }
}
