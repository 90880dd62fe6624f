use chrono::NaiveDate;
use manazil_shared::{Airport, HotelCity, ServiceKind, TripDuration};
use serde::{Deserialize, Serialize};

pub const MIN_SEATS: u32 = 1;
pub const MAX_SEATS: u32 = 100;

/// Clamp a traveler count into the bookable seat range
pub fn clamp_seats(seats: u32) -> u32 {
    seats.clamp(MIN_SEATS, MAX_SEATS)
}

/// Which services the traveler wants. Any subset is valid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Services {
    pub flights: bool,
    pub hotel: bool,
    pub visa_bus: bool,
}

impl Services {
    pub const NONE: Services = Services { flights: false, hotel: false, visa_bus: false };

    pub fn only(kind: ServiceKind) -> Self {
        Services::NONE.with(kind, true)
    }

    pub fn get(&self, kind: ServiceKind) -> bool {
        match kind {
            ServiceKind::Flights => self.flights,
            ServiceKind::Hotel => self.hotel,
            ServiceKind::VisaBus => self.visa_bus,
        }
    }

    /// Copy with a single flag changed
    pub fn with(mut self, kind: ServiceKind, enabled: bool) -> Self {
        match kind {
            ServiceKind::Flights => self.flights = enabled,
            ServiceKind::Hotel => self.hotel = enabled,
            ServiceKind::VisaBus => self.visa_bus = enabled,
        }
        self
    }

    pub fn any(&self) -> bool {
        self.flights || self.hotel || self.visa_bus
    }
}

/// Flight package details. `None` fields are unset.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FlightDetails {
    pub origin: Option<Airport>,
    pub destination: Option<Airport>,
    pub duration: Option<TripDuration>,
}

impl FlightDetails {
    /// Origin and duration are both chosen
    pub fn is_complete(&self) -> bool {
        self.origin.is_some() && self.duration.is_some()
    }
}

/// Hotel filter carried over from the landing page search
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HotelSearchCriteria {
    pub destination: Option<HotelCity>,
    pub check_in: NaiveDate,
    /// Nights
    pub duration: u32,
}

/// In-progress selections of one booking session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookingSelections {
    pub services: Services,
    pub flight_details: Option<FlightDetails>,
    pub selected_hotel_id: Option<String>,
    pub hotel_search_criteria: Option<HotelSearchCriteria>,
    pub number_of_seats: u32,
}

impl BookingSelections {
    /// Canonical value at session start and after every reset
    pub fn initial() -> Self {
        Self {
            services: Services::NONE,
            flight_details: Some(FlightDetails::default()),
            selected_hotel_id: None,
            hotel_search_criteria: None,
            number_of_seats: MIN_SEATS,
        }
    }

    /// Flight details only count while the flights service is selected
    pub fn active_flight_details(&self) -> Option<&FlightDetails> {
        if self.services.flights {
            self.flight_details.as_ref()
        } else {
            None
        }
    }

    /// Hotel id only counts while the hotel service is selected
    pub fn active_hotel_id(&self) -> Option<&str> {
        if self.services.hotel {
            self.selected_hotel_id.as_deref()
        } else {
            None
        }
    }

    pub fn seats_in_range(&self) -> bool {
        (MIN_SEATS..=MAX_SEATS).contains(&self.number_of_seats)
    }
}

impl Default for BookingSelections {
    fn default() -> Self {
        Self::initial()
    }
}

/// Top-level shallow merge over `BookingSelections`.
///
/// Each `Some` replaces the whole field; nested objects are never merged, so callers
/// spread the current value themselves when they change part of one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionsPatch {
    pub services: Option<Services>,
    pub flight_details: Option<Option<FlightDetails>>,
    pub selected_hotel_id: Option<Option<String>>,
    pub hotel_search_criteria: Option<Option<HotelSearchCriteria>>,
    pub number_of_seats: Option<u32>,
}

impl SelectionsPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn services(mut self, services: Services) -> Self {
        self.services = Some(services);
        self
    }

    pub fn flight_details(mut self, details: Option<FlightDetails>) -> Self {
        self.flight_details = Some(details);
        self
    }

    pub fn selected_hotel_id(mut self, hotel_id: Option<String>) -> Self {
        self.selected_hotel_id = Some(hotel_id);
        self
    }

    pub fn hotel_search_criteria(mut self, criteria: Option<HotelSearchCriteria>) -> Self {
        self.hotel_search_criteria = Some(criteria);
        self
    }

    pub fn number_of_seats(mut self, seats: u32) -> Self {
        self.number_of_seats = Some(seats);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Produce the merged value, leaving `base` untouched
    pub fn apply(self, base: &BookingSelections) -> BookingSelections {
        BookingSelections {
            services: self.services.unwrap_or(base.services),
            flight_details: self.flight_details.unwrap_or(base.flight_details),
            selected_hotel_id: self
                .selected_hotel_id
                .unwrap_or_else(|| base.selected_hotel_id.clone()),
            hotel_search_criteria: self
                .hotel_search_criteria
                .unwrap_or_else(|| base.hotel_search_criteria.clone()),
            number_of_seats: self.number_of_seats.unwrap_or(base.number_of_seats),
        }
    }
}

impl From<BookingSelections> for SelectionsPatch {
    fn from(next: BookingSelections) -> Self {
        Self {
            services: Some(next.services),
            flight_details: Some(next.flight_details),
            selected_hotel_id: Some(next.selected_hotel_id),
            hotel_search_criteria: Some(next.hotel_search_criteria),
            number_of_seats: Some(next.number_of_seats),
        }
    }
}
