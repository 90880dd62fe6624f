use crate::guard::Step;
use crate::selections::{clamp_seats, BookingSelections, FlightDetails, HotelSearchCriteria, SelectionsPatch, Services};
use chrono::NaiveDate;
use manazil_shared::{Airport, HotelCity, ServiceKind, TripDuration};
use serde::{Deserialize, Serialize};

/// Where a package tour goes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum PackageDestination {
    Makkah,
    #[serde(rename = "Al Madinah")]
    AlMadinah,
    Jeddah,
    Both,
}

impl PackageDestination {
    /// City used to filter hotels; "Both" starts in Makkah
    pub fn hotel_city(&self) -> HotelCity {
        match self {
            PackageDestination::Makkah | PackageDestination::Both => HotelCity::Makkah,
            PackageDestination::AlMadinah => HotelCity::AlMadinah,
            PackageDestination::Jeddah => HotelCity::Jeddah,
        }
    }

    /// Arrival airport of the package flight
    pub fn arrival_airport(&self) -> Airport {
        match self {
            PackageDestination::Makkah | PackageDestination::Both => Airport::Jed,
            PackageDestination::AlMadinah | PackageDestination::Jeddah => Airport::Med,
        }
    }
}

/// Landing page search widget, one variant per tab
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuickSearch {
    Flights {
        origin: Airport,
        destination: Airport,
        departure: NaiveDate,
        return_date: NaiveDate,
        passengers: u32,
    },
    Hotel {
        destination: Option<HotelCity>,
        check_in: NaiveDate,
        nights: u32,
        guests: u32,
    },
    Package {
        destination: Option<PackageDestination>,
        people: u32,
    },
    Transport {
        passengers: u32,
    },
}

impl QuickSearch {
    /// Step the wizard continues on after this search
    pub fn target(&self) -> Step {
        match self {
            QuickSearch::Flights { .. } => Step::FlightDetails,
            QuickSearch::Hotel { .. } => Step::HotelSelection,
            QuickSearch::Package { .. } | QuickSearch::Transport { .. } => Step::Confirmation,
        }
    }

    /// The single update this search makes to the selections
    pub fn patch(&self, current: &BookingSelections, today: NaiveDate) -> SelectionsPatch {
        match self {
            QuickSearch::Flights { origin, destination, departure, return_date, passengers } => {
                let span = (*return_date - *departure).num_days().max(1);
                SelectionsPatch::new()
                    .services(Services::only(ServiceKind::Flights))
                    .flight_details(Some(FlightDetails {
                        origin: Some(*origin),
                        destination: Some(*destination),
                        duration: Some(TripDuration::from_day_span(span)),
                    }))
                    .selected_hotel_id(None)
                    .hotel_search_criteria(None)
                    .number_of_seats(clamp_seats(*passengers))
            }
            QuickSearch::Hotel { destination, check_in, nights, guests } => SelectionsPatch::new()
                .services(Services::only(ServiceKind::Hotel))
                .flight_details(None)
                .selected_hotel_id(None)
                .hotel_search_criteria(Some(HotelSearchCriteria {
                    destination: *destination,
                    check_in: *check_in,
                    duration: (*nights).max(1),
                }))
                .number_of_seats(clamp_seats(*guests)),
            QuickSearch::Package { destination, people } => {
                let arrival = destination.map_or(Airport::Med, |d| d.arrival_airport());
                SelectionsPatch::new()
                    .services(Services { flights: true, hotel: true, visa_bus: true })
                    .flight_details(Some(FlightDetails {
                        origin: Some(Airport::Cgk),
                        destination: Some(arrival),
                        duration: Some(TripDuration::Nine),
                    }))
                    .hotel_search_criteria(Some(HotelSearchCriteria {
                        destination: destination.map(|d| d.hotel_city()),
                        check_in: today,
                        duration: 7,
                    }))
                    .selected_hotel_id(None)
                    .number_of_seats(clamp_seats(*people))
            }
            QuickSearch::Transport { passengers } => SelectionsPatch::new()
                .services(current.services.with(ServiceKind::VisaBus, true))
                .number_of_seats(clamp_seats(*passengers)),
        }
    }
}
