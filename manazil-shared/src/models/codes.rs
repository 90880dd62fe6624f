use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Airports served by the flight packages
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Airport {
    /// Soekarno-Hatta, Jakarta
    Cgk,
    /// Juanda, Surabaya
    Sby,
    /// King Abdulaziz, Jeddah
    Jed,
    /// Prince Mohammad bin Abdulaziz, Madinah
    Med,
}

impl Airport {
    pub const ALL: [Airport; 4] = [Airport::Cgk, Airport::Sby, Airport::Jed, Airport::Med];

    pub fn code(&self) -> &'static str {
        match self {
            Airport::Cgk => "CGK",
            Airport::Sby => "SBY",
            Airport::Jed => "JED",
            Airport::Med => "MED",
        }
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Airport {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Airport::ALL
            .into_iter()
            .find(|a| a.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodeError::UnknownAirport(s.to_string()))
    }
}

/// Length of an umrah flight package in days
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum TripDuration {
    /// Standard umrah
    Nine,
    /// Extended umrah
    Twelve,
}

impl TripDuration {
    pub fn days(&self) -> u8 {
        match self {
            TripDuration::Nine => 9,
            TripDuration::Twelve => 12,
        }
    }

    /// Maps an arbitrary day span onto a package length, falling back to the standard package.
    pub fn from_day_span(days: i64) -> Self {
        match days {
            12 => TripDuration::Twelve,
            _ => TripDuration::Nine,
        }
    }
}

impl TryFrom<u8> for TripDuration {
    type Error = CodeError;

    fn try_from(days: u8) -> Result<Self, Self::Error> {
        match days {
            9 => Ok(TripDuration::Nine),
            12 => Ok(TripDuration::Twelve),
            other => Err(CodeError::UnsupportedDuration(other)),
        }
    }
}

impl From<TripDuration> for u8 {
    fn from(duration: TripDuration) -> Self {
        duration.days()
    }
}

/// Cities covered by the hotel catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum HotelCity {
    Makkah,
    #[serde(rename = "Al Madinah")]
    AlMadinah,
    Jeddah,
}

impl HotelCity {
    pub const ALL: [HotelCity; 3] = [HotelCity::Makkah, HotelCity::AlMadinah, HotelCity::Jeddah];

    pub fn name(&self) -> &'static str {
        match self {
            HotelCity::Makkah => "Makkah",
            HotelCity::AlMadinah => "Al Madinah",
            HotelCity::Jeddah => "Jeddah",
        }
    }
}

impl fmt::Display for HotelCity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HotelCity {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HotelCity::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CodeError::UnknownCity(s.to_string()))
    }
}

/// The three independently selectable services
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ServiceKind {
    Flights,
    Hotel,
    VisaBus,
}

impl ServiceKind {
    pub const ALL: [ServiceKind; 3] = [ServiceKind::Flights, ServiceKind::Hotel, ServiceKind::VisaBus];

    pub fn label(&self) -> &'static str {
        match self {
            ServiceKind::Flights => "Flights",
            ServiceKind::Hotel => "Hotels",
            ServiceKind::VisaBus => "Visa & Bus",
        }
    }
}

impl FromStr for ServiceKind {
    type Err = CodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flights" => Ok(ServiceKind::Flights),
            "hotel" => Ok(ServiceKind::Hotel),
            "visa_bus" | "visabus" | "visa-bus" => Ok(ServiceKind::VisaBus),
            _ => Err(CodeError::UnknownService(s.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodeError {
    #[error("Unknown airport code: {0}")]
    UnknownAirport(String),

    #[error("Unsupported trip duration: {0} days")]
    UnsupportedDuration(u8),

    #[error("Unknown hotel city: {0}")]
    UnknownCity(String),

    #[error("Unknown service: {0}")]
    UnknownService(String),
}
