use manazil_shared::HotelCity;
use serde::{Deserialize, Serialize};

/// A facility figure that is either a count or a free-text note
/// (e.g. "12 Slots & Prayer Hall").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Facility {
    Count(u32),
    Note(String),
}

impl From<u32> for Facility {
    fn from(n: u32) -> Self {
        Facility::Count(n)
    }
}

impl From<&str> for Facility {
    fn from(note: &str) -> Self {
        Facility::Note(note.to_string())
    }
}

/// Hotel record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hotel {
    pub id: String,
    pub name: String,
    pub city: HotelCity,
    pub image_url: String,
    pub restaurants: Facility,
    pub elevators: u32,
    pub beds: u32,
    pub rooms: u32,
    pub room_service: bool,
    pub coffee_shop: bool,
    pub wifi: bool,
    pub parking_slots: Facility,
    pub location_description: String,
}

impl Hotel {
    /// Case-insensitive substring match against name or city
    pub fn matches(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.city.name().to_lowercase().contains(&needle)
    }
}
