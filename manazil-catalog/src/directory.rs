use crate::hotel::{Facility, Hotel};
use manazil_shared::HotelCity;
use tracing::debug;

/// Read-only hotel catalog, kept in declaration order
#[derive(Debug, Clone)]
pub struct HotelCatalog {
    hotels: Vec<Hotel>,
}

impl HotelCatalog {
    pub fn new(hotels: Vec<Hotel>) -> Self {
        Self { hotels }
    }

    /// The static catalog bundled with the application
    pub fn builtin() -> Self {
        Self::new(builtin_hotels())
    }

    /// Every hotel, in declaration order
    pub fn all(&self) -> &[Hotel] {
        &self.hotels
    }

    /// Exact-id lookup
    pub fn find(&self, hotel_id: &str) -> Option<&Hotel> {
        self.hotels.iter().find(|h| h.id == hotel_id)
    }

    pub fn get(&self, hotel_id: &str) -> Result<&Hotel, CatalogError> {
        self.find(hotel_id)
            .ok_or_else(|| CatalogError::NotFound(hotel_id.to_string()))
    }

    /// Case-insensitive substring search over name and city.
    /// An empty query returns the whole catalog.
    pub fn search(&self, query: &str) -> Vec<&Hotel> {
        let query = query.trim();
        if query.is_empty() {
            return self.hotels.iter().collect();
        }

        let results: Vec<&Hotel> = self.hotels.iter().filter(|h| h.matches(query)).collect();
        debug!("Catalog search '{}' matched {} hotels", query, results.len());
        results
    }

    /// Hotels shown for a destination filter; no destination means no filtering
    pub fn for_destination(&self, destination: Option<HotelCity>) -> Vec<&Hotel> {
        match destination {
            Some(city) => self.search(city.name()),
            None => self.hotels.iter().collect(),
        }
    }

    /// First `count` hotels, as promoted on the landing page
    pub fn featured(&self, count: usize) -> &[Hotel] {
        &self.hotels[..count.min(self.hotels.len())]
    }
}

impl Default for HotelCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Hotel not found: {0}")]
    NotFound(String),
}

#[allow(clippy::too_many_arguments)]
fn hotel(
    id: &str,
    name: &str,
    city: HotelCity,
    image: u32,
    restaurants: Facility,
    elevators: u32,
    beds: u32,
    rooms: u32,
    coffee_shop: bool,
    parking_slots: Facility,
    location: &str,
) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: name.to_string(),
        city,
        image_url: format!("https://picsum.photos/400/300?random={}", image),
        restaurants,
        elevators,
        beds,
        rooms,
        room_service: true,
        coffee_shop,
        wifi: true,
        parking_slots,
        location_description: location.to_string(),
    }
}

fn builtin_hotels() -> Vec<Hotel> {
    use HotelCity::*;

    vec![
        hotel("ritz_madinah", "Al Ritz Al Madinah Hotel", AlMadinah, 1, 2.into(), 4, 1302, 250, true, 40.into(),
            "The northern central region"),
        hotel("waqf_othman", "Waqf Othman Ben Affan Hotel", AlMadinah, 2, 1.into(), 6, 1150, 234, true, 26.into(),
            "King Faisal Road, First Ring Road, The northern central region"),
        hotel("zowar_intl", "Zowar International Hotel", AlMadinah, 3, 2.into(), 5, 1127, 280, true, 35.into(),
            "Badaa Dictrict- Abdul Rahman Bin Awf Street, The northern central region"),
        hotel("odst_madinah", "ODST Al Madinah Hotel", AlMadinah, 4, 3.into(), 13, 3262, 700, true, 60.into(),
            "Badaa Dictrict- Abdul Rahman Bin Awf Street, The northern central region"),
        hotel("mokhtara_intl", "Al Mokhtara International Hotel", AlMadinah, 5, 3.into(), 1, 1820, 476, true, 45.into(),
            "Next to waqf Othman Bin Affan Hotel, The northern central region"),
        hotel("nozol_makkah", "Nozol Al Mokhtara Hotel", Makkah, 6, 1.into(), 2, 614, 149, false,
            "12 Slots & Prayer Hall".into(),
            "Sulaymaniyah Street, Al-Jahoun District, Western central area"),
        hotel("odst_suites_jeddah", "ODST Hotel Suites", Jeddah, 7, "Available".into(), 2, 0, 25, false, 25.into(),
            "Jeddah - Sari Street"),
        hotel("odst_jeddah_hotel", "ODST Jeddah Hotel", Jeddah, 8, 1.into(), 2, 246, 88, true, 50.into(),
            "Palestine Street intersection, The descending road of Medina"),
    ]
}
