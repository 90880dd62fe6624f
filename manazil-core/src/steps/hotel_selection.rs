use crate::guard::Step;
use crate::selections::{BookingSelections, SelectionsPatch};
use crate::store::SelectionStore;
use manazil_catalog::{Hotel, HotelCatalog};
use tracing::debug;

pub fn can_proceed(selections: &BookingSelections) -> bool {
    selections.selected_hotel_id.is_some()
}

pub fn next_step(selections: &BookingSelections) -> Option<Step> {
    can_proceed(selections).then_some(Step::Confirmation)
}

/// Catalog entries shown for the session's search criteria, in catalog order
pub fn visible_hotels<'c>(selections: &BookingSelections, catalog: &'c HotelCatalog) -> Vec<&'c Hotel> {
    let destination = selections
        .hotel_search_criteria
        .as_ref()
        .and_then(|criteria| criteria.destination);
    catalog.for_destination(destination)
}

pub struct HotelSelection<'a> {
    store: &'a mut SelectionStore,
}

impl<'a> HotelSelection<'a> {
    pub(crate) fn new(store: &'a mut SelectionStore) -> Self {
        Self { store }
    }

    /// Select a hotel, or clear the selection when the same hotel is picked again.
    /// Returns the selection after the change.
    pub fn select(&mut self, hotel_id: &str) -> Option<String> {
        let next = self.store.update(|s| {
            let next = if s.selected_hotel_id.as_deref() == Some(hotel_id) {
                None
            } else {
                Some(hotel_id.to_string())
            };
            SelectionsPatch::new().selected_hotel_id(next)
        });

        debug!(hotel_id, selected = next.selected_hotel_id.is_some(), "Hotel selection toggled");
        next.selected_hotel_id.clone()
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(&self.store.get())
    }

    pub fn next_step(&self) -> Option<Step> {
        next_step(&self.store.get())
    }
}
