use crate::guard::Step;
use crate::selections::{BookingSelections, SelectionsPatch};
use crate::store::SelectionStore;
use manazil_shared::ServiceKind;
use tracing::debug;

/// At least one service ticked
pub fn can_proceed(selections: &BookingSelections) -> bool {
    selections.services.any()
}

/// First detail step the chosen services require
pub fn next_step(selections: &BookingSelections) -> Option<Step> {
    let services = &selections.services;
    if services.flights {
        Some(Step::FlightDetails)
    } else if services.hotel {
        Some(Step::HotelSelection)
    } else if services.visa_bus {
        Some(Step::Confirmation)
    } else {
        None
    }
}

pub struct ServiceSelection<'a> {
    store: &'a mut SelectionStore,
}

impl<'a> ServiceSelection<'a> {
    pub(crate) fn new(store: &'a mut SelectionStore) -> Self {
        Self { store }
    }

    /// Flip one service flag. Dependent details are left as they are.
    pub fn toggle(&mut self, kind: ServiceKind) -> bool {
        let enabled = !self.store.get().services.get(kind);
        self.set(kind, enabled);
        enabled
    }

    pub fn set(&mut self, kind: ServiceKind, checked: bool) {
        debug!(?kind, checked, "Service selection changed");
        self.store
            .update(|s| SelectionsPatch::new().services(s.services.with(kind, checked)));
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(&self.store.get())
    }

    pub fn next_step(&self) -> Option<Step> {
        next_step(&self.store.get())
    }
}
