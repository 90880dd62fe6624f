use crate::guard::Step;
use crate::selections::{BookingSelections, FlightDetails, SelectionsPatch};
use crate::store::SelectionStore;
use manazil_shared::{Airport, TripDuration};
use tracing::debug;

/// Origin and duration both chosen
pub fn can_proceed(selections: &BookingSelections) -> bool {
    selections
        .flight_details
        .as_ref()
        .is_some_and(FlightDetails::is_complete)
}

pub fn next_step(selections: &BookingSelections) -> Option<Step> {
    if !can_proceed(selections) {
        return None;
    }
    if selections.services.hotel {
        Some(Step::HotelSelection)
    } else {
        Some(Step::Confirmation)
    }
}

pub struct FlightDetailsStep<'a> {
    store: &'a mut SelectionStore,
}

impl<'a> FlightDetailsStep<'a> {
    pub(crate) fn new(store: &'a mut SelectionStore) -> Self {
        Self { store }
    }

    pub fn set_origin(&mut self, origin: Option<Airport>) {
        debug!(?origin, "Flight origin changed");
        self.edit(|details| FlightDetails { origin, ..details });
    }

    pub fn set_destination(&mut self, destination: Option<Airport>) {
        debug!(?destination, "Flight destination changed");
        self.edit(|details| FlightDetails { destination, ..details });
    }

    pub fn set_duration(&mut self, duration: Option<TripDuration>) {
        debug!(?duration, "Flight duration changed");
        self.edit(|details| FlightDetails { duration, ..details });
    }

    pub fn can_proceed(&self) -> bool {
        can_proceed(&self.store.get())
    }

    pub fn next_step(&self) -> Option<Step> {
        next_step(&self.store.get())
    }

    // Spread the existing details (or start from unset ones) and replace the whole object.
    fn edit(&mut self, change: impl FnOnce(FlightDetails) -> FlightDetails) {
        self.store.update(|s| {
            let details = s.flight_details.unwrap_or_default();
            SelectionsPatch::new().flight_details(Some(change(details)))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selections::Services;

    #[test]
    fn test_fields_are_set_independently() {
        let mut store = SelectionStore::new();
        let mut step = FlightDetailsStep::new(&mut store);

        step.set_origin(Some(Airport::Sby));
        assert!(!step.can_proceed());
        assert_eq!(step.next_step(), None);

        step.set_duration(Some(TripDuration::Twelve));
        assert!(step.can_proceed());

        step.set_destination(Some(Airport::Med));
        let details = store.get().flight_details.unwrap();
        assert_eq!(details.origin, Some(Airport::Sby));
        assert_eq!(details.destination, Some(Airport::Med));
        assert_eq!(details.duration, Some(TripDuration::Twelve));
    }

    #[test]
    fn test_details_created_when_absent() {
        let mut store = SelectionStore::new();
        store.update(|_| SelectionsPatch::new().flight_details(None));

        FlightDetailsStep::new(&mut store).set_duration(Some(TripDuration::Nine));

        let details = store.get().flight_details.unwrap();
        assert_eq!(details.duration, Some(TripDuration::Nine));
        assert_eq!(details.origin, None);
    }

    #[test]
    fn test_next_step_depends_on_hotel_flag() {
        let mut store = SelectionStore::new();
        {
            let mut step = FlightDetailsStep::new(&mut store);
            step.set_origin(Some(Airport::Cgk));
            step.set_duration(Some(TripDuration::Nine));
            assert_eq!(step.next_step(), Some(Step::Confirmation));
        }

        store.update(|_| SelectionsPatch::new().services(Services { flights: true, hotel: true, visa_bus: false }));
        assert_eq!(next_step(&store.get()), Some(Step::HotelSelection));
    }
}
