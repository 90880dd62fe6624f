use crate::guard::{Navigation, Step};
use crate::navigator::Navigator;
use crate::quick_search::QuickSearch;
use crate::selections::{BookingSelections, HotelSearchCriteria, SelectionsPatch, Services};
use crate::steps::confirmation::{self, Confirmation, SeatsInput};
use crate::steps::{FlightDetailsStep, HotelSelection, ServiceSelection};
use crate::store::SelectionStore;
use crate::submission::{SubmissionSink, SubmitOutcome};
use crate::{CoreError, CoreResult};
use chrono::NaiveDate;
use manazil_catalog::HotelCatalog;
use manazil_shared::{BookingSubmittedEvent, ServiceKind};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Scope that owns one traveler's booking store.
///
/// The store only exists between `start` and `end`; every accessor fails with
/// `CoreError::NotInitialized` outside that window.
#[derive(Debug, Clone)]
pub struct BookingSession {
    id: Uuid,
    store: Option<SelectionStore>,
    navigator: Navigator,
    seats_input: SeatsInput,
}

impl BookingSession {
    /// A scope with no store yet
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            store: None,
            navigator: Navigator::new(),
            seats_input: SeatsInput::default(),
        }
    }

    /// A scope with its store already started
    pub fn started() -> Self {
        let mut session = Self::new();
        session.start();
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Create the store with the initial selections. Restarting an active session
    /// discards whatever it held.
    pub fn start(&mut self) -> Arc<BookingSelections> {
        let store = SelectionStore::new();
        let snapshot = store.get();
        self.store = Some(store);
        self.seats_input = SeatsInput::default();
        self.navigator.restart_at(Step::Landing);
        info!(session_id = %self.id, "Booking session started");
        snapshot
    }

    /// Drop the store. Returns the final selections if the session was active.
    pub fn end(&mut self) -> Option<Arc<BookingSelections>> {
        let last = self.store.take().map(|store| store.get());
        if last.is_some() {
            info!(session_id = %self.id, "Booking session ended");
        }
        last
    }

    pub fn store(&self) -> CoreResult<&SelectionStore> {
        self.store.as_ref().ok_or(CoreError::NotInitialized)
    }

    pub fn store_mut(&mut self) -> CoreResult<&mut SelectionStore> {
        self.store.as_mut().ok_or(CoreError::NotInitialized)
    }

    pub fn selections(&self) -> CoreResult<Arc<BookingSelections>> {
        Ok(self.store()?.get())
    }

    pub fn current_step(&self) -> Step {
        self.navigator.current()
    }

    pub fn seats_input(&self) -> &SeatsInput {
        &self.seats_input
    }

    /// Reset the selections and any step-local state; the session stays open
    pub fn reset(&mut self) -> CoreResult<Arc<BookingSelections>> {
        let snapshot = self.store_mut()?.reset();
        self.seats_input = SeatsInput::default();
        Ok(snapshot)
    }

    // ========================================================================
    // Steps
    // ========================================================================

    pub fn service_selection(&mut self) -> CoreResult<ServiceSelection<'_>> {
        Ok(ServiceSelection::new(self.store_mut()?))
    }

    pub fn flight_details(&mut self) -> CoreResult<FlightDetailsStep<'_>> {
        Ok(FlightDetailsStep::new(self.store_mut()?))
    }

    pub fn hotel_selection(&mut self) -> CoreResult<HotelSelection<'_>> {
        Ok(HotelSelection::new(self.store_mut()?))
    }

    pub fn confirmation(&mut self) -> CoreResult<Confirmation<'_>> {
        let store = self.store.as_mut().ok_or(CoreError::NotInitialized)?;
        Ok(Confirmation::new(store, &mut self.seats_input))
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    pub fn navigate_to(&mut self, target: Step) -> CoreResult<Navigation> {
        let selections = self.selections()?;
        Ok(self.navigator.navigate_to(&selections, target))
    }

    pub fn navigate_path(&mut self, location: &str) -> CoreResult<Navigation> {
        let selections = self.selections()?;
        Ok(self.navigator.navigate_path(&selections, location))
    }

    pub fn back(&mut self) -> CoreResult<Option<Navigation>> {
        let selections = self.selections()?;
        Ok(self.navigator.back(&selections))
    }

    // ========================================================================
    // Landing page shortcuts
    // ========================================================================

    /// Apply a landing page search and move to the step it leads to
    pub fn quick_search(&mut self, search: &QuickSearch, today: NaiveDate) -> CoreResult<Navigation> {
        let store = self.store_mut()?;
        let patch = search.patch(&store.get(), today);
        let writes_seats = patch.number_of_seats.is_some();
        store.update(|_| patch);

        // A seat count written here supersedes whatever was last typed in the seat field
        if writes_seats {
            self.seats_input = SeatsInput::default();
        }
        info!(session_id = %self.id, target = %search.target(), "Quick search applied");
        self.navigate_to(search.target())
    }

    /// Book straight from a featured hotel card
    pub fn pick_featured_hotel(
        &mut self,
        catalog: &HotelCatalog,
        hotel_id: &str,
        today: NaiveDate,
    ) -> CoreResult<Navigation> {
        let hotel = catalog
            .find(hotel_id)
            .ok_or_else(|| CoreError::UnknownHotel(hotel_id.to_string()))?;

        self.store_mut()?.update(|_| {
            SelectionsPatch::new()
                .services(Services::only(ServiceKind::Hotel))
                .selected_hotel_id(Some(hotel.id.clone()))
                .hotel_search_criteria(Some(HotelSearchCriteria {
                    destination: Some(hotel.city),
                    check_in: today,
                    duration: 1,
                }))
        });
        self.navigate_to(Step::HotelSelection)
    }

    /// Signing in abandons the booking in progress and starts over at service selection
    pub fn reauthenticate(&mut self) -> CoreResult<Navigation> {
        self.reset()?;
        info!(session_id = %self.id, "Re-authenticated, booking reset");
        self.navigate_to(Step::ServiceSelection)
    }

    // ========================================================================
    // Submission
    // ========================================================================

    /// Hand the selections to `sink`, then reset and return to the landing page.
    /// Does nothing while submit is disabled.
    pub fn submit(&mut self, sink: &dyn SubmissionSink) -> CoreResult<SubmitOutcome> {
        let selections = self.selections()?;
        if !confirmation::can_submit(&selections, &self.seats_input) {
            let reason = if !selections.services.any() {
                "Select at least one service before submitting".to_string()
            } else {
                format!(
                    "Number of travelers must be between {} and {}",
                    crate::selections::MIN_SEATS,
                    crate::selections::MAX_SEATS
                )
            };
            return Ok(SubmitOutcome::Blocked { reason });
        }

        let payload = serde_json::to_value(selections.as_ref())?;
        let event = BookingSubmittedEvent::new(Some(self.id), payload);
        sink.submit(&event);

        self.reset()?;
        self.navigator.restart_at(Step::Landing);
        info!(session_id = %self.id, submission_id = %event.submission_id, "Booking handed off");
        Ok(SubmitOutcome::Submitted(event))
    }
}

impl Default for BookingSession {
    fn default() -> Self {
        Self::new()
    }
}
