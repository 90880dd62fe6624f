use crate::selections::{BookingSelections, SelectionsPatch};
use std::sync::Arc;
use tracing::{debug, info};

/// Copy-on-write holder of a session's selections.
///
/// Every update swaps in a fresh `Arc`; snapshots handed out earlier keep pointing at
/// the value they were taken from. Only a `BookingSession` can create one.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    current: Arc<BookingSelections>,
    revision: u64,
}

impl SelectionStore {
    pub(crate) fn new() -> Self {
        Self {
            current: Arc::new(BookingSelections::initial()),
            revision: 0,
        }
    }

    /// Current snapshot
    pub fn get(&self) -> Arc<BookingSelections> {
        Arc::clone(&self.current)
    }

    /// Number of updates and resets applied so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply a transform of the current value.
    ///
    /// The transform may return a `SelectionsPatch` (shallow merge) or a full
    /// `BookingSelections` (replacement).
    pub fn update<F, P>(&mut self, transform: F) -> Arc<BookingSelections>
    where
        F: FnOnce(&BookingSelections) -> P,
        P: Into<SelectionsPatch>,
    {
        let patch: SelectionsPatch = transform(self.current.as_ref()).into();
        if patch.is_empty() {
            return self.get();
        }

        let next = patch.apply(self.current.as_ref());
        self.current = Arc::new(next);
        self.revision += 1;
        debug!(revision = self.revision, "Booking selections updated");
        self.get()
    }

    /// Replace the state with the initial value
    pub fn reset(&mut self) -> Arc<BookingSelections> {
        self.current = Arc::new(BookingSelections::initial());
        self.revision += 1;
        info!(revision = self.revision, "Booking selections reset");
        self.get()
    }
}
