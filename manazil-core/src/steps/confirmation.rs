use crate::selections::{BookingSelections, SelectionsPatch, MAX_SEATS, MIN_SEATS};
use crate::store::SelectionStore;
use crate::submission::BookingSummary;
use manazil_catalog::HotelCatalog;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// Result of the last free-form seat entry on the confirmation screen
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SeatsInput {
    #[default]
    Untouched,
    /// In-range number, stored as typed
    Accepted { seats: u32 },
    /// Empty field, stored as one seat
    Defaulted,
    /// Out of range or not a number; the store was left alone
    Rejected { raw: String },
}

impl SeatsInput {
    /// Interpret raw input
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return SeatsInput::Defaulted;
        }

        match trimmed.parse::<i64>() {
            Ok(n) if (MIN_SEATS as i64..=MAX_SEATS as i64).contains(&n) => {
                SeatsInput::Accepted { seats: n as u32 }
            }
            _ => SeatsInput::Rejected { raw: raw.to_string() },
        }
    }

    /// Seats to write into the store, if any
    pub fn seats(&self) -> Option<u32> {
        match self {
            SeatsInput::Accepted { seats } => Some(*seats),
            SeatsInput::Defaulted => Some(MIN_SEATS),
            SeatsInput::Untouched | SeatsInput::Rejected { .. } => None,
        }
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, SeatsInput::Rejected { .. })
    }

    /// Inline message shown under the seat field
    pub fn message(&self) -> Option<String> {
        match self {
            SeatsInput::Rejected { raw } => Some(format!(
                "'{}' is not a valid number of travelers ({}-{})",
                raw.trim(),
                MIN_SEATS,
                MAX_SEATS
            )),
            _ => None,
        }
    }
}

/// Submit is enabled when a service is chosen, the stored seat count is bookable
/// and the last entry was not rejected
pub fn can_submit(selections: &BookingSelections, seats_input: &SeatsInput) -> bool {
    selections.services.any() && selections.seats_in_range() && !seats_input.is_rejected()
}

pub struct Confirmation<'a> {
    store: &'a mut SelectionStore,
    seats_input: &'a mut SeatsInput,
}

impl<'a> Confirmation<'a> {
    pub(crate) fn new(store: &'a mut SelectionStore, seats_input: &'a mut SeatsInput) -> Self {
        Self { store, seats_input }
    }

    /// Apply a seat entry. Rejected input leaves the stored count unchanged.
    pub fn set_seats(&mut self, raw: &str) -> SeatsInput {
        let input = SeatsInput::parse(raw);
        match input.seats() {
            Some(seats) => {
                debug!(seats, "Number of seats changed");
                self.store.update(|_| SelectionsPatch::new().number_of_seats(seats));
            }
            None => warn!(raw, "Seat entry rejected"),
        }

        *self.seats_input = input.clone();
        input
    }

    pub fn seats_input(&self) -> &SeatsInput {
        self.seats_input
    }

    pub fn can_submit(&self) -> bool {
        can_submit(&self.store.get(), self.seats_input)
    }

    pub fn summary(&self, catalog: &HotelCatalog) -> BookingSummary {
        BookingSummary::build(&self.store.get(), catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selections::Services;
    use manazil_shared::ServiceKind;

    #[test]
    fn test_seat_parsing() {
        assert_eq!(SeatsInput::parse("4"), SeatsInput::Accepted { seats: 4 });
        assert_eq!(SeatsInput::parse(" 100 "), SeatsInput::Accepted { seats: 100 });
        assert_eq!(SeatsInput::parse(""), SeatsInput::Defaulted);
        assert_eq!(SeatsInput::parse("   "), SeatsInput::Defaulted);
        assert!(SeatsInput::parse("0").is_rejected());
        assert!(SeatsInput::parse("101").is_rejected());
        assert!(SeatsInput::parse("-3").is_rejected());
        assert!(SeatsInput::parse("two").is_rejected());
        // Only whole numbers; no trailing fraction or garbage
        assert!(SeatsInput::parse("5.0").is_rejected());
        assert!(SeatsInput::parse("12abc").is_rejected());
        assert!(SeatsInput::parse("99999999999999999999").is_rejected());
    }

    #[test]
    fn test_accepted_and_defaulted_are_in_range() {
        for raw in ["", "1", "17", "100"] {
            let seats = SeatsInput::parse(raw).seats().unwrap();
            assert!((MIN_SEATS..=MAX_SEATS).contains(&seats));
        }
        assert_eq!(SeatsInput::parse("").seats(), Some(1));
    }

    #[test]
    fn test_rejected_entry_keeps_store_and_disables_submit() {
        let mut store = SelectionStore::new();
        store.update(|_| SelectionsPatch::new().services(Services::only(ServiceKind::VisaBus)));
        let mut input = SeatsInput::default();
        let mut step = Confirmation::new(&mut store, &mut input);

        step.set_seats("12");
        assert!(step.can_submit());

        let result = step.set_seats("150");
        assert!(result.is_rejected());
        assert!(result.message().unwrap().contains("150"));
        assert!(!step.can_submit());
        assert_eq!(store.get().number_of_seats, 12);
    }

    #[test]
    fn test_empty_entry_coerces_to_one() {
        let mut store = SelectionStore::new();
        store.update(|_| SelectionsPatch::new().number_of_seats(30));
        let mut input = SeatsInput::default();
        Confirmation::new(&mut store, &mut input).set_seats("");
        assert_eq!(store.get().number_of_seats, 1);
        assert_eq!(input, SeatsInput::Defaulted);
    }

    #[test]
    fn test_submit_requires_a_service() {
        let selections = BookingSelections::initial();
        assert!(!can_submit(&selections, &SeatsInput::Untouched));

        let visa = BookingSelections {
            services: Services::only(ServiceKind::VisaBus),
            ..BookingSelections::initial()
        };
        assert!(can_submit(&visa, &SeatsInput::Untouched));

        let out_of_range = BookingSelections { number_of_seats: 0, ..visa };
        assert!(!can_submit(&out_of_range, &SeatsInput::Untouched));
    }
}
