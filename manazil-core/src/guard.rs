use crate::selections::BookingSelections;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens of the booking wizard
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Step {
    Landing,
    ServiceSelection,
    FlightDetails,
    HotelSelection,
    Confirmation,
}

impl Step {
    pub const ALL: [Step; 5] = [
        Step::Landing,
        Step::ServiceSelection,
        Step::FlightDetails,
        Step::HotelSelection,
        Step::Confirmation,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Step::Landing => "/",
            Step::ServiceSelection => "/select-service",
            Step::FlightDetails => "/flight-details",
            Step::HotelSelection => "/hotel-selection",
            Step::Confirmation => "/confirmation",
        }
    }

    /// Match a location against the step paths.
    ///
    /// Accepts a hash-router prefix (`#/...`), ignores query strings and a trailing
    /// slash, and compares case-insensitively.
    pub fn from_path(location: &str) -> Option<Step> {
        let location = location.trim();
        let location = location.strip_prefix('#').unwrap_or(location);
        let path = location.split(['?', '#']).next().unwrap_or_default();
        let path = match path.trim_end_matches('/') {
            "" => "/",
            trimmed => trimmed,
        };

        Step::ALL.into_iter().find(|step| step.path().eq_ignore_ascii_case(path))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Outcome of a navigation attempt
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "decision", content = "step", rename_all = "snake_case")]
pub enum Navigation {
    Allow(Step),
    Redirect(Step),
}

impl Navigation {
    /// The step that actually gets rendered
    pub fn destination(&self) -> Step {
        match self {
            Navigation::Allow(step) | Navigation::Redirect(step) => *step,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, Navigation::Allow(_))
    }
}

/// Decide whether `target` is reachable with the given selections.
///
/// Never fails: an unreachable step always resolves to a redirect.
pub fn check(selections: &BookingSelections, target: Step) -> Navigation {
    let services = &selections.services;

    match target {
        Step::Landing | Step::ServiceSelection => Navigation::Allow(target),
        Step::FlightDetails => {
            if services.flights {
                Navigation::Allow(target)
            } else {
                Navigation::Redirect(Step::ServiceSelection)
            }
        }
        Step::HotelSelection => {
            let flights_ready = services.flights
                && selections
                    .flight_details
                    .as_ref()
                    .is_some_and(|details| details.is_complete());

            if services.hotel || flights_ready {
                Navigation::Allow(target)
            } else if services.flights {
                Navigation::Redirect(Step::FlightDetails)
            } else {
                Navigation::Redirect(Step::ServiceSelection)
            }
        }
        Step::Confirmation => {
            if services.any() {
                Navigation::Allow(target)
            } else {
                Navigation::Redirect(Step::ServiceSelection)
            }
        }
    }
}

/// Guard a raw location. Unknown paths go back to the landing page.
pub fn resolve(selections: &BookingSelections, location: &str) -> Navigation {
    match Step::from_path(location) {
        Some(step) => check(selections, step),
        None => Navigation::Redirect(Step::Landing),
    }
}
