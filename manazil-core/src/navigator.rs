use crate::guard::{self, Navigation, Step};
use crate::selections::BookingSelections;
use tracing::debug;

/// Tracks where a session is in the wizard.
///
/// Every move, including going back through history, is checked by the guard
/// against the selections as they are at that moment.
#[derive(Debug, Clone)]
pub struct Navigator {
    history: Vec<Step>,
}

impl Navigator {
    pub fn new() -> Self {
        Self {
            history: vec![Step::Landing],
        }
    }

    pub fn current(&self) -> Step {
        self.history.last().copied().unwrap_or(Step::Landing)
    }

    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Navigate to a step and record where we landed
    pub fn navigate_to(&mut self, selections: &BookingSelections, target: Step) -> Navigation {
        let decision = guard::check(selections, target);
        self.land(target, decision)
    }

    /// Navigate to a raw location (deep link, typed URL)
    pub fn navigate_path(&mut self, selections: &BookingSelections, location: &str) -> Navigation {
        let decision = guard::resolve(selections, location);
        if let Navigation::Redirect(to) = decision {
            debug!("Redirecting {} -> {}", location, to);
        }
        self.push(decision.destination());
        decision
    }

    /// Step back in history. The previous entry is re-checked and replaced by its
    /// redirect if it is no longer reachable. Returns `None` at the start of history.
    pub fn back(&mut self, selections: &BookingSelections) -> Option<Navigation> {
        if self.history.len() < 2 {
            return None;
        }

        self.history.pop();
        let previous = self.current();
        let decision = guard::check(selections, previous);
        if let Navigation::Redirect(to) = decision {
            debug!("Back to {} redirected -> {}", previous, to);
            self.history.pop();
            self.push(to);
        }
        Some(decision)
    }

    /// Forget history and land on `step` without consulting the guard.
    /// Used after a reset, when the caller already knows the destination.
    pub(crate) fn restart_at(&mut self, step: Step) {
        self.history.clear();
        self.history.push(step);
    }

    fn land(&mut self, target: Step, decision: Navigation) -> Navigation {
        if let Navigation::Redirect(to) = decision {
            debug!("Redirecting {} -> {}", target, to);
        }
        self.push(decision.destination());
        decision
    }

    /// Record `step`. Revisiting a step already in history winds history back to
    /// that entry, so it never holds a step twice.
    fn push(&mut self, step: Step) {
        match self.history.iter().position(|visited| *visited == step) {
            Some(index) => self.history.truncate(index + 1),
            None => self.history.push(step),
        }
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}
