//! Pending trigger selection for the next subscription.

use hookbook_protocols::EventTrigger;

/// Derive the trigger list from the three flags, in declared order.
pub fn derive_triggers(created: bool, rescheduled: bool, cancelled: bool) -> Vec<EventTrigger> {
    [
        (created, EventTrigger::BookingCreated),
        (rescheduled, EventTrigger::BookingRescheduled),
        (cancelled, EventTrigger::BookingCancelled),
    ]
    .into_iter()
    .filter_map(|(on, trigger)| on.then_some(trigger))
    .collect()
}

/// Three independent trigger flags. All on by default.
///
/// The trigger list is never stored; [`TriggerSelection::triggers`] derives
/// it from the current flags on every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TriggerSelection {
    pub created: bool,
    pub rescheduled: bool,
    pub cancelled: bool,
}

impl Default for TriggerSelection {
    fn default() -> Self {
        Self::all()
    }
}

impl TriggerSelection {
    pub fn new(created: bool, rescheduled: bool, cancelled: bool) -> Self {
        Self {
            created,
            rescheduled,
            cancelled,
        }
    }

    pub fn all() -> Self {
        Self::new(true, true, true)
    }

    pub fn none() -> Self {
        Self::new(false, false, false)
    }

    /// Selection with exactly the given triggers switched on.
    pub fn from_triggers(triggers: &[EventTrigger]) -> Self {
        let mut selection = Self::none();
        for trigger in triggers {
            selection.set(*trigger, true);
        }
        selection
    }

    pub fn triggers(&self) -> Vec<EventTrigger> {
        derive_triggers(self.created, self.rescheduled, self.cancelled)
    }

    pub fn is_empty(&self) -> bool {
        !(self.created || self.rescheduled || self.cancelled)
    }

    pub fn is_selected(&self, trigger: EventTrigger) -> bool {
        *self.flag(trigger)
    }

    pub fn set(&mut self, trigger: EventTrigger, on: bool) {
        *self.flag_mut(trigger) = on;
    }

    pub fn toggle(&mut self, trigger: EventTrigger) {
        let flag = self.flag_mut(trigger);
        *flag = !*flag;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn flag(&self, trigger: EventTrigger) -> &bool {
        match trigger {
            EventTrigger::BookingCreated => &self.created,
            EventTrigger::BookingRescheduled => &self.rescheduled,
            EventTrigger::BookingCancelled => &self.cancelled,
        }
    }

    fn flag_mut(&mut self, trigger: EventTrigger) -> &mut bool {
        match trigger {
            EventTrigger::BookingCreated => &mut self.created,
            EventTrigger::BookingRescheduled => &mut self.rescheduled,
            EventTrigger::BookingCancelled => &mut self.cancelled,
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
