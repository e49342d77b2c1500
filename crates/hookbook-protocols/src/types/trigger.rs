//! Booking event triggers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A booking event a webhook subscription can listen for.
///
/// The wire form is the uppercase identifier (`BOOKING_CREATED`); the
/// display form is its lowercase counterpart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventTrigger {
    BookingCreated,
    BookingRescheduled,
    BookingCancelled,
}

impl EventTrigger {
    /// All triggers in declared order.
    pub const ALL: [EventTrigger; 3] = [
        EventTrigger::BookingCreated,
        EventTrigger::BookingRescheduled,
        EventTrigger::BookingCancelled,
    ];

    /// Identifier used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BookingCreated => "BOOKING_CREATED",
            Self::BookingRescheduled => "BOOKING_RESCHEDULED",
            Self::BookingCancelled => "BOOKING_CANCELLED",
        }
    }

    /// Lowercase identifier used for display.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::BookingCreated => "booking_created",
            Self::BookingRescheduled => "booking_rescheduled",
            Self::BookingCancelled => "booking_cancelled",
        }
    }
}

impl fmt::Display for EventTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Error returned when parsing an unknown trigger identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown event trigger: {0}")]
pub struct ParseTriggerError(pub String);

impl FromStr for EventTrigger {
    type Err = ParseTriggerError;

    /// Accepts either the wire or the display form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| ParseTriggerError(s.to_string()))
    }
}

#[cfg(test)]
#[path = "trigger_tests.rs"]
mod tests;
