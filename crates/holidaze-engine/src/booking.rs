//! Reservations already on a venue, and the venue limits a selection is checked against.

use serde::{Deserialize, Serialize};

use crate::range::DateRange;

/// A confirmed reservation on a venue.
///
/// The engine only reads these; the booking API owns them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExistingBooking {
    pub id: String,
    pub range: DateRange,
    pub guests: u32,
}

impl ExistingBooking {
    pub fn new(id: impl Into<String>, range: DateRange, guests: u32) -> Self {
        Self {
            id: id.into(),
            range,
            guests,
        }
    }
}

/// Read-only snapshot of the venue fields that constrain a booking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VenueConstraints {
    pub max_guests: u32,
    pub price_per_night: f64,
}
