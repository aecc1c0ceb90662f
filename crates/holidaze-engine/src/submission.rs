//! Handing a completed selection to the booking API.
//!
//! Local validation is advisory: it runs against the caller's snapshot of bookings, and
//! another guest may book the same dates first. The API's answer, a
//! [`SubmissionOutcome`], is authoritative, and a rejection after local validation passed
//! is an expected, retryable outcome.

use chrono::{NaiveDate, NaiveTime, SecondsFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::booking::{ExistingBooking, VenueConstraints};
use crate::range::DateRange;
use crate::selection::SelectionState;
use crate::validate::{validate_candidate_range, validate_guest_count};
use crate::verdict::{ValidationVerdict, Violation};

/// Body of a booking-creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub date_from: String,
    pub date_to: String,
    pub guests: u32,
    pub venue_id: String,
}

impl BookingRequest {
    pub fn new(range: DateRange, guests: u32, venue_id: impl Into<String>) -> Self {
        Self {
            date_from: iso_midnight_utc(range.start()),
            date_to: iso_midnight_utc(range.end()),
            guests,
            venue_id: venue_id.into(),
        }
    }
}

/// `2024-06-16` -> `2024-06-16T00:00:00.000Z`
fn iso_midnight_utc(date: NaiveDate) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// What the booking API answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmissionOutcome {
    Created { booking_id: String },
    Rejected { reason: String },
}

/// Build the booking request for a completed selection.
///
/// Dates and guest count are re-checked together; nothing is submitted unless both pass.
/// A selection that is not complete yields [`Violation::IncompleteSelection`], and a date
/// violation is reported ahead of a guest-count one.
pub fn prepare_submission(
    state: &SelectionState,
    guests: u32,
    venue_id: &str,
    bookings: &[ExistingBooking],
    constraints: &VenueConstraints,
) -> Result<BookingRequest, Violation> {
    let range = state.range().ok_or(Violation::IncompleteSelection)?;

    let verdict = validate_candidate_range(range.start(), range.end(), bookings)
        .and(validate_guest_count(guests, constraints));
    if let ValidationVerdict::Invalid(violation) = verdict {
        debug!(%range, guests, %violation, "submission blocked by local validation");
        return Err(violation);
    }

    Ok(BookingRequest::new(range, guests, venue_id))
}
