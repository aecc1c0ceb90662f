//! Candidate validation: check-in picks, check-in/check-out ranges, guest counts.
//!
//! All checks are pure and return a [`ValidationVerdict`]. Date checks and the guest
//! check are separate calls because the guest count is entered independently of the
//! calendar; [`crate::submission::prepare_submission`] requires both.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::blocked::is_date_blocked;
use crate::booking::{ExistingBooking, VenueConstraints};
use crate::pricing::{quote_price, PriceQuote};
use crate::range::DateRange;
use crate::selection::CandidateSelection;
use crate::verdict::{ValidationVerdict, Violation};

/// Validate a check-in date picked before any check-out.
pub fn validate_candidate_start(
    date: NaiveDate,
    bookings: &[ExistingBooking],
) -> ValidationVerdict {
    if is_date_blocked(date, bookings) {
        debug!(%date, "check-in date is already booked");
        return Violation::DateAlreadyBooked.into();
    }
    ValidationVerdict::Valid
}

/// Validate a full check-in/check-out range.
///
/// Every day in `[start, end]` is checked, both ends included, stopping at the first
/// blocked day. `end < start` is rejected as [`Violation::IncompleteSelection`] rather
/// than silently swapped.
pub fn validate_candidate_range(
    start: NaiveDate,
    end: NaiveDate,
    bookings: &[ExistingBooking],
) -> ValidationVerdict {
    if end < start {
        debug!(%start, %end, "check-out precedes check-in");
        return Violation::IncompleteSelection.into();
    }

    let range = DateRange::from_ordered(start, end);
    if let Some(day) = range.days().find(|d| is_date_blocked(*d, bookings)) {
        debug!(%range, blocked = %day, "selected range overlaps a booking");
        return Violation::RangeOverlapsBooking.into();
    }

    ValidationVerdict::Valid
}

/// Guests must number at least 1 and at most the venue's capacity.
pub fn validate_guest_count(guests: u32, constraints: &VenueConstraints) -> ValidationVerdict {
    if guests < 1 || guests > constraints.max_guests {
        debug!(guests, max_guests = constraints.max_guests, "guest count out of range");
        return Violation::GuestCountOutOfRange.into();
    }
    ValidationVerdict::Valid
}

/// Verdict for a selection plus, when both dates are set and valid, its price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SelectionEvaluation {
    pub verdict: ValidationVerdict,
    pub quote: Option<PriceQuote>,
}

impl SelectionEvaluation {
    fn without_quote(verdict: ValidationVerdict) -> Self {
        Self {
            verdict,
            quote: None,
        }
    }
}

/// The entry point a booking calendar calls on every date click.
///
/// - no check-in: [`Violation::IncompleteSelection`]
/// - check-in only: [`validate_candidate_start`]
/// - both dates: [`validate_candidate_range`], with a [`PriceQuote`] attached on success
///
/// A check-out without a check-in counts as incomplete. Guest count is not checked here.
pub fn evaluate_selection(
    selection: &CandidateSelection,
    bookings: &[ExistingBooking],
    constraints: &VenueConstraints,
) -> SelectionEvaluation {
    match (selection.start, selection.end) {
        (None, _) => SelectionEvaluation::without_quote(Violation::IncompleteSelection.into()),
        (Some(start), None) => {
            SelectionEvaluation::without_quote(validate_candidate_start(start, bookings))
        }
        (Some(start), Some(end)) => {
            let verdict = validate_candidate_range(start, end, bookings);
            if !verdict.is_valid() {
                return SelectionEvaluation::without_quote(verdict);
            }
            SelectionEvaluation {
                verdict,
                quote: Some(quote_price(start, end, constraints.price_per_night)),
            }
        }
    }
}
