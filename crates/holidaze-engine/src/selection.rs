//! The in-progress date selection of a booking calendar.
//!
//! [`SelectionState`] is the explicit two-click state machine:
//!
//! ```text
//! Empty --pick(ok)--> StartOnly --pick(ok)--> Complete --submit(created)--> Empty
//!   ^                    |                       |
//!   +----pick(fails)-----+                       +--pick--> (new selection)
//! ```
//!
//! A failed second pick always drops back to `Empty`, so a rejected range never leaves a
//! half-set selection behind.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::booking::ExistingBooking;
use crate::range::DateRange;
use crate::submission::SubmissionOutcome;
use crate::validate::{validate_candidate_range, validate_candidate_start};
use crate::verdict::ValidationVerdict;

/// Raw selection as a caller holds it: either date may be missing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateSelection {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl CandidateSelection {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }
}

/// Where the check-in/check-out selection stands after each calendar click.
///
/// ```
/// use chrono::NaiveDate;
/// use holidaze_engine::SelectionState;
///
/// let day = |d| NaiveDate::from_ymd_opt(2024, 6, d).unwrap();
/// let mut state = SelectionState::default();
/// assert!(state.pick_date(day(19), &[]).is_valid());
/// assert!(state.pick_date(day(24), &[]).is_valid());
/// assert_eq!(state.range().map(|r| r.nights()), Some(5));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum SelectionState {
    #[default]
    Empty,
    StartOnly { start: NaiveDate },
    Complete { range: DateRange },
}

impl SelectionState {
    /// Feed one calendar click into the selection.
    ///
    /// The returned verdict is what the calendar should surface; the state has already
    /// been updated (or reset) accordingly.
    pub fn pick_date(
        &mut self,
        date: NaiveDate,
        bookings: &[ExistingBooking],
    ) -> ValidationVerdict {
        let verdict = match *self {
            SelectionState::Empty | SelectionState::Complete { .. } => {
                let verdict = validate_candidate_start(date, bookings);
                *self = if verdict.is_valid() {
                    SelectionState::StartOnly { start: date }
                } else {
                    SelectionState::Empty
                };
                verdict
            }
            SelectionState::StartOnly { start } => {
                let verdict = validate_candidate_range(start, date, bookings);
                *self = if verdict.is_valid() {
                    SelectionState::Complete {
                        range: DateRange::from_ordered(start, date),
                    }
                } else {
                    SelectionState::Empty
                };
                verdict
            }
        };
        debug!(%date, valid = verdict.is_valid(), state = ?self, "picked date");
        verdict
    }

    pub fn reset(&mut self) {
        *self = SelectionState::Empty;
    }

    /// Apply the booking API's answer to a submission of this selection.
    ///
    /// A created booking clears the selection. A rejection keeps it so the guest can
    /// retry or adjust.
    pub fn apply_submission(&mut self, outcome: &SubmissionOutcome) {
        match outcome {
            SubmissionOutcome::Created { booking_id } => {
                debug!(%booking_id, "booking created, clearing selection");
                self.reset();
            }
            SubmissionOutcome::Rejected { reason } => {
                debug!(%reason, state = ?self, "booking rejected, keeping selection");
            }
        }
    }

    /// The completed range, if both dates have been picked.
    pub fn range(&self) -> Option<DateRange> {
        match self {
            SelectionState::Complete { range } => Some(*range),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }

    pub fn candidate(&self) -> CandidateSelection {
        match *self {
            SelectionState::Empty => CandidateSelection::default(),
            SelectionState::StartOnly { start } => CandidateSelection::new(Some(start), None),
            SelectionState::Complete { range } => {
                CandidateSelection::new(Some(range.start()), Some(range.end()))
            }
        }
    }
}
