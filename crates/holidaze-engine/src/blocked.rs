//! Blocked-date computation over a venue's existing bookings.
//!
//! A date is blocked when any booking covers it, check-in and check-out days included.
//! The check-out day of one stay is therefore never available as the check-in day of the
//! next: there is no same-day turnover.
//!
//! [`is_date_blocked`] scans the booking list directly. [`BlockedDates`] flattens the
//! bookings into a sorted set once, for callers that validate many selections against
//! the same snapshot; both give identical answers.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use tracing::trace;

use crate::booking::ExistingBooking;
use crate::range::DateRange;
use crate::verdict::{ValidationVerdict, Violation};

/// True if `date` falls inside `[booking.start, booking.end]` for any booking.
pub fn is_date_blocked(date: NaiveDate, bookings: &[ExistingBooking]) -> bool {
    bookings.iter().any(|b| b.range.contains(date))
}

/// Every blocked date of a booking snapshot, sorted and de-duplicated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockedDates {
    dates: BTreeSet<NaiveDate>,
}

impl BlockedDates {
    pub fn from_bookings(bookings: &[ExistingBooking]) -> Self {
        let dates: BTreeSet<NaiveDate> = bookings.iter().flat_map(|b| b.range.days()).collect();
        trace!(
            bookings = bookings.len(),
            blocked = dates.len(),
            "flattened bookings into blocked dates"
        );
        Self { dates }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.dates.iter().copied()
    }

    /// Earliest blocked date in `[start, end]`, or `None` if the span is clear.
    ///
    /// Returns `None` for an inverted span.
    pub fn first_blocked_in(&self, start: NaiveDate, end: NaiveDate) -> Option<NaiveDate> {
        if end < start {
            return None;
        }
        self.dates.range(start..=end).next().copied()
    }

    /// Same verdict as [`crate::validate::validate_candidate_start`].
    pub fn validate_start(&self, date: NaiveDate) -> ValidationVerdict {
        if self.contains(date) {
            Violation::DateAlreadyBooked.into()
        } else {
            ValidationVerdict::Valid
        }
    }

    /// Same verdict as [`crate::validate::validate_candidate_range`].
    pub fn validate_range(&self, start: NaiveDate, end: NaiveDate) -> ValidationVerdict {
        if end < start {
            return Violation::IncompleteSelection.into();
        }
        match self.first_blocked_in(start, end) {
            Some(_) => Violation::RangeOverlapsBooking.into(),
            None => ValidationVerdict::Valid,
        }
    }
}

/// Blocked dates inside the calendar window `[from, to]`, ascending.
///
/// This is the list a calendar widget disables. An inverted window yields nothing.
pub fn blocked_dates_between(
    bookings: &[ExistingBooking],
    from: NaiveDate,
    to: NaiveDate,
) -> Vec<NaiveDate> {
    if to < from {
        return Vec::new();
    }

    let dates: BTreeSet<NaiveDate> = bookings
        .iter()
        .filter(|b| b.range.start() <= to && b.range.end() >= from)
        .flat_map(|b| {
            DateRange::from_ordered(b.range.start().max(from), b.range.end().min(to)).days()
        })
        .collect();

    dates.into_iter().collect()
}

/// Merge booking ranges into sorted, non-overlapping blocked runs.
///
/// Overlapping ranges coalesce, and so do day-adjacent ones: a stay ending on the 15th
/// and another starting on the 16th leave no free day between them.
pub fn merge_blocked_ranges(bookings: &[ExistingBooking]) -> Vec<DateRange> {
    let mut ranges: Vec<DateRange> = bookings.iter().map(|b| b.range).collect();
    if ranges.is_empty() {
        return ranges;
    }

    ranges.sort();

    let mut merged: Vec<DateRange> = Vec::with_capacity(ranges.len());
    for range in ranges {
        if let Some(last) = merged.last_mut() {
            if (range.start() - last.end()).num_days() <= 1 {
                let end = last.end().max(range.end());
                *last = DateRange::from_ordered(last.start(), end);
                continue;
            }
        }
        merged.push(range);
    }

    merged
}
