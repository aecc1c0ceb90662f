//! Closed calendar-date intervals.
//!
//! A [`DateRange`] covers every day from `start` to `end`, both included. Time of day
//! never enters the picture: bookings are compared at day granularity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A closed interval `[start, end]` of calendar dates. Always `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "DateRangeParts")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `end < start`.
    ///
    /// A same-day range (`start == end`) is allowed and covers exactly one date.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if end < start {
            return Err(EngineError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build a range from bounds the caller has already ordered.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end, "unordered range {start}..{end}");
        Self { start, end }
    }

    /// A range covering a single day.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// True when `date` lies in `[start, end]`, endpoints included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// True when the two ranges share at least one calendar day.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Every date in the range, in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }

    /// Number of calendar days covered (a same-day range covers 1).
    pub fn len_days(&self) -> i64 {
        self.nights() + 1
    }

    /// Day difference between `end` and `start`. Zero for a same-day range.
    pub fn nights(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Unchecked wire form, so deserialization goes through [`DateRange::new`].
#[derive(Deserialize)]
struct DateRangeParts {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<DateRangeParts> for DateRange {
    type Error = EngineError;

    fn try_from(parts: DateRangeParts) -> Result<Self> {
        DateRange::new(parts.start, parts.end)
    }
}
