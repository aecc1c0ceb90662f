//! Free stays: runs of unblocked dates inside a calendar window.
//!
//! Blocked runs come from [`merge_blocked_ranges`], so the gaps between them are exactly
//! the dates a guest could pick. A free run `[a, b]` supports a stay checking in on `a`
//! and checking out on `b`, which is `b - a` nights.

use serde::{Deserialize, Serialize};

use crate::blocked::merge_blocked_ranges;
use crate::booking::ExistingBooking;
use crate::range::DateRange;

/// A maximal run of unblocked dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableStay {
    pub range: DateRange,
    /// Nights bookable by checking in on `range.start` and out on `range.end`.
    pub nights: i64,
}

impl AvailableStay {
    fn new(range: DateRange) -> Self {
        Self {
            range,
            nights: range.nights(),
        }
    }
}

/// Free runs inside `window`, sorted by start, keeping those with at least `min_nights`.
///
/// A single free day between two bookings is a run of zero nights, so `min_nights = 0`
/// reports every unblocked date while `min_nights = 1` only reports bookable stays.
pub fn find_available_stays(
    bookings: &[ExistingBooking],
    window: DateRange,
    min_nights: i64,
) -> Vec<AvailableStay> {
    let mut runs = Vec::new();
    // `None` once the cursor has moved past the last representable date.
    let mut cursor = Some(window.start());

    for blocked in merge_blocked_ranges(bookings) {
        let Some(free_from) = cursor else { break };
        if blocked.end() < free_from {
            continue;
        }
        if blocked.start() > window.end() {
            break;
        }
        if free_from < blocked.start() {
            if let Some(free_to) = blocked.start().pred_opt() {
                runs.push(DateRange::from_ordered(free_from, free_to));
            }
        }
        cursor = blocked.end().succ_opt();
    }

    // Trailing run after the last blocked range.
    if let Some(free_from) = cursor {
        if free_from <= window.end() {
            runs.push(DateRange::from_ordered(free_from, window.end()));
        }
    }

    runs.into_iter()
        .map(AvailableStay::new)
        .filter(|stay| stay.nights >= min_nights)
        .collect()
}

/// The earliest free run in `window` offering at least `min_nights`.
pub fn first_available_stay(
    bookings: &[ExistingBooking],
    window: DateRange,
    min_nights: i64,
) -> Option<AvailableStay> {
    find_available_stays(bookings, window, min_nights)
        .into_iter()
        .next()
}
