//! Validation outcomes.
//!
//! An invalid selection is an expected result of a user clicking around a calendar, so
//! every rule violation is an ordinary value here rather than an error.

use serde::{Deserialize, Serialize};

/// Which rule a selection broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    /// The picked check-in date is already blocked.
    DateAlreadyBooked,
    /// Some day between check-in and check-out is blocked.
    RangeOverlapsBooking,
    /// Guest count is below 1 or above the venue's capacity.
    GuestCountOutOfRange,
    /// A date is missing, or check-out precedes check-in.
    IncompleteSelection,
}

impl Violation {
    /// Stable machine-readable code, identical to the serialized form.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::DateAlreadyBooked => "date_already_booked",
            Violation::RangeOverlapsBooking => "range_overlaps_booking",
            Violation::GuestCountOutOfRange => "guest_count_out_of_range",
            Violation::IncompleteSelection => "incomplete_selection",
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            Violation::DateAlreadyBooked => "This date is already booked",
            Violation::RangeOverlapsBooking => "The selected dates include an existing booking",
            Violation::GuestCountOutOfRange => "Number of guests must be at least 1 and within the venue's capacity",
            Violation::IncompleteSelection => "Select both a check-in and a check-out date",
        };
        f.write_str(message)
    }
}

/// Result of a single validation call.
///
/// Serializes as `{"valid": bool, "violation": code | null}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "VerdictRepr")]
pub enum ValidationVerdict {
    Valid,
    Invalid(Violation),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationVerdict::Valid)
    }

    pub fn violation(&self) -> Option<Violation> {
        match self {
            ValidationVerdict::Valid => None,
            ValidationVerdict::Invalid(v) => Some(*v),
        }
    }

    /// Combine two verdicts; the first failure wins.
    pub fn and(self, other: ValidationVerdict) -> ValidationVerdict {
        match self {
            ValidationVerdict::Valid => other,
            invalid => invalid,
        }
    }
}

impl From<Violation> for ValidationVerdict {
    fn from(v: Violation) -> Self {
        ValidationVerdict::Invalid(v)
    }
}

#[derive(Serialize)]
struct VerdictRepr {
    valid: bool,
    violation: Option<Violation>,
}

impl From<ValidationVerdict> for VerdictRepr {
    fn from(verdict: ValidationVerdict) -> Self {
        Self {
            valid: verdict.is_valid(),
            violation: verdict.violation(),
        }
    }
}
