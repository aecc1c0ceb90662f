//! # holidaze-engine
//!
//! Date-range availability and booking-conflict engine for the Holidaze venue
//! marketplace.
//!
//! Given a venue's existing bookings, the engine decides which calendar dates are
//! blocked, validates a guest's check-in/check-out selection against them, prices the
//! stay, and checks the guest count against the venue's capacity. Everything is pure:
//! no I/O, no clocks, no shared state. Validation is advisory; the booking API remains
//! the authority on whether a reservation is actually created.
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use holidaze_engine::{
//!     evaluate_selection, CandidateSelection, DateRange, ExistingBooking, VenueConstraints,
//!     Violation,
//! };
//!
//! let d = |s: &str| s.parse::<NaiveDate>().unwrap();
//! let bookings = vec![ExistingBooking::new(
//!     "b1",
//!     DateRange::new(d("2024-06-10"), d("2024-06-15")).unwrap(),
//!     2,
//! )];
//! let venue = VenueConstraints { max_guests: 4, price_per_night: 100.0 };
//!
//! let overlapping = CandidateSelection::new(Some(d("2024-06-08")), Some(d("2024-06-11")));
//! let eval = evaluate_selection(&overlapping, &bookings, &venue);
//! assert_eq!(eval.verdict.violation(), Some(Violation::RangeOverlapsBooking));
//!
//! let free = CandidateSelection::new(Some(d("2024-06-16")), Some(d("2024-06-20")));
//! let eval = evaluate_selection(&free, &bookings, &venue);
//! assert!(eval.verdict.is_valid());
//! assert_eq!(eval.quote.unwrap().total, 400.0);
//! ```
//!
//! ## Modules
//!
//! - [`range`] — closed calendar-date intervals
//! - [`booking`] — existing bookings and venue constraints
//! - [`blocked`] — inclusive blocked-date checks, flattened blocked sets, merged runs
//! - [`validate`] — check-in, range, and guest-count validation
//! - [`pricing`] — nights and total price
//! - [`selection`] — the two-click selection state machine
//! - [`submission`] — booking requests and the API's outcome
//! - [`freestay`] — free runs of dates inside a window
//! - [`records`] — booking API JSON records and date parsing
//! - [`verdict`] — validation outcomes
//! - [`error`] — error types for malformed input

pub mod blocked;
pub mod booking;
pub mod error;
pub mod freestay;
pub mod pricing;
pub mod range;
pub mod records;
pub mod selection;
pub mod submission;
pub mod validate;
pub mod verdict;

pub use blocked::{blocked_dates_between, is_date_blocked, merge_blocked_ranges, BlockedDates};
pub use booking::{ExistingBooking, VenueConstraints};
pub use error::EngineError;
pub use freestay::{find_available_stays, first_available_stay, AvailableStay};
pub use pricing::{quote_price, PriceQuote};
pub use range::DateRange;
pub use records::{parse_booking_date, parse_timezone, BookingRecord, VenueRecord};
pub use selection::{CandidateSelection, SelectionState};
pub use submission::{prepare_submission, BookingRequest, SubmissionOutcome};
pub use validate::{
    evaluate_selection, validate_candidate_range, validate_candidate_start,
    validate_guest_count, SelectionEvaluation,
};
pub use verdict::{ValidationVerdict, Violation};
