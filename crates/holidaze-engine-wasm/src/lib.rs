//! WASM bindings for holidaze-engine.
//!
//! Exposes blocked-date lookup, selection evaluation, guest-count validation, pricing,
//! and submission preparation to the booking calendar via `wasm-bindgen`. Bookings and
//! venues cross the boundary in the booking API's own JSON shape (`dateFrom`/`dateTo`
//! strings); results come back as JSON strings.
//!
//! Booking timestamps carry an offset (`toISOString()` output), so exports that read
//! bookings take an optional IANA `timezone`: the venue's zone, in which each timestamp is
//! reduced to a calendar day. It defaults to UTC.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p holidaze-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/holidaze_engine_wasm.wasm
//! ```

use chrono::NaiveDate;
use chrono_tz::{Tz, UTC};
use holidaze_engine::records::{
    parse_booking_date, parse_bookings_json, parse_timezone, parse_venue_json,
};
use holidaze_engine::{
    BookingRequest, CandidateSelection, ExistingBooking, SelectionState, ValidationVerdict,
    VenueConstraints,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionDto {
    valid: bool,
    violation: Option<&'static str>,
    message: Option<String>,
    request: Option<BookingRequest>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Resolve the optional `timezone` argument; absent means UTC.
fn resolve_timezone(timezone: Option<&str>) -> Result<Tz, JsValue> {
    match timezone {
        Some(name) => parse_timezone(name).map_err(js_err),
        None => Ok(UTC),
    }
}

fn parse_date(s: &str, tz: Tz) -> Result<NaiveDate, JsValue> {
    parse_booking_date(s, tz).map_err(js_err)
}

fn parse_bookings(json: &str, tz: Tz) -> Result<Vec<ExistingBooking>, JsValue> {
    parse_bookings_json(json, tz).map_err(js_err)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// True if `date` is covered, inclusively, by any booking in `bookings_json`.
#[wasm_bindgen(js_name = "isDateBlocked")]
pub fn is_date_blocked(
    bookings_json: &str,
    date: &str,
    timezone: Option<String>,
) -> Result<bool, JsValue> {
    let tz = resolve_timezone(timezone.as_deref())?;
    let bookings = parse_bookings(bookings_json, tz)?;
    let date = parse_date(date, tz)?;
    Ok(holidaze_engine::is_date_blocked(date, &bookings))
}

/// Evaluate a (possibly partial) selection against the venue's bookings.
///
/// `start`, `end`, and `timezone` may be `undefined`. Returns
/// `{"verdict": {"valid", "violation"}, "quote": {"nights", "price_per_night", "total"} | null}`.
#[wasm_bindgen(js_name = "evaluateSelection")]
pub fn evaluate_selection(
    bookings_json: &str,
    price_per_night: f64,
    start: Option<String>,
    end: Option<String>,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let tz = resolve_timezone(timezone.as_deref())?;
    let bookings = parse_bookings(bookings_json, tz)?;
    let selection = CandidateSelection::new(
        start.as_deref().map(|s| parse_date(s, tz)).transpose()?,
        end.as_deref().map(|s| parse_date(s, tz)).transpose()?,
    );
    // Capacity plays no part in date evaluation.
    let constraints = VenueConstraints {
        max_guests: u32::MAX,
        price_per_night,
    };

    let evaluation = holidaze_engine::evaluate_selection(&selection, &bookings, &constraints);
    to_json(&evaluation)
}

/// Validate a guest count against the venue's capacity. Returns `{"valid", "violation"}`.
#[wasm_bindgen(js_name = "validateGuestCount")]
pub fn validate_guest_count(guests: u32, max_guests: u32) -> Result<String, JsValue> {
    let constraints = VenueConstraints {
        max_guests,
        price_per_night: 0.0,
    };
    let verdict: ValidationVerdict = holidaze_engine::validate_guest_count(guests, &constraints);
    to_json(&verdict)
}

/// Price a stay. Returns `{"nights", "price_per_night", "total"}`.
#[wasm_bindgen(js_name = "quotePrice")]
pub fn quote_price(start: &str, end: &str, price_per_night: f64) -> Result<String, JsValue> {
    let quote =
        holidaze_engine::quote_price(parse_date(start, UTC)?, parse_date(end, UTC)?, price_per_night);
    to_json(&quote)
}

/// Blocked dates between `from` and `to` as a JSON array of `YYYY-MM-DD` strings.
#[wasm_bindgen(js_name = "blockedDates")]
pub fn blocked_dates(
    bookings_json: &str,
    from: &str,
    to: &str,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let tz = resolve_timezone(timezone.as_deref())?;
    let bookings = parse_bookings(bookings_json, tz)?;
    let dates =
        holidaze_engine::blocked_dates_between(&bookings, parse_date(from, tz)?, parse_date(to, tz)?);
    to_json(&dates)
}

/// Validate a complete selection plus guest count against a venue document and, if
/// everything passes, return the booking request body to POST.
///
/// Returns `{"valid", "violation", "message", "request"}`; `request` is set only when
/// `valid` is true.
#[wasm_bindgen(js_name = "prepareSubmission")]
pub fn prepare_submission(
    venue_json: &str,
    start: &str,
    end: &str,
    guests: u32,
    timezone: Option<String>,
) -> Result<String, JsValue> {
    let tz = resolve_timezone(timezone.as_deref())?;
    let venue = parse_venue_json(venue_json).map_err(js_err)?;
    let bookings = venue.existing_bookings(tz).map_err(js_err)?;
    let constraints = venue.constraints();

    // Replay the two calendar clicks so the range goes through the same checks.
    let mut state = SelectionState::default();
    let mut verdict = state.pick_date(parse_date(start, tz)?, &bookings);
    if verdict.is_valid() {
        verdict = state.pick_date(parse_date(end, tz)?, &bookings);
    }

    let result = match verdict {
        ValidationVerdict::Invalid(violation) => Err(violation),
        ValidationVerdict::Valid => {
            holidaze_engine::prepare_submission(&state, guests, &venue.id, &bookings, &constraints)
        }
    };

    let dto = match result {
        Ok(request) => SubmissionDto {
            valid: true,
            violation: None,
            message: None,
            request: Some(request),
        },
        Err(violation) => SubmissionDto {
            valid: false,
            violation: Some(violation.code()),
            message: Some(violation.to_string()),
            request: None,
        },
    };
    to_json(&dto)
}
