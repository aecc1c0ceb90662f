//! JSON records exchanged with the booking API.
//!
//! The API stores check-in and check-out as ISO-8601 strings (`dateFrom` / `dateTo`).
//! These are reduced to calendar dates before the engine sees them; an instant with an
//! offset is first moved into the venue's timezone so that a booking starting at local
//! midnight does not land on the previous day.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::booking::{ExistingBooking, VenueConstraints};
use crate::error::{EngineError, Result};
use crate::range::DateRange;

/// A booking as the API returns it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    pub id: String,
    pub date_from: String,
    pub date_to: String,
    #[serde(default)]
    pub guests: u32,
}

impl BookingRecord {
    pub fn to_booking(&self, tz: Tz) -> Result<ExistingBooking> {
        let start = parse_booking_date(&self.date_from, tz)?;
        let end = parse_booking_date(&self.date_to, tz)?;
        Ok(ExistingBooking::new(
            self.id.clone(),
            DateRange::new(start, end)?,
            self.guests,
        ))
    }
}

/// The venue fields the engine needs, plus its bookings when requested with them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VenueRecord {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    pub price: f64,
    pub max_guests: u32,
    #[serde(default)]
    pub bookings: Vec<BookingRecord>,
}

impl VenueRecord {
    pub fn constraints(&self) -> VenueConstraints {
        VenueConstraints {
            max_guests: self.max_guests,
            price_per_night: self.price,
        }
    }

    pub fn existing_bookings(&self, tz: Tz) -> Result<Vec<ExistingBooking>> {
        self.bookings.iter().map(|b| b.to_booking(tz)).collect()
    }
}

/// The API wraps single resources in `{"data": ...}`; accept either shape.
#[derive(Deserialize)]
#[serde(untagged)]
enum VenueDocument {
    Envelope { data: VenueRecord },
    Bare(VenueRecord),
}

/// Parse a venue document, enveloped or bare.
pub fn parse_venue_json(json: &str) -> Result<VenueRecord> {
    let doc: VenueDocument = serde_json::from_str(json)?;
    Ok(match doc {
        VenueDocument::Envelope { data } => data,
        VenueDocument::Bare(venue) => venue,
    })
}

/// Parse a JSON array of booking records into engine bookings.
pub fn parse_bookings_json(json: &str, tz: Tz) -> Result<Vec<ExistingBooking>> {
    let records: Vec<BookingRecord> = serde_json::from_str(json)?;
    records.iter().map(|r| r.to_booking(tz)).collect()
}

/// Parse an IANA timezone name such as `Europe/Oslo`.
pub fn parse_timezone(name: &str) -> Result<Tz> {
    name.parse()
        .map_err(|_| EngineError::InvalidTimezone(name.to_string()))
}

/// Reduce an API date string to a calendar date.
///
/// Accepted forms:
/// - RFC 3339 with offset (`2024-06-10T00:00:00.000Z`), converted into `tz` first
/// - naive datetime (`2024-06-10T14:00:00`, fractional seconds allowed), taken as-is
/// - plain date (`2024-06-10`)
pub fn parse_booking_date(s: &str, tz: Tz) -> Result<NaiveDate> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&tz).date_naive());
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Ok(ndt.date());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidDate(format!("'{}': {}", s, e)))
}
