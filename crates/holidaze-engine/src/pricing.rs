//! Nights and total price for a stay.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Price breakdown for a check-in/check-out pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceQuote {
    pub nights: i64,
    pub price_per_night: f64,
    pub total: f64,
}

/// Quote a stay from `start` (check-in) to `end` (check-out).
///
/// `nights` is the day difference `end - start`, never less than 1: a same-day or
/// inverted pair is charged one night. `total = nights * price_per_night`.
///
/// Pricing is independent of availability. A quote says nothing about whether the dates
/// are free; validate them separately.
pub fn quote_price(start: NaiveDate, end: NaiveDate, price_per_night: f64) -> PriceQuote {
    let nights = (end - start).num_days().max(1);
    PriceQuote {
        nights,
        price_per_night,
        total: nights as f64 * price_per_night,
    }
}
