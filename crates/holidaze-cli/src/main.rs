//! `holidaze` CLI — check venue availability, selections, and prices from the command line.
//!
//! Venue input is the booking API's venue JSON (bare or wrapped in `{"data": ...}`),
//! fetched with its bookings included.
//!
//! ## Usage
//!
//! ```sh
//! # Evaluate a check-in/check-out selection (venue JSON on stdin)
//! curl -s "$API/holidaze/venues/$ID?_bookings=true" | holidaze check --start 2024-06-16 --end 2024-06-20
//!
//! # Same, with a guest count; prints the booking request body when everything passes
//! holidaze check -i venue.json --start 2024-06-16 --end 2024-06-20 --guests 2
//!
//! # Merged blocked ranges, or per-day blocked dates inside a window
//! holidaze blocked -i venue.json
//! holidaze blocked -i venue.json --from 2024-06-01 --to 2024-06-30
//!
//! # Free stays of at least three nights in June
//! holidaze free -i venue.json --from 2024-06-01 --to 2024-06-30 --min-nights 3
//!
//! # Price a stay without a venue file
//! holidaze quote --start 2024-07-01 --end 2024-07-04 --price 100
//! ```
//!
//! An invalid selection is a normal answer, not a failure: `check` exits 0 and reports the
//! violation in its JSON. Only unreadable input exits non-zero.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use holidaze_engine::records::{parse_booking_date, parse_timezone, parse_venue_json};
use holidaze_engine::{
    blocked_dates_between, evaluate_selection, find_available_stays, merge_blocked_ranges,
    prepare_submission, quote_price, validate_guest_count, BookingRequest, CandidateSelection,
    DateRange, SelectionEvaluation, SelectionState, ValidationVerdict, VenueRecord, Violation,
};
use serde::Serialize;
use std::io::{self, Read};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "holidaze",
    version,
    about = "Holidaze venue availability and booking checks"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA timezone used to reduce booking timestamps to calendar days
    #[arg(long, global = true, default_value = "UTC")]
    timezone: String,

    /// Log engine decisions to stderr (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a date selection (and optionally a guest count) against a venue
    Check {
        /// Venue JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Check-in date
        #[arg(long)]
        start: String,
        /// Check-out date
        #[arg(long)]
        end: Option<String>,
        /// Number of guests
        #[arg(long)]
        guests: Option<u32>,
    },
    /// List blocked dates of a venue
    Blocked {
        /// Venue JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First day of the calendar window (requires --to)
        #[arg(long, requires = "to")]
        from: Option<String>,
        /// Last day of the calendar window (requires --from)
        #[arg(long, requires = "from")]
        to: Option<String>,
    },
    /// List free stays of a venue inside a window
    Free {
        /// Venue JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// First day of the window
        #[arg(long)]
        from: String,
        /// Last day of the window
        #[arg(long)]
        to: String,
        /// Drop free runs shorter than this many nights
        #[arg(long, default_value_t = 1)]
        min_nights: i64,
    },
    /// Price a stay
    Quote {
        /// Check-in date
        #[arg(long)]
        start: String,
        /// Check-out date
        #[arg(long)]
        end: String,
        /// Price per night
        #[arg(long)]
        price: f64,
    },
}

/// Output of `check`.
#[derive(Serialize)]
struct CheckReport {
    venue_id: String,
    selection: CandidateSelection,
    #[serde(flatten)]
    evaluation: SelectionEvaluation,
    #[serde(skip_serializing_if = "Option::is_none")]
    guests: Option<GuestReport>,
    /// Set only when dates and guests all pass.
    #[serde(skip_serializing_if = "Option::is_none")]
    request: Option<BookingRequest>,
    /// Why a request was withheld for dates that were valid on their own.
    #[serde(skip_serializing_if = "Option::is_none")]
    request_blocked_by: Option<Violation>,
}

#[derive(Serialize)]
struct GuestReport {
    count: u32,
    max_guests: u32,
    verdict: ValidationVerdict,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let tz = parse_timezone(&cli.timezone).context("Failed to parse --timezone")?;

    match cli.command {
        Commands::Check {
            input,
            start,
            end,
            guests,
        } => {
            let venue = read_venue(input.as_deref())?;
            let selection = CandidateSelection::new(
                Some(parse_date(&start, tz)?),
                end.as_deref().map(|e| parse_date(e, tz)).transpose()?,
            );
            let report = check(&venue, selection, guests, tz)?;
            print_json(&report)?;
        }
        Commands::Blocked { input, from, to } => {
            let venue = read_venue(input.as_deref())?;
            let bookings = venue
                .existing_bookings(tz)
                .context("Failed to read venue bookings")?;
            match (from, to) {
                (Some(from), Some(to)) => {
                    let dates =
                        blocked_dates_between(&bookings, parse_date(&from, tz)?, parse_date(&to, tz)?);
                    print_json(&dates)?;
                }
                _ => print_json(&merge_blocked_ranges(&bookings))?,
            }
        }
        Commands::Free {
            input,
            from,
            to,
            min_nights,
        } => {
            let venue = read_venue(input.as_deref())?;
            let bookings = venue
                .existing_bookings(tz)
                .context("Failed to read venue bookings")?;
            let window = DateRange::new(parse_date(&from, tz)?, parse_date(&to, tz)?)
                .context("Invalid --from/--to window")?;
            print_json(&find_available_stays(&bookings, window, min_nights))?;
        }
        Commands::Quote { start, end, price } => {
            let quote = quote_price(parse_date(&start, tz)?, parse_date(&end, tz)?, price);
            print_json(&quote)?;
        }
    }

    Ok(())
}

/// Evaluate the selection, then, if a guest count was given, check it and try to build
/// the booking request.
fn check(
    venue: &VenueRecord,
    selection: CandidateSelection,
    guests: Option<u32>,
    tz: Tz,
) -> Result<CheckReport> {
    let bookings = venue
        .existing_bookings(tz)
        .context("Failed to read venue bookings")?;
    let constraints = venue.constraints();
    debug!(venue = %venue.id, bookings = bookings.len(), "checking selection");

    let evaluation = evaluate_selection(&selection, &bookings, &constraints);

    let guests_report = guests.map(|count| GuestReport {
        count,
        max_guests: constraints.max_guests,
        verdict: validate_guest_count(count, &constraints),
    });

    let submission = match (guests, selection.start, selection.end) {
        (Some(count), Some(start), Some(end)) if evaluation.verdict.is_valid() => {
            let range = DateRange::new(start, end)?;
            let state = SelectionState::Complete { range };
            Some(prepare_submission(&state, count, &venue.id, &bookings, &constraints))
        }
        _ => None,
    };
    let (request, request_blocked_by) = match submission {
        Some(Ok(request)) => (Some(request), None),
        Some(Err(violation)) => {
            debug!(%violation, "booking request withheld");
            (None, Some(violation))
        }
        None => (None, None),
    };

    Ok(CheckReport {
        venue_id: venue.id.clone(),
        selection,
        evaluation,
        guests: guests_report,
        request,
        request_blocked_by,
    })
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(io::stderr)
        .init();
}

fn parse_date(s: &str, tz: Tz) -> Result<NaiveDate> {
    parse_booking_date(s, tz).with_context(|| format!("Failed to parse date: {}", s))
}

fn read_venue(path: Option<&str>) -> Result<VenueRecord> {
    let json = read_input(path)?;
    parse_venue_json(&json).context("Failed to parse venue JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let pretty = serde_json::to_string_pretty(value)?;
    println!("{}", pretty);
    Ok(())
}
