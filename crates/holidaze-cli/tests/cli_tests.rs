//! Integration tests for the `holidaze` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the check, blocked, free,
//! and quote subcommands through the actual binary, including stdin piping, file input,
//! and error handling.

// `run_json` and the tests below build the binary command through `Command::cargo_bin`,
// which newer assert_cmd releases flag as deprecated.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the venue.json fixture.
fn venue_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/venue.json")
}

/// Helper: read the venue.json fixture as a string.
fn venue_json() -> String {
    std::fs::read_to_string(venue_json_path()).expect("venue.json fixture must exist")
}

/// Helper: run the binary with `args` and parse stdout as JSON.
fn run_json(args: &[&str]) -> serde_json::Value {
    let output = Command::cargo_bin("holidaze")
        .unwrap()
        .args(args)
        .output()
        .expect("binary must run");
    assert!(output.status.success(), "command failed: {:?}", output);
    serde_json::from_slice(&output.stdout).expect("stdout must be valid JSON")
}

// ─────────────────────────────────────────────────────────────────────────────
// Check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_free_range_is_valid_and_priced() {
    // The 19th through the 24th is clear of every booking.
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--start",
        "2024-06-19",
        "--end",
        "2024-06-24",
    ]);

    assert_eq!(json["venue_id"], "5a1c7e2e-venue-seaside");
    assert_eq!(json["verdict"]["valid"], true);
    assert_eq!(json["quote"]["nights"], 5);
    assert_eq!(json["quote"]["total"], 500.0);
    assert!(json.get("request").is_none(), "no request without --guests");
}

#[test]
fn check_overlapping_range_reports_violation_and_exits_zero() {
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--start",
        "2024-06-08",
        "--end",
        "2024-06-11",
    ]);

    assert_eq!(json["verdict"]["valid"], false);
    assert_eq!(json["verdict"]["violation"], "range_overlaps_booking");
    assert!(json["quote"].is_null());
}

#[test]
fn check_blocked_start_only() {
    let json = run_json(&["check", "-i", venue_json_path(), "--start", "2024-06-15"]);

    assert_eq!(json["verdict"]["violation"], "date_already_booked");
}

#[test]
fn check_inverted_range_is_incomplete() {
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--start",
        "2024-06-24",
        "--end",
        "2024-06-20",
    ]);

    assert_eq!(json["verdict"]["violation"], "incomplete_selection");
}

#[test]
fn check_with_guests_emits_booking_request() {
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--start",
        "2024-06-19",
        "--end",
        "2024-06-24",
        "--guests",
        "2",
    ]);

    assert_eq!(json["guests"]["verdict"]["valid"], true);
    assert_eq!(json["request"]["dateFrom"], "2024-06-19T00:00:00.000Z");
    assert_eq!(json["request"]["dateTo"], "2024-06-24T00:00:00.000Z");
    assert_eq!(json["request"]["guests"], 2);
    assert_eq!(json["request"]["venueId"], "5a1c7e2e-venue-seaside");
    assert!(json.get("request_blocked_by").is_none());
}

#[test]
fn check_too_many_guests_withholds_request() {
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--start",
        "2024-06-19",
        "--end",
        "2024-06-24",
        "--guests",
        "5",
    ]);

    assert_eq!(json["verdict"]["valid"], true);
    assert_eq!(json["guests"]["verdict"]["violation"], "guest_count_out_of_range");
    assert_eq!(json["guests"]["max_guests"], 4);
    assert!(json.get("request").is_none());
    assert_eq!(json["request_blocked_by"], "guest_count_out_of_range");
}

#[test]
fn check_reads_venue_from_stdin() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args(["check", "--start", "2024-06-12"])
        .write_stdin(venue_json())
        .assert()
        .success()
        .stdout(predicate::str::contains("date_already_booked"));
}

#[test]
fn check_timezone_shifts_booking_days() {
    // In Los Angeles the July booking's UTC midnights fall on the 4th and 6th,
    // so the 7th becomes free.
    let json = run_json(&[
        "check",
        "-i",
        venue_json_path(),
        "--timezone",
        "America/Los_Angeles",
        "--start",
        "2024-07-07",
    ]);

    assert_eq!(json["verdict"]["valid"], true);
}

// ─────────────────────────────────────────────────────────────────────────────
// Blocked and free subcommands
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn blocked_merges_adjacent_bookings() {
    let json = run_json(&["blocked", "-i", venue_json_path()]);

    let ranges = json.as_array().expect("array of ranges");
    assert_eq!(ranges.len(), 2);
    assert_eq!(ranges[0]["start"], "2024-06-10");
    assert_eq!(ranges[0]["end"], "2024-06-18");
    assert_eq!(ranges[1]["start"], "2024-07-05");
    assert_eq!(ranges[1]["end"], "2024-07-07");
}

#[test]
fn blocked_window_lists_days() {
    let json = run_json(&[
        "blocked",
        "-i",
        venue_json_path(),
        "--from",
        "2024-07-01",
        "--to",
        "2024-07-31",
    ]);

    assert_eq!(
        json,
        serde_json::json!(["2024-07-05", "2024-07-06", "2024-07-07"])
    );
}

#[test]
fn blocked_from_without_to_is_rejected() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args(["blocked", "-i", venue_json_path(), "--from", "2024-07-01"])
        .assert()
        .failure();
}

#[test]
fn free_lists_gaps_in_june() {
    let json = run_json(&[
        "free",
        "-i",
        venue_json_path(),
        "--from",
        "2024-06-01",
        "--to",
        "2024-06-30",
    ]);

    let stays = json.as_array().expect("array of stays");
    assert_eq!(stays.len(), 2);
    assert_eq!(stays[0]["range"]["start"], "2024-06-01");
    assert_eq!(stays[0]["range"]["end"], "2024-06-09");
    assert_eq!(stays[0]["nights"], 8);
    assert_eq!(stays[1]["range"]["start"], "2024-06-19");
    assert_eq!(stays[1]["nights"], 11);
}

#[test]
fn free_inverted_window_fails() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args([
            "free",
            "-i",
            venue_json_path(),
            "--from",
            "2024-06-30",
            "--to",
            "2024-06-01",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --from/--to window"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Quote subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn quote_three_nights() {
    let json = run_json(&[
        "quote", "--start", "2024-07-01", "--end", "2024-07-04", "--price", "100",
    ]);

    assert_eq!(json["nights"], 3);
    assert_eq!(json["total"], 300.0);
}

#[test]
fn quote_same_day_is_one_night() {
    let json = run_json(&[
        "quote", "--start", "2024-07-01", "--end", "2024-07-01", "--price", "75.5",
    ]);

    assert_eq!(json["nights"], 1);
    assert_eq!(json["total"], 75.5);
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_file_fails_with_context() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args(["blocked", "-i", "/nonexistent/venue.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_venue_fails() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args(["check", "--start", "2024-06-01"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse venue JSON"));
}

#[test]
fn bad_date_fails() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args(["quote", "--start", "soon", "--end", "2024-07-01", "--price", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse date: soon"));
}

#[test]
fn unknown_timezone_fails() {
    Command::cargo_bin("holidaze")
        .unwrap()
        .args([
            "quote",
            "--timezone",
            "Nowhere/Special",
            "--start",
            "2024-07-01",
            "--end",
            "2024-07-02",
            "--price",
            "10",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse --timezone"));
}
