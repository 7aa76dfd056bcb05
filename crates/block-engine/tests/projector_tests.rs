//! Tests for UTC time-of-day projection and range formatting.
//!
//! Stored times are UTC wall-clock; display times are the viewer's local
//! wall-clock. Every failure path must fall back to the normalized input,
//! never raise.

use block_engine::projector::{
    convert_time_of_day, convert_time_of_day_with, format_range, format_range_with,
    normalize_time, ZoneProvider,
};
use block_engine::error::{BlockError, Result};
use block_engine::types::DateInput;
use chrono::{DateTime, NaiveTime, Utc};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn iso(s: &str) -> DateInput {
    DateInput::from(s)
}

/// A provider that knows exactly one zone, pinned three hours behind UTC.
/// Proves the zone database is substitutable where no IANA data exists.
struct StubZones;

impl ZoneProvider for StubZones {
    fn project(&self, instant: DateTime<Utc>, zone: &str) -> Result<NaiveTime> {
        if zone == "Stub/MinusThree" {
            Ok((instant - chrono::Duration::hours(3)).time())
        } else {
            Err(BlockError::InvalidTimezone(zone.to_string()))
        }
    }
}

// ── Conversion ──────────────────────────────────────────────────────────────

#[test]
fn converts_utc_to_sao_paulo() {
    // São Paulo is UTC-3 year-round (no DST since 2019).
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("14:30"), Some("America/Sao_Paulo"));
    assert_eq!(got, "11:30");
}

#[test]
fn seconds_are_truncated_not_rounded() {
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("14:30:59"), Some("America/Sao_Paulo"));
    assert_eq!(got, "11:30");
}

#[test]
fn single_digit_components_are_zero_padded() {
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("9:5"), Some("UTC"));
    assert_eq!(got, "09:05");
}

#[test]
fn projection_is_dst_aware() {
    // London is UTC+1 in July, UTC+0 in January.
    let summer = convert_time_of_day(Some(&iso("2024-07-01")), Some("12:00"), Some("Europe/London"));
    assert_eq!(summer, "13:00");

    let winter = convert_time_of_day(Some(&iso("2024-01-15")), Some("12:00"), Some("Europe/London"));
    assert_eq!(winter, "12:00");
}

#[test]
fn day_rollover_shows_local_wall_clock_only() {
    // 20:00 UTC on Jan 15 is 05:00 on Jan 16 in Tokyo; only the time shows.
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("20:00"), Some("Asia/Tokyo"));
    assert_eq!(got, "05:00");
}

// ── Missing arguments ───────────────────────────────────────────────────────

#[test]
fn missing_zone_returns_time_unchanged() {
    // No conversion attempted: the raw value keeps its seconds.
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("14:30:25"), None);
    assert_eq!(got, "14:30:25");
}

#[test]
fn missing_date_returns_time_unchanged() {
    let got = convert_time_of_day(None, Some("14:30:25"), Some("America/Sao_Paulo"));
    assert_eq!(got, "14:30:25");
}

#[test]
fn missing_time_returns_empty_string() {
    let got = convert_time_of_day(Some(&iso("2024-01-15")), None, Some("America/Sao_Paulo"));
    assert_eq!(got, "");
}

// ── Fallbacks ───────────────────────────────────────────────────────────────

#[test]
fn unknown_zone_falls_back_to_normalized_time() {
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("14:30:25"), Some("Not/AZone"));
    assert_eq!(got, "14:30");
}

#[test]
fn invalid_date_falls_back_to_normalized_time() {
    let got = convert_time_of_day(Some(&iso("banana")), Some("14:30:25"), Some("UTC"));
    assert_eq!(got, "14:30");
}

#[test]
fn out_of_range_time_falls_back_lexically_normalized() {
    // "99:99" can never parse, but the fallback still shows the normalized
    // literal rather than failing to render.
    let got = convert_time_of_day(Some(&iso("2024-01-15")), Some("99:99:10"), Some("UTC"));
    assert_eq!(got, "99:99");
}

#[test]
fn normalize_time_is_lexical() {
    assert_eq!(normalize_time("14:30:25"), "14:30");
    assert_eq!(normalize_time("9:5"), "09:05");
    assert_eq!(normalize_time("noon"), "noon");
    assert_eq!(normalize_time(""), "");
}

// ── Injected providers ──────────────────────────────────────────────────────

#[test]
fn stub_provider_substitutes_for_the_zone_database() {
    let got = convert_time_of_day_with(
        &StubZones,
        Some(&iso("2024-01-15")),
        Some("14:30"),
        Some("Stub/MinusThree"),
    );
    assert_eq!(got, "11:30");
}

#[test]
fn stub_provider_failure_degrades_like_unknown_zone() {
    let got = convert_time_of_day_with(
        &StubZones,
        Some(&iso("2024-01-15")),
        Some("14:30:00"),
        Some("America/Sao_Paulo"),
    );
    assert_eq!(got, "14:30");
}

// ── Range formatting ────────────────────────────────────────────────────────

#[test]
fn formats_both_endpoints() {
    let got = format_range(Some(&iso("2024-01-15")), Some("09:00"), Some("17:00"), Some("UTC"));
    assert_eq!(got, "09:00 - 17:00");
}

#[test]
fn range_endpoints_are_converted_independently() {
    let got = format_range(
        Some(&iso("2024-01-15")),
        Some("12:00"),
        Some("14:00"),
        Some("America/Sao_Paulo"),
    );
    assert_eq!(got, "09:00 - 11:00");
}

#[test]
fn only_start_present_returns_start_alone() {
    let got = format_range(Some(&iso("2024-01-15")), Some("09:00"), None, Some("UTC"));
    assert_eq!(got, "09:00");
}

#[test]
fn only_end_present_returns_end_alone() {
    let got = format_range(Some(&iso("2024-01-15")), None, Some("17:00"), Some("UTC"));
    assert_eq!(got, "17:00");
}

#[test]
fn neither_endpoint_returns_empty() {
    let got = format_range(Some(&iso("2024-01-15")), None, None, Some("UTC"));
    assert_eq!(got, "");
}

#[test]
fn empty_string_endpoints_count_as_absent() {
    let got = format_range(Some(&iso("2024-01-15")), Some(""), Some("17:00"), Some("UTC"));
    assert_eq!(got, "17:00");
}

#[test]
fn range_with_unknown_zone_falls_back_both_sides() {
    let got = format_range(
        Some(&iso("2024-01-15")),
        Some("09:00:30"),
        Some("17:00:30"),
        Some("Not/AZone"),
    );
    assert_eq!(got, "09:00 - 17:00");
}

#[test]
fn midnight_crossing_is_not_corrected() {
    // 23:00 UTC converts to 08:00 next day in Tokyo while 01:00 converts to
    // 10:00 of the anchor day. The range is formatted as-is; the apparent
    // inversion is an accepted limitation.
    let got = format_range(
        Some(&iso("2024-01-15")),
        Some("23:00"),
        Some("01:00"),
        Some("Asia/Tokyo"),
    );
    assert_eq!(got, "08:00 - 10:00");
}

#[test]
fn range_respects_injected_provider() {
    let got = format_range_with(
        &StubZones,
        Some(&iso("2024-01-15")),
        Some("12:00"),
        Some("13:30"),
        Some("Stub/MinusThree"),
    );
    assert_eq!(got, "09:00 - 10:30");
}
