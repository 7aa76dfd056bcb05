//! UTC time-of-day projection into a viewer's timezone.
//!
//! Stored times are UTC wall-clock regardless of where they originated; a
//! time becomes an instant only when anchored to the cell's date under that
//! assumption. Zone lookup goes through the [`ZoneProvider`] trait so
//! environments without a full zone database can substitute a stub.
//!
//! Every function here degrades instead of failing: on any error the
//! normalized, unconverted time is returned and an advisory is logged.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::{BlockError, Result};
use crate::types::{DateInput, ParsedDate};

/// Injected timezone capability: projects a UTC instant into a zone's local
/// wall-clock time.
pub trait ZoneProvider {
    /// # Errors
    ///
    /// Returns [`BlockError::InvalidTimezone`] when `zone` is unknown to
    /// this provider.
    fn project(&self, instant: DateTime<Utc>, zone: &str) -> Result<NaiveTime>;
}

/// The default provider, backed by the bundled `chrono-tz` IANA database.
#[derive(Debug, Clone, Copy, Default)]
pub struct TzDatabase;

impl ZoneProvider for TzDatabase {
    fn project(&self, instant: DateTime<Utc>, zone: &str) -> Result<NaiveTime> {
        let tz: Tz = zone
            .parse()
            .map_err(|_| BlockError::InvalidTimezone(zone.to_string()))?;
        Ok(instant.with_timezone(&tz).time())
    }
}

/// Normalize a raw time string to `HH:mm`.
///
/// A seconds component is truncated (never rounded) and both remaining
/// components are zero-padded. Normalization is purely lexical, so an
/// out-of-range value like `"99:99"` survives for the fallback path; a
/// string without a colon is returned as-is.
pub fn normalize_time(time: &str) -> String {
    let mut parts = time.split(':');
    match (parts.next(), parts.next()) {
        (Some(h), Some(m)) => format!("{:0>2}:{:0>2}", h, m),
        _ => time.to_string(),
    }
}

/// Convert a UTC-stored `HH:mm[:ss]` time to `zone`'s local `HH:mm`,
/// anchored to `date`, through the given provider.
///
/// Missing arguments short-circuit: the raw `time` comes back unchanged
/// (empty string when absent), with no conversion attempted. Any failure —
/// unparsable date or time, unknown zone — falls back to the normalized
/// `HH:mm` without conversion; the call never raises.
pub fn convert_time_of_day_with(
    zones: &dyn ZoneProvider,
    date: Option<&DateInput>,
    time: Option<&str>,
    zone: Option<&str>,
) -> String {
    let (Some(date), Some(time), Some(zone)) = (date, time, zone) else {
        return time.unwrap_or_default().to_string();
    };

    let normalized = normalize_time(time);

    match project_instant(zones, date, &normalized, zone) {
        Ok(local) => local.format("%H:%M").to_string(),
        Err(e) => {
            log::warn!("time conversion failed ({}), showing unconverted time", e);
            normalized
        }
    }
}

fn project_instant(
    zones: &dyn ZoneProvider,
    date: &DateInput,
    normalized: &str,
    zone: &str,
) -> Result<NaiveTime> {
    let ParsedDate::Valid(day) = date.parse() else {
        return Err(BlockError::InvalidDate(format!("{:?}", date)));
    };
    let time = NaiveTime::parse_from_str(normalized, "%H:%M")
        .map_err(|_| BlockError::InvalidTime(normalized.to_string()))?;

    // The stored wall-clock value is declared to be UTC; only then does it
    // become an instant.
    let instant = Utc.from_utc_datetime(&day.and_time(time));
    zones.project(instant, zone)
}

/// Format a converted time range for display.
///
/// Each present endpoint is converted independently, anchored to the same
/// `date` — a window crossing midnight is not detected or corrected. Both
/// present gives `"{start} - {end}"`, one present gives that value alone,
/// neither gives `""`.
pub fn format_range_with(
    zones: &dyn ZoneProvider,
    date: Option<&DateInput>,
    start_time: Option<&str>,
    end_time: Option<&str>,
    zone: Option<&str>,
) -> String {
    let start_time = start_time.filter(|t| !t.is_empty());
    let end_time = end_time.filter(|t| !t.is_empty());

    let start = start_time.map(|t| convert_time_of_day_with(zones, date, Some(t), zone));
    let end = end_time.map(|t| convert_time_of_day_with(zones, date, Some(t), zone));

    match (start, end) {
        (Some(s), Some(e)) => format!("{} - {}", s, e),
        (Some(s), None) => s,
        (None, Some(e)) => e,
        (None, None) => String::new(),
    }
}

/// [`convert_time_of_day_with`] using the bundled [`TzDatabase`].
pub fn convert_time_of_day(
    date: Option<&DateInput>,
    time: Option<&str>,
    zone: Option<&str>,
) -> String {
    convert_time_of_day_with(&TzDatabase, date, time, zone)
}

/// [`format_range_with`] using the bundled [`TzDatabase`].
pub fn format_range(
    date: Option<&DateInput>,
    start_time: Option<&str>,
    end_time: Option<&str>,
    zone: Option<&str>,
) -> String {
    format_range_with(&TzDatabase, date, start_time, end_time, zone)
}
