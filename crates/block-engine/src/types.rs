//! Input types shared by the resolver and projector.
//!
//! Block records arrive from externally bound data (a `bloqueios` table or
//! an editor binding), so every optional field is presence-tagged: a field
//! that is present but unparsable is `Invalid`, never silently absent.
//! Fields the engine does not know about are carried through untouched as
//! opaque metadata.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A calendar date input: either a structured date or an ISO-8601
/// `YYYY-MM-DD` string. The two forms are interchangeable everywhere a date
/// is accepted.
///
/// The `Other` variant absorbs any remaining JSON value (numbers, objects)
/// so that a malformed field makes that field invalid rather than failing
/// deserialization of the whole record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DateInput {
    Date(NaiveDate),
    Iso(String),
    Other(Value),
}

impl DateInput {
    /// Parse this input into a presence-tagged calendar date.
    pub fn parse(&self) -> ParsedDate {
        match self {
            Self::Date(d) => ParsedDate::Valid(*d),
            Self::Iso(s) => parse_iso(s).map_or(ParsedDate::Invalid, ParsedDate::Valid),
            Self::Other(_) => ParsedDate::Invalid,
        }
    }
}

impl From<NaiveDate> for DateInput {
    fn from(date: NaiveDate) -> Self {
        Self::Date(date)
    }
}

impl From<&str> for DateInput {
    fn from(s: &str) -> Self {
        Self::Iso(s.to_string())
    }
}

fn parse_iso(s: &str) -> Option<NaiveDate> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    // Datetime strings ("2024-01-15T10:00:00") carry the date in the first
    // ten characters.
    s.get(..10)
        .and_then(|prefix| NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok())
}

/// Outcome of parsing an optional date field.
///
/// `Invalid` (present but unparsable) is distinct from `Absent`: a range
/// with an invalid endpoint is ambiguous and must never match, while a
/// range with an absent end falls back to single-day semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedDate {
    Valid(NaiveDate),
    Invalid,
    Absent,
}

/// A set of blocked weekdays, `0` = Sunday through `6` = Saturday.
///
/// Deserializes from a JSON array of integers. Out-of-range entries are
/// dropped rather than rejected, since the set is bound from loosely-typed
/// editor configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, weekday: u8) {
        if weekday <= 6 {
            self.0 |= 1 << weekday;
        }
    }

    pub fn contains(self, weekday: u8) -> bool {
        weekday <= 6 && self.0 & (1 << weekday) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<u8> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::empty();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl<'de> Deserialize<'de> for WeekdaySet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let days = Vec::<i64>::deserialize(deserializer)?;
        Ok(days
            .into_iter()
            .filter_map(|d| u8::try_from(d).ok())
            .collect())
    }
}

/// A persisted block record: an explicit date or date-range marking days
/// unavailable, optionally annotated with a sub-day time window.
///
/// Field names follow the persisted schema (`bloqueios` table): start date,
/// end date, full-day flag, start time, end time. Any other fields land in
/// `extra` and are serialized back unchanged when the block surfaces in a
/// verdict. The time-of-day fields annotate a matched day for display; they
/// never gate whether the day matches.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpecificBlock {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_inicio: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_fim: Option<DateInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dia_completo: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horario_inicio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub horario_fim: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SpecificBlock {
    /// Presence-tagged parse of the start-date field.
    pub fn start(&self) -> ParsedDate {
        parse_field(self.data_inicio.as_ref())
    }

    /// Presence-tagged parse of the end-date field.
    pub fn end(&self) -> ParsedDate {
        parse_field(self.data_fim.as_ref())
    }
}

fn parse_field(field: Option<&DateInput>) -> ParsedDate {
    field.map_or(ParsedDate::Absent, DateInput::parse)
}
