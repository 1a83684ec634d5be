//! Calendar dates and raw-date normalization.
//!
//! A `CalendarDate` is a day, nothing more: no time of day, no offset. Every
//! accepted raw representation of the same day normalizes to a byte-identical
//! `"YYYY-MM-DD"` key, which is the only thing bucketing and charting ever
//! compare.

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::{CalendarError, CalendarResult};

pub use chrono::Weekday;

/// A day-granularity date in a single fixed reference frame.
///
/// Equality, ordering, and hashing consider year, month, and day only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build from explicit components, rejecting impossible days.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CalendarResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| {
                CalendarError::parse(
                    format!("{year:04}-{month:02}-{day:02}"),
                    "no such calendar day",
                )
            })
    }

    /// Normalize a raw date string.
    ///
    /// Accepts:
    /// - `YYYY-MM-DD` (passes through)
    /// - anything with a `T` separator (only the date part is parsed; the
    ///   time and offset are ignored rather than converted, so a midnight-UTC
    ///   datetime can never shift into the neighbouring day)
    /// - `DD/MM/YYYY`
    ///
    /// Anything else fails with [`CalendarError::DateParse`] naming the raw
    /// input. There is deliberately no "Invalid Date"-style sentinel.
    pub fn parse(raw: &str) -> CalendarResult<Self> {
        let s = raw.trim();
        if s.is_empty() {
            return Err(CalendarError::parse(raw, "empty date string"));
        }
        if let Some((date_part, _time_part)) = s.split_once('T') {
            return NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
                .map(Self)
                .map_err(|e| CalendarError::parse(raw, e.to_string()));
        }
        if s.contains('/') {
            return NaiveDate::parse_from_str(s, "%d/%m/%Y")
                .map(Self)
                .map_err(|e| CalendarError::parse(raw, e.to_string()));
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| CalendarError::parse(raw, e.to_string()))
    }

    /// The current date in the system's local calendar.
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    pub fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn as_naive(&self) -> NaiveDate {
        self.0
    }

    /// The canonical `"YYYY-MM-DD"` key used for equality and map indexing.
    pub fn key(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// This date shifted by a signed number of days.
    pub fn add_days(&self, days: i64) -> CalendarResult<Self> {
        chrono::Duration::try_days(days)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
            .ok_or_else(|| {
                CalendarError::InvariantViolation(format!(
                    "date arithmetic out of range: {} + {days} days",
                    self.key()
                ))
            })
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for CalendarDate {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.key())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        CalendarDate::parse(&raw).map_err(serde::de::Error::custom)
    }
}

impl schemars::JsonSchema for CalendarDate {
    fn schema_name() -> std::borrow::Cow<'static, str> {
        std::borrow::Cow::Borrowed("CalendarDate")
    }

    fn json_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
        schemars::json_schema!({
            "type": "string",
            "format": "date"
        })
    }
}

/// Signed whole days from `start` to `end` (positive when `end` is later).
pub fn days_between(start: CalendarDate, end: CalendarDate) -> i64 {
    end.0.signed_duration_since(start.0).num_days()
}

/// Normalize any accepted raw date string to its canonical `"YYYY-MM-DD"` key.
pub fn normalize_date_key(raw: &str) -> CalendarResult<String> {
    CalendarDate::parse(raw).map(|d| d.key())
}

/// A record's date exactly as the data store delivered it: either a full
/// timestamp (e.g. a `timestamptz` column) or one of the accepted textual
/// forms. Records are read-only input; normalization never mutates them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(untagged)]
pub enum RawDate {
    /// A datetime carrying a UTC offset (RFC 3339 on the wire).
    Timestamp(DateTime<FixedOffset>),
    /// `YYYY-MM-DD`, a `T`-separated datetime, or `DD/MM/YYYY`.
    Text(String),
}

impl RawDate {
    /// Normalize to a [`CalendarDate`].
    ///
    /// Timestamps contribute their local wall-clock fields (`naive_local`),
    /// never their UTC instant: `2025-09-01T23:30:00-07:00` is September 1st
    /// even though the instant falls on September 2nd in UTC.
    pub fn normalize(&self) -> CalendarResult<CalendarDate> {
        match self {
            RawDate::Timestamp(ts) => Ok(CalendarDate::from_naive(ts.naive_local().date())),
            RawDate::Text(s) => CalendarDate::parse(s),
        }
    }
}

impl From<&str> for RawDate {
    fn from(s: &str) -> Self {
        RawDate::Text(s.to_string())
    }
}

impl From<String> for RawDate {
    fn from(s: String) -> Self {
        RawDate::Text(s)
    }
}

impl From<CalendarDate> for RawDate {
    fn from(date: CalendarDate) -> Self {
        RawDate::Text(date.key())
    }
}

impl From<DateTime<FixedOffset>> for RawDate {
    fn from(ts: DateTime<FixedOffset>) -> Self {
        RawDate::Timestamp(ts)
    }
}

impl From<DateTime<Utc>> for RawDate {
    fn from(ts: DateTime<Utc>) -> Self {
        RawDate::Timestamp(ts.fixed_offset())
    }
}

impl From<DateTime<Local>> for RawDate {
    fn from(ts: DateTime<Local>) -> Self {
        RawDate::Timestamp(ts.fixed_offset())
    }
}
