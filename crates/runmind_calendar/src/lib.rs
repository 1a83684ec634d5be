//! Calendar-date normalization, week/month period boundaries, and per-day
//! record bucketing for RunMind reports.
//!
//! Everything in this crate is a pure, synchronous function over its inputs.
//! The data store and the charting surface live elsewhere; this crate only
//! guarantees that a record stamped with any accepted representation of a
//! calendar day lands in that day's bucket, every time.

use thiserror::Error;

pub mod bucket;
pub mod date;
pub mod period;

pub use bucket::{DayBucket, bucketize, bucketize_filtered};
pub use date::{CalendarDate, RawDate, days_between, normalize_date_key};
pub use period::{
    PeriodBoundary, PeriodKind, month_period, period_for, this_month, this_week, week_period,
};

/// Calendar errors. None of these are recoverable inside this crate: there
/// are no fallback dates, no forced weekdays, no silent corrections. Callers
/// own retry and resolution policy.
#[derive(Debug, Error)]
pub enum CalendarError {
    /// A raw date value could not be normalized. Carries the offending input
    /// verbatim; never defaulted to "today" or an epoch sentinel.
    #[error("unparseable date {raw:?}: {reason}")]
    DateParse { raw: String, reason: String },

    /// A computed period failed its structural guarantee. Indicates a logic
    /// defect at the boundary computation, fatal for the call.
    #[error("period invariant violated: {0}")]
    InvariantViolation(String),

    /// Two in-period records normalized to the same calendar day. Carries the
    /// positions of both records in the input slice so the caller can decide
    /// (keep newest, merge, reject).
    #[error("records at positions {first_index} and {second_index} both fall on {date}")]
    DuplicateRecord {
        date: String,
        first_index: usize,
        second_index: usize,
    },
}

impl CalendarError {
    pub(crate) fn parse(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        CalendarError::DateParse {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
