//! Week and month period boundaries.
//!
//! A week is Monday through Sunday, always. The structural invariant is
//! re-checked on every call rather than trusted: a violated boundary is a
//! logic defect to surface, not something to patch per-date.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::date::{CalendarDate, Weekday, days_between};
use crate::{CalendarError, CalendarResult};

/// The kind of reporting period a chart or summary covers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PeriodKind {
    Week,
    Month,
}

/// An inclusive calendar-day range.
///
/// For week periods `start` is always a Monday, `end` always the Sunday six
/// days later.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PeriodBoundary {
    pub start: CalendarDate,
    pub end: CalendarDate,
}

impl PeriodBoundary {
    pub fn contains(&self, date: CalendarDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days in the period, both ends included.
    pub fn day_count(&self) -> i64 {
        days_between(self.start, self.end) + 1
    }

    /// Every day of the period in ascending order.
    pub fn days(&self) -> impl Iterator<Item = CalendarDate> {
        let start = self.start.as_naive();
        let end = self.end.as_naive();
        (0..=end.signed_duration_since(start).num_days())
            .map(move |i| CalendarDate::from_naive(start + chrono::Duration::days(i)))
    }
}

/// The Monday–Sunday week containing `reference`.
pub fn week_period(reference: CalendarDate) -> CalendarResult<PeriodBoundary> {
    let days_since_monday = i64::from(reference.weekday().num_days_from_monday());
    let start = reference.add_days(-days_since_monday)?;
    let end = start.add_days(6)?;
    let boundary = PeriodBoundary { start, end };
    check_week_invariants(&boundary)?;
    tracing::debug!(
        reference = %reference,
        start = %boundary.start,
        end = %boundary.end,
        "computed week period"
    );
    Ok(boundary)
}

/// The calendar month containing `reference`: first day through last day,
/// the latter computed as the day before the following month's first.
pub fn month_period(reference: CalendarDate) -> CalendarResult<PeriodBoundary> {
    let start = CalendarDate::from_ymd(reference.year(), reference.month(), 1)?;
    let next_month_start = if reference.month() == 12 {
        CalendarDate::from_ymd(reference.year() + 1, 1, 1)?
    } else {
        CalendarDate::from_ymd(reference.year(), reference.month() + 1, 1)?
    };
    let end = next_month_start.add_days(-1)?;
    Ok(PeriodBoundary { start, end })
}

/// Boundary of the period of `kind` containing `reference`.
pub fn period_for(kind: PeriodKind, reference: CalendarDate) -> CalendarResult<PeriodBoundary> {
    match kind {
        PeriodKind::Week => week_period(reference),
        PeriodKind::Month => month_period(reference),
    }
}

/// The Monday–Sunday week containing today's local date.
pub fn this_week() -> CalendarResult<PeriodBoundary> {
    week_period(CalendarDate::today())
}

/// The calendar month containing today's local date.
pub fn this_month() -> CalendarResult<PeriodBoundary> {
    month_period(CalendarDate::today())
}

/// Structural guarantee for week boundaries, checked on every call (release
/// builds included).
fn check_week_invariants(boundary: &PeriodBoundary) -> CalendarResult<()> {
    if boundary.start.weekday() != Weekday::Mon {
        return Err(CalendarError::InvariantViolation(format!(
            "week start {} is a {:?}, expected Monday",
            boundary.start,
            boundary.start.weekday()
        )));
    }
    if boundary.end.weekday() != Weekday::Sun {
        return Err(CalendarError::InvariantViolation(format!(
            "week end {} is a {:?}, expected Sunday",
            boundary.end,
            boundary.end.weekday()
        )));
    }
    if days_between(boundary.start, boundary.end) != 6 {
        return Err(CalendarError::InvariantViolation(format!(
            "week {}..{} does not span 6 days",
            boundary.start, boundary.end
        )));
    }
    Ok(())
}
