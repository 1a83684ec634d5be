//! The combined day-by-day view a week screen renders: each calendar day
//! with its training session and wellness check-in side by side.

use schemars::JsonSchema;
use serde::Serialize;

use runmind_calendar::{CalendarDate, PeriodBoundary, PeriodKind, bucketize, period_for, week_period};

use crate::error::{ReportResult, upgrade_checkin_collision, upgrade_session_collision};
use crate::types::{CheckIn, TrainingSession};

/// One calendar day with whatever landed on it.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct DayOverview {
    pub date: CalendarDate,
    pub session: Option<TrainingSession>,
    pub check_in: Option<CheckIn>,
}

/// A full period, one [`DayOverview`] per calendar day in ascending order.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct PeriodOverview {
    pub period: PeriodBoundary,
    pub days: Vec<DayOverview>,
}

/// Overview of the Monday–Sunday week containing `reference`.
///
/// Sessions and check-ins are bucketized against the same boundary with the
/// same canonical keys, so both sides of a day always share a column.
pub fn week_overview(
    reference: CalendarDate,
    sessions: &[TrainingSession],
    checkins: &[CheckIn],
) -> ReportResult<PeriodOverview> {
    let period = week_period(reference)?;
    overview(period, sessions, checkins)
}

/// Overview of the period of `kind` containing `reference`.
pub fn period_overview(
    kind: PeriodKind,
    reference: CalendarDate,
    sessions: &[TrainingSession],
    checkins: &[CheckIn],
) -> ReportResult<PeriodOverview> {
    let period = period_for(kind, reference)?;
    overview(period, sessions, checkins)
}

fn overview(
    period: PeriodBoundary,
    sessions: &[TrainingSession],
    checkins: &[CheckIn],
) -> ReportResult<PeriodOverview> {
    let session_buckets = bucketize(&period, sessions, |s| s.date.clone())
        .map_err(|e| upgrade_session_collision(sessions, e))?;
    let checkin_buckets = bucketize(&period, checkins, |c| c.date.clone())
        .map_err(|e| upgrade_checkin_collision(checkins, e))?;

    let days: Vec<DayOverview> = session_buckets
        .into_iter()
        .zip(checkin_buckets)
        .map(|(session_bucket, checkin_bucket)| DayOverview {
            date: session_bucket.date,
            session: session_bucket.record,
            check_in: checkin_bucket.record,
        })
        .collect();

    tracing::debug!(
        start = %period.start,
        end = %period.end,
        sessions = days.iter().filter(|d| d.session.is_some()).count(),
        check_ins = days.iter().filter(|d| d.check_in.is_some()).count(),
        "assembled period overview"
    );

    Ok(PeriodOverview { period, days })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SessionStatus;
    use runmind_calendar::RawDate;

    fn session(id: &str, date: &str) -> TrainingSession {
        TrainingSession {
            id: Some(id.into()),
            date: RawDate::from(date),
            status: SessionStatus::Planned,
            sport: None,
            distance_km: Some(10.0),
            duration_secs: None,
            training_load: None,
            rpe: None,
            notes: None,
        }
    }

    fn checkin(id: &str, date: &str) -> CheckIn {
        CheckIn {
            id: Some(id.into()),
            date: RawDate::from(date),
            sleep_secs: Some(28800.0),
            sleep_quality: Some(4.0),
            motivation: Some(3.0),
            fatigue: None,
            stress: None,
            resting_hr: None,
            soreness: None,
            notes: None,
        }
    }

    #[test]
    fn session_and_checkin_share_the_monday_column() {
        // The regression that motivated this crate: a Monday session stamped
        // as midnight-UTC and a Monday check-in stamped as a plain date must
        // land in the same column.
        let reference = CalendarDate::parse("2025-09-01").expect("date");
        let out = week_overview(
            reference,
            &[session("s1", "2025-09-01T00:00:00.000Z")],
            &[checkin("c1", "2025-09-01")],
        )
        .expect("overview");

        assert_eq!(out.days.len(), 7);
        let monday = &out.days[0];
        assert_eq!(monday.date.key(), "2025-09-01");
        assert!(monday.session.is_some());
        assert!(monday.check_in.is_some());
    }

    #[test]
    fn month_overview_has_one_day_per_calendar_day() {
        let reference = CalendarDate::parse("2025-09-15").expect("date");
        let out = period_overview(PeriodKind::Month, reference, &[], &[]).expect("overview");
        assert_eq!(out.days.len(), 30);
        assert!(out.days.iter().all(|d| d.session.is_none() && d.check_in.is_none()));
    }

    #[test]
    fn duplicate_checkins_surface_their_ids() {
        let reference = CalendarDate::parse("2025-09-01").expect("date");
        let err = week_overview(
            reference,
            &[],
            &[checkin("c1", "2025-09-02"), checkin("c2", "2025-09-02T08:00:00")],
        )
        .expect_err("must collide");
        let text = err.to_string();
        assert!(text.contains("c1") && text.contains("c2"), "got: {text}");
    }
}
