//! Aggregate summaries over a period: the numbers the report cards show.

use schemars::JsonSchema;
use serde::Serialize;

use runmind_calendar::{PeriodBoundary, bucketize};

use crate::error::{ReportResult, upgrade_checkin_collision, upgrade_session_collision};
use crate::types::{CheckIn, SessionStatus, TrainingSession};

#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct TrainingSummary {
    /// Calendar days in the period.
    pub days: i64,
    /// Sessions that fell inside the period.
    pub sessions: usize,
    pub planned: usize,
    pub completed: usize,
    pub skipped: usize,
    pub total_distance_km: f64,
    pub total_duration_secs: i64,
    pub avg_training_load: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct WellnessSummary {
    pub days: i64,
    /// Check-ins that fell inside the period.
    pub entries: usize,
    pub avg_sleep_hours: f64,
    pub avg_sleep_quality: f64,
    pub avg_motivation: f64,
    pub avg_fatigue: f64,
    pub avg_stress: f64,
    pub avg_resting_hr: f64,
}

/// Totals and status counts for the sessions of a period.
pub fn training_summary(
    period: &PeriodBoundary,
    sessions: &[TrainingSession],
) -> ReportResult<TrainingSummary> {
    let buckets = bucketize(period, sessions, |s| s.date.clone())
        .map_err(|e| upgrade_session_collision(sessions, e))?;

    let mut count = 0usize;
    let mut planned = 0usize;
    let mut completed = 0usize;
    let mut skipped = 0usize;
    let mut distance = 0.0f64;
    let mut duration = 0i64;
    let mut load_total = 0.0f64;
    let mut load_count = 0usize;

    for session in buckets.iter().filter_map(|b| b.record.as_ref()) {
        count += 1;
        match session.status {
            SessionStatus::Planned => planned += 1,
            SessionStatus::Completed => completed += 1,
            SessionStatus::Skipped => skipped += 1,
            SessionStatus::Unknown => {}
        }
        if let Some(km) = session.distance_km {
            distance += km;
        }
        if let Some(secs) = session.duration_secs {
            duration += secs;
        }
        if let Some(load) = session.training_load {
            load_total += load;
            load_count += 1;
        }
    }

    Ok(TrainingSummary {
        days: period.day_count(),
        sessions: count,
        planned,
        completed,
        skipped,
        total_distance_km: round1(distance),
        total_duration_secs: duration,
        avg_training_load: if load_count > 0 {
            round1(load_total / load_count as f64)
        } else {
            0.0
        },
    })
}

/// Per-metric averages for the check-ins of a period. Each average only
/// counts the days that actually reported that metric.
pub fn wellness_summary(
    period: &PeriodBoundary,
    checkins: &[CheckIn],
) -> ReportResult<WellnessSummary> {
    let buckets = bucketize(period, checkins, |c| c.date.clone())
        .map_err(|e| upgrade_checkin_collision(checkins, e))?;

    let mut entries = 0usize;
    let mut sleep = Accumulator::default();
    let mut quality = Accumulator::default();
    let mut motivation = Accumulator::default();
    let mut fatigue = Accumulator::default();
    let mut stress = Accumulator::default();
    let mut resting_hr = Accumulator::default();

    for check_in in buckets.iter().filter_map(|b| b.record.as_ref()) {
        entries += 1;
        sleep.push(check_in.sleep_secs.map(|secs| secs / 3600.0));
        quality.push(check_in.sleep_quality);
        motivation.push(check_in.motivation);
        fatigue.push(check_in.fatigue);
        stress.push(check_in.stress);
        resting_hr.push(check_in.resting_hr);
    }

    Ok(WellnessSummary {
        days: period.day_count(),
        entries,
        avg_sleep_hours: sleep.avg1(),
        avg_sleep_quality: quality.avg1(),
        avg_motivation: motivation.avg1(),
        avg_fatigue: fatigue.avg1(),
        avg_stress: stress.avg1(),
        avg_resting_hr: resting_hr.avg0(),
    })
}

#[derive(Default)]
struct Accumulator {
    total: f64,
    count: usize,
}

impl Accumulator {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.total += v;
            self.count += 1;
        }
    }

    /// Average rounded to one decimal, 0.0 when no day reported the metric.
    fn avg1(&self) -> f64 {
        if self.count > 0 {
            round1(self.total / self.count as f64)
        } else {
            0.0
        }
    }

    /// Average rounded to a whole number (heart rates).
    fn avg0(&self) -> f64 {
        if self.count > 0 {
            (self.total / self.count as f64).round()
        } else {
            0.0
        }
    }
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
