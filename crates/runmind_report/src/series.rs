//! Chart-ready per-day series over a period.
//!
//! The charting surface consumes one label and one optional point per
//! calendar day; gaps stay `None` so a missing Tuesday renders as a missing
//! Tuesday instead of shifting the rest of the week left.

use schemars::JsonSchema;
use serde::Serialize;

use runmind_calendar::{PeriodBoundary, bucketize, bucketize_filtered};

use crate::error::{ReportResult, upgrade_checkin_collision, upgrade_session_collision};
use crate::types::{CheckIn, CheckInMetric, SessionMetric, SessionStatus, TrainingSession};

/// One ordered point per calendar day of the queried period.
#[derive(Clone, Debug, PartialEq, Serialize, JsonSchema)]
pub struct ChartSeries {
    /// Canonical `"YYYY-MM-DD"` key per day, ascending.
    pub labels: Vec<String>,
    /// Extracted metric per day; `None` where no record matched.
    pub points: Vec<Option<f64>>,
}

impl ChartSeries {
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Series of one session metric over a period, optionally restricted to a
/// single status (e.g. only `completed` sessions for an actuals chart).
pub fn session_series(
    period: &PeriodBoundary,
    sessions: &[TrainingSession],
    metric: SessionMetric,
    status: Option<SessionStatus>,
) -> ReportResult<ChartSeries> {
    let buckets = bucketize_filtered(
        period,
        sessions,
        |s| s.date.clone(),
        |s| status.map_or(true, |wanted| s.status == wanted),
    )
    .map_err(|e| upgrade_session_collision(sessions, e))?;

    let mut labels = Vec::with_capacity(buckets.len());
    let mut points = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        labels.push(bucket.date.key());
        points.push(
            bucket
                .record
                .as_ref()
                .and_then(|s| metric.extract(s))
                .map(round2),
        );
    }
    tracing::debug!(
        metric = ?metric,
        days = labels.len(),
        populated = points.iter().filter(|p| p.is_some()).count(),
        "built session series"
    );
    Ok(ChartSeries { labels, points })
}

/// Series of one check-in metric over a period.
pub fn checkin_series(
    period: &PeriodBoundary,
    checkins: &[CheckIn],
    metric: CheckInMetric,
) -> ReportResult<ChartSeries> {
    let buckets = bucketize(period, checkins, |c| c.date.clone())
        .map_err(|e| upgrade_checkin_collision(checkins, e))?;

    let mut labels = Vec::with_capacity(buckets.len());
    let mut points = Vec::with_capacity(buckets.len());
    for bucket in buckets {
        labels.push(bucket.date.key());
        points.push(
            bucket
                .record
                .as_ref()
                .and_then(|c| metric.extract(c))
                .map(round2),
        );
    }
    Ok(ChartSeries { labels, points })
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}
