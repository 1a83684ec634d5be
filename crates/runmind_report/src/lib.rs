//! Reporting layer over `runmind_calendar`: typed store rows, metric
//! extraction, chart series, period summaries, and the combined week
//! overview that lines training sessions up with wellness check-ins.

pub mod error;
pub mod overview;
pub mod series;
pub mod summary;
pub mod types;

pub use error::{ReportError, ReportResult};
pub use overview::{DayOverview, PeriodOverview, period_overview, week_overview};
pub use series::{ChartSeries, checkin_series, session_series};
pub use summary::{TrainingSummary, WellnessSummary, training_summary, wellness_summary};
pub use types::{CheckIn, CheckInMetric, SessionMetric, SessionStatus, TrainingSession};
