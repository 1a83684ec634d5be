use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use runmind_calendar::RawDate;

/// Lifecycle state of a training session row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Planned,
    Completed,
    Skipped,
    #[serde(other)]
    Unknown,
}

/// A training session row as delivered by the data store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct TrainingSession {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    pub date: RawDate,
    pub status: SessionStatus,
    #[serde(rename = "type")]
    pub sport: Option<String>,
    pub distance_km: Option<f64>,
    pub duration_secs: Option<i64>,
    pub training_load: Option<f64>,
    pub rpe: Option<u8>,
    pub notes: Option<String>,
}

/// A wellness check-in row as delivered by the data store.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CheckIn {
    #[serde(default, deserialize_with = "deserialize_opt_string")]
    pub id: Option<String>,
    pub date: RawDate,
    pub sleep_secs: Option<f64>,
    pub sleep_quality: Option<f64>,
    pub motivation: Option<f64>,
    pub fatigue: Option<f64>,
    pub stress: Option<f64>,
    pub resting_hr: Option<f64>,
    pub soreness: Option<f64>,
    pub notes: Option<String>,
}

/// Numeric metric a chart can extract from a session bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SessionMetric {
    DistanceKm,
    DurationSecs,
    TrainingLoad,
    Rpe,
}

impl SessionMetric {
    pub fn extract(&self, session: &TrainingSession) -> Option<f64> {
        match self {
            SessionMetric::DistanceKm => session.distance_km,
            SessionMetric::DurationSecs => session.duration_secs.map(|v| v as f64),
            SessionMetric::TrainingLoad => session.training_load,
            SessionMetric::Rpe => session.rpe.map(f64::from),
        }
    }
}

/// Numeric metric a chart can extract from a check-in bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckInMetric {
    /// Sleep duration surfaced in hours.
    SleepHours,
    SleepQuality,
    Motivation,
    Fatigue,
    Stress,
    RestingHr,
    Soreness,
}

impl CheckInMetric {
    pub fn extract(&self, check_in: &CheckIn) -> Option<f64> {
        match self {
            CheckInMetric::SleepHours => check_in.sleep_secs.map(|secs| secs / 3600.0),
            CheckInMetric::SleepQuality => check_in.sleep_quality,
            CheckInMetric::Motivation => check_in.motivation,
            CheckInMetric::Fatigue => check_in.fatigue,
            CheckInMetric::Stress => check_in.stress,
            CheckInMetric::RestingHr => check_in.resting_hr,
            CheckInMetric::Soreness => check_in.soreness,
        }
    }
}

/// Store rows carry ids as either strings or numbers depending on the column
/// they came from; accept both.
fn deserialize_opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value: Option<serde_json::Value> = Option::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(n.to_string().into()),
        Some(other) => Err(D::Error::custom(format!(
            "expected string or number, got {other}"
        ))),
    }
}
