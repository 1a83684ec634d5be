//! Print the week overview and completed-distance series for sample rows.
//!
//! Run with: `cargo run -p runmind_report --example weekly_overview`

use tracing_subscriber::EnvFilter;

use runmind_calendar::{CalendarDate, week_period};
use runmind_report::{
    CheckIn, SessionMetric, SessionStatus, TrainingSession, session_series, week_overview,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let sessions: Vec<TrainingSession> = serde_json::from_value(serde_json::json!([
        {
            "id": 101,
            "date": "2025-09-01T00:00:00.000Z",
            "status": "completed",
            "type": "Run",
            "distance_km": 12.0
        },
        {
            "id": 102,
            "date": "2025-09-06",
            "status": "planned",
            "type": "Run",
            "distance_km": 21.1
        }
    ]))?;
    let checkins: Vec<CheckIn> = serde_json::from_value(serde_json::json!([
        {
            "id": "c-1",
            "date": "2025-09-01",
            "sleep_secs": 28800.0,
            "motivation": 4.0
        }
    ]))?;

    let reference = CalendarDate::parse("2025-09-04")?;
    let overview = week_overview(reference, &sessions, &checkins)?;

    println!(
        "week {} .. {}",
        overview.period.start, overview.period.end
    );
    for day in &overview.days {
        let session = day
            .session
            .as_ref()
            .map(|s| format!("{:?} {}km", s.status, s.distance_km.unwrap_or(0.0)))
            .unwrap_or_else(|| "-".into());
        let check_in = if day.check_in.is_some() { "checked in" } else { "-" };
        println!("{}  {:<22}  {}", day.date, session, check_in);
    }

    let completed = session_series(
        &week_period(reference)?,
        &sessions,
        SessionMetric::DistanceKm,
        Some(SessionStatus::Completed),
    )?;
    println!("completed km: {:?}", completed.points);
    Ok(())
}
