//! Typed errors for the reporting layer.

use thiserror::Error;

use runmind_calendar::CalendarError;

use crate::types::{CheckIn, TrainingSession};

/// Reporting errors.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("calendar error: {0}")]
    Calendar(#[from] CalendarError),

    #[error("duplicate session on {date}: {first} and {second}")]
    DuplicateSession {
        date: String,
        first: String,
        second: String,
    },

    #[error("duplicate check-in on {date}: {first} and {second}")]
    DuplicateCheckIn {
        date: String,
        first: String,
        second: String,
    },
}

/// Result type alias for reporting operations.
pub type ReportResult<T> = Result<T, ReportError>;

/// Upgrade a bucketizer collision to a session error carrying both record
/// ids; positions stand in for records the store delivered without an id.
pub(crate) fn upgrade_session_collision(
    sessions: &[TrainingSession],
    err: CalendarError,
) -> ReportError {
    match err {
        CalendarError::DuplicateRecord {
            date,
            first_index,
            second_index,
        } => ReportError::DuplicateSession {
            date,
            first: identity(sessions.get(first_index).and_then(|s| s.id.as_deref()), first_index),
            second: identity(
                sessions.get(second_index).and_then(|s| s.id.as_deref()),
                second_index,
            ),
        },
        other => ReportError::Calendar(other),
    }
}

pub(crate) fn upgrade_checkin_collision(checkins: &[CheckIn], err: CalendarError) -> ReportError {
    match err {
        CalendarError::DuplicateRecord {
            date,
            first_index,
            second_index,
        } => ReportError::DuplicateCheckIn {
            date,
            first: identity(checkins.get(first_index).and_then(|c| c.id.as_deref()), first_index),
            second: identity(
                checkins.get(second_index).and_then(|c| c.id.as_deref()),
                second_index,
            ),
        },
        other => ReportError::Calendar(other),
    }
}

fn identity(id: Option<&str>, index: usize) -> String {
    match id {
        Some(id) => id.to_string(),
        None => format!("#{index}"),
    }
}
