//! One bucket per calendar day of a period, each holding at most one record.

use std::collections::BTreeMap;

use crate::date::{CalendarDate, RawDate};
use crate::period::PeriodBoundary;
use crate::{CalendarError, CalendarResult};

/// A single day of a period and the record (if any) that fell on it.
#[derive(Clone, Debug, PartialEq)]
pub struct DayBucket<T> {
    pub date: CalendarDate,
    pub record: Option<T>,
}

impl<T> DayBucket<T> {
    pub fn has_value(&self) -> bool {
        self.record.is_some()
    }
}

/// Bucket `records` into one [`DayBucket`] per calendar day of `period`.
///
/// `date_of` extracts each record's raw date, which is normalized through the
/// single canonical path in [`crate::date`]. Records whose day falls outside
/// the period are skipped; two in-period records on the same day abort with
/// [`CalendarError::DuplicateRecord`]. The result always has exactly
/// `period.day_count()` buckets in ascending date order, gap-free, whether the
/// input is sparse, empty, or full of out-of-period noise.
pub fn bucketize<T, F>(
    period: &PeriodBoundary,
    records: &[T],
    date_of: F,
) -> CalendarResult<Vec<DayBucket<T>>>
where
    T: Clone,
    F: Fn(&T) -> RawDate,
{
    bucketize_filtered(period, records, date_of, |_| true)
}

/// [`bucketize`] with a record filter applied first (e.g. only sessions whose
/// status is `planned`). Records rejected by `keep` take no part in duplicate
/// detection.
pub fn bucketize_filtered<T, F, P>(
    period: &PeriodBoundary,
    records: &[T],
    date_of: F,
    keep: P,
) -> CalendarResult<Vec<DayBucket<T>>>
where
    T: Clone,
    F: Fn(&T) -> RawDate,
    P: Fn(&T) -> bool,
{
    let mut by_day: BTreeMap<CalendarDate, (usize, &T)> = BTreeMap::new();
    for (index, record) in records.iter().enumerate() {
        if !keep(record) {
            continue;
        }
        let day = date_of(record).normalize()?;
        if !period.contains(day) {
            continue;
        }
        if let Some((first_index, _)) = by_day.get(&day) {
            return Err(CalendarError::DuplicateRecord {
                date: day.key(),
                first_index: *first_index,
                second_index: index,
            });
        }
        by_day.insert(day, (index, record));
    }

    tracing::debug!(
        start = %period.start,
        end = %period.end,
        records = records.len(),
        matched = by_day.len(),
        "bucketized period"
    );

    Ok(period
        .days()
        .map(|date| DayBucket {
            date,
            record: by_day.get(&date).map(|(_, record)| (*record).clone()),
        })
        .collect())
}
