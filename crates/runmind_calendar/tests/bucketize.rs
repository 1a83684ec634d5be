use runmind_calendar::{CalendarDate, CalendarError, RawDate, bucketize, bucketize_filtered, week_period};

#[derive(Clone, Debug, PartialEq)]
struct SessionRow {
    id: &'static str,
    date: RawDate,
    status: &'static str,
    distance_km: f64,
}

fn session(id: &'static str, date: &str, status: &'static str, distance_km: f64) -> SessionRow {
    SessionRow {
        id,
        date: RawDate::from(date),
        status,
        distance_km,
    }
}

fn week_of(reference: &str) -> runmind_calendar::PeriodBoundary {
    week_period(CalendarDate::parse(reference).expect("date")).expect("week")
}

#[test]
fn empty_collection_gives_seven_ascending_empty_buckets() {
    let buckets = bucketize::<SessionRow, _>(&week_of("2025-09-04"), &[], |r| r.date.clone())
        .expect("buckets");
    assert_eq!(buckets.len(), 7);
    assert!(buckets.iter().all(|b| !b.has_value()));
    for pair in buckets.windows(2) {
        assert!(pair[0].date < pair[1].date, "buckets must ascend");
    }
}

#[test]
fn monday_session_fills_the_monday_bucket_only() {
    let rows = [session("s1", "2025-09-01", "planned", 12.0)];
    let buckets = bucketize(&week_of("2025-09-01"), &rows, |r| r.date.clone()).expect("buckets");
    assert_eq!(buckets.len(), 7);
    assert!(buckets[0].has_value());
    let matched = buckets[0].record.as_ref().expect("monday record");
    assert_eq!(matched.distance_km, 12.0);
    assert!(buckets[1..].iter().all(|b| !b.has_value()));
}

#[test]
fn two_records_on_one_day_raise_a_duplicate_error() {
    let rows = [
        session("s1", "2025-09-01", "planned", 12.0),
        session("s2", "2025-09-01T07:30:00", "planned", 8.0),
    ];
    let err = bucketize_filtered(
        &week_of("2025-09-01"),
        &rows,
        |r| r.date.clone(),
        |r| r.status == "planned",
    )
    .expect_err("must collide");
    match err {
        CalendarError::DuplicateRecord {
            date,
            first_index,
            second_index,
        } => {
            assert_eq!(date, "2025-09-01");
            assert_eq!(rows[first_index].id, "s1");
            assert_eq!(rows[second_index].id, "s2");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn status_filter_excludes_records_before_collision_checks() {
    let rows = [
        session("s1", "2025-09-01", "planned", 12.0),
        session("s2", "2025-09-01", "completed", 11.4),
    ];
    let buckets = bucketize_filtered(
        &week_of("2025-09-01"),
        &rows,
        |r| r.date.clone(),
        |r| r.status == "completed",
    )
    .expect("buckets");
    assert_eq!(
        buckets[0].record.as_ref().map(|r| r.id),
        Some("s2"),
        "only the completed session may match"
    );
}

#[test]
fn mixed_representations_of_one_week_all_land() {
    let rows = [
        session("mon", "2025-09-01T00:00:00.000Z", "planned", 10.0),
        session("wed", "03/09/2025", "planned", 6.0),
        session("sun", "2025-09-07", "planned", 21.1),
    ];
    let buckets = bucketize(&week_of("2025-09-03"), &rows, |r| r.date.clone()).expect("buckets");
    let hits: Vec<_> = buckets
        .iter()
        .filter_map(|b| b.record.as_ref().map(|r| (b.date.key(), r.id)))
        .collect();
    assert_eq!(
        hits,
        vec![
            ("2025-09-01".to_string(), "mon"),
            ("2025-09-03".to_string(), "wed"),
            ("2025-09-07".to_string(), "sun"),
        ]
    );
}

#[test]
fn records_outside_the_period_never_error_or_match() {
    let rows = [
        session("before", "2025-08-31", "planned", 5.0),
        session("after", "2025-09-08", "planned", 5.0),
        session("inside", "2025-09-02", "planned", 5.0),
    ];
    let buckets = bucketize(&week_of("2025-09-01"), &rows, |r| r.date.clone()).expect("buckets");
    assert_eq!(buckets.iter().filter(|b| b.has_value()).count(), 1);
    assert!(buckets[1].has_value());
}

#[test]
fn month_bucketizing_yields_one_bucket_per_day() {
    let period =
        runmind_calendar::month_period(CalendarDate::parse("2025-09-10").expect("date"))
            .expect("month");
    let rows = [session("s1", "2025-09-30", "planned", 14.0)];
    let buckets = bucketize(&period, &rows, |r| r.date.clone()).expect("buckets");
    assert_eq!(buckets.len() as i64, period.day_count());
    assert!(buckets.last().expect("last bucket").has_value());
}
