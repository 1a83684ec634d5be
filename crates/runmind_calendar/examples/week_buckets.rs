//! Bucket a handful of raw store rows into the week of a given date.
//!
//! Run with: `cargo run -p runmind_calendar --example week_buckets`

use runmind_calendar::{CalendarDate, RawDate, bucketize, week_period};

#[derive(Clone)]
struct Row {
    label: &'static str,
    date: RawDate,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let reference = CalendarDate::parse("2025-09-04")?;
    let period = week_period(reference)?;

    let rows = vec![
        Row {
            label: "easy run",
            date: RawDate::from("2025-09-01T00:00:00.000Z"),
        },
        Row {
            label: "tempo run",
            date: RawDate::from("03/09/2025"),
        },
        Row {
            label: "long run",
            date: RawDate::from("2025-09-07"),
        },
    ];

    println!("week of {reference}: {} .. {}", period.start, period.end);
    for bucket in bucketize(&period, &rows, |r| r.date.clone())? {
        match bucket.record {
            Some(row) => println!("{}  {}", bucket.date, row.label),
            None => println!("{}  -", bucket.date),
        }
    }
    Ok(())
}
