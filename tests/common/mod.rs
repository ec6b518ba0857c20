#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use paylog::domain::ports::ClockBox;
use std::fs::File;
use std::io::Error;
use std::path::Path;
use std::sync::atomic::{AtomicI64, Ordering};

pub fn t0() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

/// A clock that advances one millisecond every time it is read.
pub fn ticking_clock(start: NaiveDateTime) -> ClockBox {
    let tick = AtomicI64::new(0);
    Box::new(move || start + TimeDelta::milliseconds(tick.fetch_add(1, Ordering::SeqCst)))
}

pub fn generate_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["amount", "method", "reference"])?;

    for i in 1..=rows {
        wtr.write_record([&format!("{}.50", i), "PayPal", "buyer@example.com"])?;
    }

    wtr.flush()?;
    Ok(())
}
