use crate::domain::ports::Clock;
use chrono::{Local, NaiveDateTime};

/// Wall-clock time in the local timezone, without offset.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
