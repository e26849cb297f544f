//! System clock adapter.

use chrono::{Local, NaiveDateTime};

use crate::ports::clock_port::ClockPort;

/// Wall clock in the process's local time zone.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
