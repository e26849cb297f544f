//! Clock port trait.
//!
//! Injected rather than read ambiently so tests can supply fixed dates.

use chrono::NaiveDateTime;

pub trait ClockPort {
    /// Current wall-clock time in the process's configured time zone.
    fn now(&self) -> NaiveDateTime;
}
