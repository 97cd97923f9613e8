// src/report/clock.rs
use chrono::{Local, NaiveDateTime};

/// Format of the closing timestamp line
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Source of the wall-clock time stamped at the end of a report
pub trait Clock {
    /// Current local date and time
    fn now(&self) -> NaiveDateTime;

    /// Current time rendered as `YYYY-MM-DD HH:MM:SS`
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Reads the host's local clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
