//! Wall-clock helpers.

use chrono::{Local, NaiveDateTime, Utc};

/// Current UTC time without a zone, matching how naive admission times are read.
#[must_use]
pub fn utc_now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}

/// Local time of day as `HH:MM:SS`, used to stamp log entries.
#[must_use]
pub fn clock_label() -> String {
    Local::now().format("%H:%M:%S").to_string()
}
