use std::time::SystemTime;

use chrono::{DateTime, Local, Utc};

use crate::config::TimeZoneMode;

/// `ctime(3)`-style layout, e.g. `Thu Jan  1 00:00:00 1970`.
const CTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// Formats a timestamp the way `ctime(3)` does, without the trailing line break.
pub fn format_ctime(time: SystemTime, time_zone: TimeZoneMode) -> String {
    let formatted = match time_zone {
        TimeZoneMode::Local => DateTime::<Local>::from(time).format(CTIME_FORMAT).to_string(),
        TimeZoneMode::Utc => DateTime::<Utc>::from(time).format(CTIME_FORMAT).to_string(),
    };

    until_line_break(&formatted).to_owned()
}

/// The part of `s` before the first `\r` or `\n`.
fn until_line_break(s: &str) -> &str {
    match s.find(['\r', '\n']) {
        Some(end) => &s[..end],
        None => s,
    }
}
