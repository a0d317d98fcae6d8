//! Clock text formatting.
//!
//! Turns the remaining time into the string painted on screen:
//! `MM:SS` below one hour, `H:MM:SS` from one hour up.

use chrono::TimeDelta;

const SECS_PER_MINUTE: u64 = 60;
const SECS_PER_HOUR: u64 = 3600;
const HALF_SECOND_NANOS: i64 = 500_000_000;

/// Round a duration to the nearest whole second.
///
/// Halfway values round away from zero: `1.5s` becomes `2`, `-1.5s`
/// becomes `-2`.
pub fn round_to_seconds(d: TimeDelta) -> i64 {
    // num_seconds truncates toward zero, so the remainder carries the sign of d
    let secs = d.num_seconds();
    let nanos = (d - TimeDelta::seconds(secs))
        .num_nanoseconds()
        .unwrap_or_default();
    if nanos >= HALF_SECOND_NANOS {
        secs + 1
    } else if nanos <= -HALF_SECOND_NANOS {
        secs - 1
    } else {
        secs
    }
}

/// Format the remaining time for display.
///
/// Negative values keep the same layout behind a single leading `-`
/// (`-00:05`, `-1:00:00`). Anything that rounds to zero is `00:00`.
///
/// # Examples
///
/// ```
/// use chrono::TimeDelta;
/// use countdown::timer::render::format_duration;
///
/// assert_eq!(format_duration(TimeDelta::seconds(110)), "01:50");
/// assert_eq!(format_duration(TimeDelta::seconds(9950)), "2:45:50");
/// ```
pub fn format_duration(remaining: TimeDelta) -> String {
    let total = round_to_seconds(remaining);
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();

    let hours = total / SECS_PER_HOUR;
    let minutes = (total % SECS_PER_HOUR) / SECS_PER_MINUTE;
    let seconds = total % SECS_PER_MINUTE;

    if hours == 0 {
        format!("{}{:02}:{:02}", sign, minutes, seconds)
    } else {
        format!("{}{}:{:02}:{:02}", sign, hours, minutes, seconds)
    }
}
