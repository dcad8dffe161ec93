//! Date labels.

use chrono::NaiveDateTime;

const SECS_PER_DAY: i64 = 86_400;

/// Whole days left until `end`, rounded up; `None` once `end` has passed.
pub fn days_remaining(end: NaiveDateTime, now: NaiveDateTime) -> Option<i64> {
    let secs = (end - now).num_seconds();
    if secs <= 0 {
        return None;
    }
    Some((secs + SECS_PER_DAY - 1) / SECS_PER_DAY)
}

/// `"N days"` while time remains, `"Ended"` afterwards.
pub fn days_remaining_label(end: NaiveDateTime, now: NaiveDateTime) -> String {
    match days_remaining(end, now) {
        Some(days) => format!("{days} days"),
        None => "Ended".to_string(),
    }
}
