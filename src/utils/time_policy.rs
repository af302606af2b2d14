//! Night-shift rules: the shift opens at 18:00 and runs until 03:00 the
//! next morning.
//!
//! Arrivals between midnight and 03:00 count as on time even though they are
//! hours past the start. Late minutes are only computed for the evening part
//! of the shift.

use chrono::{NaiveTime, Timelike};

use crate::model::attendance::NOT_LATE;

const OFFICE_START_SECS: u32 = 18 * 3600;
const OFFICE_END_SECS: u32 = 3 * 3600;
const SECS_PER_DAY: i64 = 24 * 3600;

/// Shown on the admin dashboard.
pub const SHIFT_LABEL: &str = "6:00 PM – 3:00 AM (America/New_York)";

/// Strictly after 18:00:00 is late; anything before 18:00 is not.
pub fn is_late(time: NaiveTime) -> bool {
    let secs = time.num_seconds_from_midnight();
    if secs >= OFFICE_START_SECS {
        secs > OFFICE_START_SECS
    } else {
        // early-morning part of the shift, or outside it entirely
        false
    }
}

/// Whole minutes past 18:00, or 0 when not late.
pub fn calculate_late_minutes(time: NaiveTime) -> u32 {
    if !is_late(time) {
        return 0;
    }
    (time.num_seconds_from_midnight() - OFFICE_START_SECS) / 60
}

/// `-` when on time, `<N> min late` otherwise.
pub fn late_by_descriptor(time: NaiveTime) -> String {
    if is_late(time) {
        format!("{} min late", calculate_late_minutes(time))
    } else {
        NOT_LATE.to_string()
    }
}

/// Inside the 18:00-03:00 window, across midnight.
pub fn within_shift(time: NaiveTime) -> bool {
    let secs = time.num_seconds_from_midnight();
    secs >= OFFICE_START_SECS || secs < OFFICE_END_SECS
}

/// `<H>h <M>m` between two clock times of the same record.
///
/// The difference wraps at 24h, so a sign-out "before" the sign-in reads as
/// the time elapsed over midnight.
pub fn worked_hours(sign_in: NaiveTime, sign_out: NaiveTime) -> String {
    let secs = (sign_out - sign_in).num_seconds().rem_euclid(SECS_PER_DAY);
    let minutes = secs / 60;
    format!("{}h {}m", minutes / 60, minutes % 60)
}
