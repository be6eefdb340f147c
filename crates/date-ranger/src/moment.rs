//! Moments, open-bound sentinels and calendar arithmetic shared by every module.
//!
//! A [`Moment`] is a zone-less wall-clock instant. Open range ends are encoded
//! as the representable minimum and maximum rather than as `Option`, so the
//! sentinel checks live here and nowhere else.

use std::fmt;
use std::str::FromStr;

use chrono::{Local, Months, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound, TimeDelta};
use serde::Serialize;

use crate::error::DateRangeError;

/// An absolute point in time with millisecond resolution.
pub type Moment = NaiveDateTime;

/// Negative infinity: the earliest representable moment.
pub const MIN_MOMENT: Moment = NaiveDateTime::MIN;

/// Positive infinity: the latest representable moment.
pub const MAX_MOMENT: Moment = NaiveDateTime::MAX;

/// True when `m` stands for an open (unbounded) start.
pub fn is_open_start(m: Moment) -> bool {
    m == MIN_MOMENT
}

/// True when `m` stands for an open (unbounded) end.
pub fn is_open_end(m: Moment) -> bool {
    m == MAX_MOMENT
}

/// True when `m` is either infinity sentinel.
pub fn is_open_bound(m: Moment) -> bool {
    is_open_start(m) || is_open_end(m)
}

/// The current local wall-clock moment, truncated to milliseconds.
pub fn now() -> Moment {
    Local::now().naive_local().trunc_subsecs(3)
}

/// One millisecond, the granularity of every "end of period" boundary.
pub(crate) fn one_millisecond() -> TimeDelta {
    TimeDelta::milliseconds(1)
}

/// 23:59:59.999. `NaiveTime` arithmetic wraps at midnight.
pub(crate) fn last_millisecond() -> NaiveTime {
    NaiveTime::MIN - one_millisecond()
}

/// `m + delta`, saturating at [`MIN_MOMENT`] or [`MAX_MOMENT`] instead of
/// overflowing. A shift past either end lands on the open-bound sentinel.
pub(crate) fn shift(m: Moment, delta: TimeDelta) -> Moment {
    m.checked_add_signed(delta).unwrap_or(if delta < TimeDelta::zero() {
        MIN_MOMENT
    } else {
        MAX_MOMENT
    })
}

/// `date` moved by `days`, saturating at the first or last representable date.
pub(crate) fn shift_date(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX })
}

/// Midnight at the start of `date`.
pub fn start_of_date(date: NaiveDate) -> Moment {
    date.and_time(NaiveTime::MIN)
}

/// The last millisecond of `date`.
///
/// The last representable date ends at [`MAX_MOMENT`], so periods touching the
/// upper sentinel stay open-ended just as those starting on the first date
/// begin at [`MIN_MOMENT`].
pub fn end_of_date(date: NaiveDate) -> Moment {
    if date == NaiveDate::MAX {
        return MAX_MOMENT;
    }
    date.and_time(last_millisecond())
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in `month` (1..=12) of `year`. Returns 0 for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Number of days in `year`.
pub fn days_in_year(year: i32) -> u32 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

// ── Time units ──────────────────────────────────────────────────────────────

/// Units a range can be offset or stepped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TimeUnit {
    Day,
    Week,
    Month,
    Year,
    Minute,
    Hour,
}

impl TimeUnit {
    /// Every unit, in declaration order.
    pub const ALL: [TimeUnit; 6] = [
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Year,
        TimeUnit::Minute,
        TimeUnit::Hour,
    ];

    /// The singular display name ("Day", "Week", ...).
    pub fn name(self) -> &'static str {
        match self {
            TimeUnit::Day => "Day",
            TimeUnit::Week => "Week",
            TimeUnit::Month => "Month",
            TimeUnit::Year => "Year",
            TimeUnit::Minute => "Minute",
            TimeUnit::Hour => "Hour",
        }
    }

    /// Add `count` units to `m`.
    ///
    /// Month and year steps follow calendar semantics: the day of month is
    /// clamped to the length of the target month (Jan 31 + 1 month = Feb 28/29).
    /// Returns `None` when the result leaves the representable range.
    pub fn add_to(self, m: Moment, count: i64) -> Option<Moment> {
        match self {
            TimeUnit::Minute => m.checked_add_signed(TimeDelta::try_minutes(count)?),
            TimeUnit::Hour => m.checked_add_signed(TimeDelta::try_hours(count)?),
            TimeUnit::Day => m.checked_add_signed(TimeDelta::try_days(count)?),
            TimeUnit::Week => m.checked_add_signed(TimeDelta::try_days(count.checked_mul(7)?)?),
            TimeUnit::Month => add_months(m, count),
            TimeUnit::Year => add_months(m, count.checked_mul(12)?),
        }
    }
}

fn add_months(m: Moment, count: i64) -> Option<Moment> {
    let months = Months::new(u32::try_from(count.unsigned_abs()).ok()?);
    if count >= 0 {
        m.checked_add_months(months)
    } else {
        m.checked_sub_months(months)
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = DateRangeError;

    /// Case-insensitive singular name match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_lowercase();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| unit.name().to_lowercase() == lowered)
            .ok_or_else(|| DateRangeError::UnsupportedUnit(s.trim().to_string()))
    }
}
