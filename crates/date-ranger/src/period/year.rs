//! Year boundaries.

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::error::{DateRangeError, Result};
use crate::moment::{self, days_in_year, end_of_date, start_of_date, Moment};

fn first_day(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(date.ordinal0() as i64)
}

fn last_day(date: NaiveDate) -> NaiveDate {
    first_day(date) + TimeDelta::days(days_in_year(date.year()) as i64 - 1)
}

/// Midnight on January 1 of `year`.
///
/// # Errors
///
/// Returns [`DateRangeError::InvalidDate`] if `year` is outside the representable range.
pub fn start_of_year(year: i32) -> Result<Moment> {
    NaiveDate::from_yo_opt(year, 1)
        .map(start_of_date)
        .ok_or_else(|| DateRangeError::InvalidDate(format!("year {year}")))
}

/// The last millisecond of December 31 of `year`.
///
/// # Errors
///
/// Same conditions as [`start_of_year`].
pub fn end_of_year(year: i32) -> Result<Moment> {
    NaiveDate::from_ymd_opt(year, 12, 31)
        .map(end_of_date)
        .ok_or_else(|| DateRangeError::InvalidDate(format!("year {year}")))
}

/// Midnight on January 1 of the year containing `m`.
pub fn start_of(m: Moment) -> Moment {
    start_of_date(first_day(m.date()))
}

/// The last millisecond of December 31 of the year containing `m`.
pub fn end_of(m: Moment) -> Moment {
    end_of_date(last_day(m.date()))
}

/// Start of the current year, by the wall clock.
pub fn start_of_current() -> Moment {
    start_of(moment::now())
}

/// End of the current year, by the wall clock.
pub fn end_of_current() -> Moment {
    end_of(moment::now())
}

/// Start of the previous year, by the wall clock.
pub fn start_of_last() -> Moment {
    start_of_last_at(moment::now())
}

/// End of the previous year, by the wall clock.
pub fn end_of_last() -> Moment {
    end_of_last_at(moment::now())
}

/// Start of the following year, by the wall clock.
pub fn start_of_next() -> Moment {
    start_of_next_at(moment::now())
}

/// End of the following year, by the wall clock.
pub fn end_of_next() -> Moment {
    end_of_next_at(moment::now())
}

/// Start of the year before the one containing `anchor`.
pub fn start_of_last_at(anchor: Moment) -> Moment {
    start_of(end_of_last_at(anchor))
}

/// The millisecond before the year containing `anchor` begins, or
/// [`MIN_MOMENT`](crate::MIN_MOMENT) in the first representable year.
pub fn end_of_last_at(anchor: Moment) -> Moment {
    moment::shift(start_of(anchor), -moment::one_millisecond())
}

/// Midnight on January 1 after the year containing `anchor`, or
/// [`MAX_MOMENT`](crate::MAX_MOMENT) in the last representable year.
pub fn start_of_next_at(anchor: Moment) -> Moment {
    moment::shift(end_of(anchor), moment::one_millisecond())
}

/// End of the year after the one containing `anchor`.
pub fn end_of_next_at(anchor: Moment) -> Moment {
    end_of(start_of_next_at(anchor))
}
