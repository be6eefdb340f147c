//! Month boundaries.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use crate::error::{DateRangeError, Result};
use crate::moment::{self, days_in_month, end_of_date, start_of_date, Moment};

/// First calendar day of the month containing `date`.
pub(crate) fn first_day(date: NaiveDate) -> NaiveDate {
    date - TimeDelta::days(date.day0() as i64)
}

/// Last calendar day of the month containing `date`.
pub(crate) fn last_day(date: NaiveDate) -> NaiveDate {
    first_day(date) + TimeDelta::days(days_in_month(date.year(), date.month()) as i64 - 1)
}

/// Midnight on the first day of `month` in `year`.
///
/// # Errors
///
/// Returns [`DateRangeError::InvalidDate`] if `month` is not 1..=12 or the
/// year is outside the representable range.
pub fn start_of_month(month: u32, year: i32) -> Result<Moment> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(start_of_date)
        .ok_or_else(|| DateRangeError::InvalidDate(format!("month {month} of year {year}")))
}

/// The last millisecond of the last day of `month` in `year`.
///
/// # Errors
///
/// Same conditions as [`start_of_month`].
pub fn end_of_month(month: u32, year: i32) -> Result<Moment> {
    start_of_month(month, year).map(|start| end_of_date(last_day(start.date())))
}

/// Midnight on the first day of the month containing `m`.
pub fn start_of(m: Moment) -> Moment {
    start_of_date(first_day(m.date()))
}

/// The last millisecond of the month containing `m`.
pub fn end_of(m: Moment) -> Moment {
    end_of_date(last_day(m.date()))
}

/// Start of the current month, by the wall clock.
pub fn start_of_current() -> Moment {
    start_of(moment::now())
}

/// End of the current month, by the wall clock.
pub fn end_of_current() -> Moment {
    end_of(moment::now())
}

/// Start of the previous month, by the wall clock.
pub fn start_of_last() -> Moment {
    start_of_last_at(moment::now())
}

/// End of the previous month, by the wall clock.
pub fn end_of_last() -> Moment {
    end_of_last_at(moment::now())
}

/// Start of the following month, by the wall clock.
pub fn start_of_next() -> Moment {
    start_of_next_at(moment::now())
}

/// End of the following month, by the wall clock.
pub fn end_of_next() -> Moment {
    end_of_next_at(moment::now())
}

/// Start of the month before the one containing `anchor`.
///
/// Before the first representable month this is [`MIN_MOMENT`](crate::MIN_MOMENT);
/// the `_next_` forms likewise saturate at [`MAX_MOMENT`](crate::MAX_MOMENT).
pub fn start_of_last_at(anchor: Moment) -> Moment {
    start_of(end_of_last_at(anchor))
}

/// End of the month before the one containing `anchor`.
pub fn end_of_last_at(anchor: Moment) -> Moment {
    moment::shift(start_of(anchor), -moment::one_millisecond())
}

/// Start of the month after the one containing `anchor`.
pub fn start_of_next_at(anchor: Moment) -> Moment {
    moment::shift(end_of(anchor), moment::one_millisecond())
}

/// End of the month after the one containing `anchor`.
pub fn end_of_next_at(anchor: Moment) -> Moment {
    end_of(start_of_next_at(anchor))
}

/// The first date after `after`, stepping whole months, whose month is `month`.
///
/// The day of month is clamped to the target month's length. A date already
/// in `month` yields the same month one year later.
pub fn next_month_occurrence(month: chrono::Month, after: NaiveDate) -> Option<NaiveDate> {
    let target = month.number_from_month() as i64;
    let ahead = (target - after.month() as i64 + 12) % 12;
    let ahead = if ahead == 0 { 12 } else { ahead };
    after.checked_add_months(Months::new(ahead as u32))
}
