//! Day boundaries. A day runs from 00:00:00.000 to 23:59:59.999.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::moment::{self, end_of_date, start_of_date, Moment};

/// Midnight of the day containing `m`.
pub fn start_of(m: Moment) -> Moment {
    start_of_date(m.date())
}

/// The last millisecond of the day containing `m`.
pub fn end_of(m: Moment) -> Moment {
    end_of_date(m.date())
}

/// Midnight today, by the wall clock.
pub fn start_of_current() -> Moment {
    start_of(moment::now())
}

/// The last millisecond of today, by the wall clock.
pub fn end_of_current() -> Moment {
    end_of(moment::now())
}

/// Midnight yesterday, by the wall clock.
pub fn start_of_yesterday() -> Moment {
    start_of_yesterday_at(moment::now())
}

/// The last millisecond of yesterday, by the wall clock.
pub fn end_of_yesterday() -> Moment {
    end_of_yesterday_at(moment::now())
}

/// Midnight tomorrow, by the wall clock.
pub fn start_of_tomorrow() -> Moment {
    start_of_tomorrow_at(moment::now())
}

/// The last millisecond of tomorrow, by the wall clock.
pub fn end_of_tomorrow() -> Moment {
    end_of_tomorrow_at(moment::now())
}

/// Midnight of the day before the one containing `anchor`.
///
/// On the first representable day this is [`MIN_MOMENT`](crate::MIN_MOMENT).
pub fn start_of_yesterday_at(anchor: Moment) -> Moment {
    start_of(end_of_yesterday_at(anchor))
}

/// The millisecond before the day containing `anchor` begins.
pub fn end_of_yesterday_at(anchor: Moment) -> Moment {
    moment::shift(start_of(anchor), -moment::one_millisecond())
}

/// Midnight of the day after the one containing `anchor`.
///
/// On the last representable day this is [`MAX_MOMENT`](crate::MAX_MOMENT).
pub fn start_of_tomorrow_at(anchor: Moment) -> Moment {
    moment::shift(end_of(anchor), moment::one_millisecond())
}

/// The last millisecond of the day after the one containing `anchor`.
pub fn end_of_tomorrow_at(anchor: Moment) -> Moment {
    end_of(start_of_tomorrow_at(anchor))
}

/// The first date strictly after `after` that falls on `weekday`.
///
/// A date that is already `weekday` yields the same weekday one week later.
/// Saturates at the last representable date.
pub fn next_weekday_after(weekday: Weekday, after: NaiveDate) -> NaiveDate {
    let ahead = (weekday.num_days_from_sunday() as i64 - after.weekday().num_days_from_sunday() as i64
        + 7)
        % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    moment::shift_date(after, ahead)
}
