//! Week boundaries.
//!
//! A week is seven days starting at midnight of the configured first weekday
//! and ending at the last millisecond of the seventh day. The default first
//! weekday is Sunday.

use chrono::{Datelike, TimeDelta, Weekday};
use serde::Serialize;

use crate::moment::{self, end_of_date, start_of_date, Moment};

/// Which day begins a week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum WeekStartDay {
    /// ISO 8601 convention.
    Monday,
    /// US/Canada convention.
    #[default]
    Sunday,
}

/// How many days `weekday` is from the week-start day.
fn days_from_week_start(weekday: Weekday, week_start: WeekStartDay) -> i64 {
    match week_start {
        WeekStartDay::Monday => weekday.num_days_from_monday() as i64,
        WeekStartDay::Sunday => weekday.num_days_from_sunday() as i64,
    }
}

/// Start of the week containing `m`, weeks beginning on Sunday.
pub fn start_of(m: Moment) -> Moment {
    start_of_with(m, WeekStartDay::default())
}

/// End of the week containing `m`, weeks beginning on Sunday.
pub fn end_of(m: Moment) -> Moment {
    end_of_with(m, WeekStartDay::default())
}

/// Start of the week containing `m`, weeks beginning on `week_start`.
///
/// Saturates at [`MIN_MOMENT`](crate::MIN_MOMENT) when that week begins
/// before the first representable date.
pub fn start_of_with(m: Moment, week_start: WeekStartDay) -> Moment {
    let date = m.date();
    start_of_date(moment::shift_date(date, -days_from_week_start(date.weekday(), week_start)))
}

/// End of the week containing `m`, weeks beginning on `week_start`.
pub fn end_of_with(m: Moment, week_start: WeekStartDay) -> Moment {
    end_of_date(moment::shift_date(start_of_with(m, week_start).date(), 6))
}

/// Start of the current week, by the wall clock.
pub fn start_of_current() -> Moment {
    start_of(moment::now())
}

/// End of the current week, by the wall clock.
pub fn end_of_current() -> Moment {
    end_of(moment::now())
}

/// Start of the previous week, by the wall clock.
pub fn start_of_last() -> Moment {
    start_of_last_at(moment::now())
}

/// End of the previous week, by the wall clock.
pub fn end_of_last() -> Moment {
    end_of_last_at(moment::now())
}

/// Start of the following week, by the wall clock.
pub fn start_of_next() -> Moment {
    start_of_next_at(moment::now())
}

/// End of the following week, by the wall clock.
pub fn end_of_next() -> Moment {
    end_of_next_at(moment::now())
}

/// Start of the week before the one containing `anchor`.
pub fn start_of_last_at(anchor: Moment) -> Moment {
    start_of_last_with(anchor, WeekStartDay::default())
}

/// End of the week before the one containing `anchor`.
pub fn end_of_last_at(anchor: Moment) -> Moment {
    end_of_last_with(anchor, WeekStartDay::default())
}

/// Start of the week after the one containing `anchor`.
pub fn start_of_next_at(anchor: Moment) -> Moment {
    start_of_next_with(anchor, WeekStartDay::default())
}

/// End of the week after the one containing `anchor`.
pub fn end_of_next_at(anchor: Moment) -> Moment {
    end_of_next_with(anchor, WeekStartDay::default())
}

/// Seven days before [`start_of_with`], saturating at the open start.
pub fn start_of_last_with(anchor: Moment, week_start: WeekStartDay) -> Moment {
    moment::shift(start_of_with(anchor, week_start), -one_week())
}

/// Seven days before [`end_of_with`], saturating at the open start.
pub fn end_of_last_with(anchor: Moment, week_start: WeekStartDay) -> Moment {
    moment::shift(end_of_with(anchor, week_start), -one_week())
}

/// Seven days after [`start_of_with`], saturating at the open end.
pub fn start_of_next_with(anchor: Moment, week_start: WeekStartDay) -> Moment {
    moment::shift(start_of_with(anchor, week_start), one_week())
}

/// Seven days after [`end_of_with`], saturating at the open end.
pub fn end_of_next_with(anchor: Moment, week_start: WeekStartDay) -> Moment {
    moment::shift(end_of_with(anchor, week_start), one_week())
}

fn one_week() -> TimeDelta {
    TimeDelta::days(7)
}
