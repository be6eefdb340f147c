//! Closed date ranges over [`Moment`]s.
//!
//! A [`DateRange`] always satisfies `start <= end`; constructors swap the
//! bounds when given out of order. An open end is encoded with the
//! [`MIN_MOMENT`]/[`MAX_MOMENT`] sentinels, so `contains` and `intersects`
//! work on open ranges with plain comparisons.
//!
//! Two string forms are supported:
//!
//! - [`DateRange::to_short_string`] / [`DateRange::try_parse_short`]:
//!   `yyyy-MM-dd_yyyy-MM-dd`, date-only.
//! - [`Display`](std::fmt::Display): `start - end` with full time-of-day.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, TimeDelta};
use serde::Serialize;
use tracing::{debug, trace};

use crate::error::{DateRangeError, Result};
use crate::moment::{self, is_open_end, is_open_start, Moment, TimeUnit, MAX_MOMENT, MIN_MOMENT};
use crate::named_range::NamedRange;
use crate::period::{day, month, week, year, CalendarOptions};
use crate::quarter;

/// Format of each half of the short range string.
const DAY_KEY_FORMAT: &str = "%Y-%m-%d";

/// A closed interval `[start, end]` of moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: Moment,
    end: Moment,
}

impl DateRange {
    /// Marker for "no range" (e.g. a failed parse): `{MIN, MIN}`.
    ///
    /// This is an ordinary zero-width range, not an absorbing value;
    /// `contains` and `intersects` treat it like any other range.
    pub const EMPTY: DateRange = DateRange {
        start: MIN_MOMENT,
        end: MIN_MOMENT,
    };

    /// Creates a range from two bounds in either order.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_ranger::DateRange;
    ///
    /// let jan = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let feb = NaiveDate::from_ymd_opt(2026, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    ///
    /// let range = DateRange::new(feb, jan);
    /// assert_eq!(range.start(), jan);
    /// assert_eq!(range.end(), feb);
    /// assert!(range.contains(jan));
    /// ```
    pub fn new(a: Moment, b: Moment) -> Self {
        if a < b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// The lower bound; [`MIN_MOMENT`] when the range is open at the start.
    pub fn start(&self) -> Moment {
        self.start
    }

    /// The upper bound; [`MAX_MOMENT`] when the range is open at the end.
    pub fn end(&self) -> Moment {
        self.end
    }

    /// Time between `start` and `end`. Never negative.
    pub fn duration(&self) -> TimeDelta {
        self.end.signed_duration_since(self.start)
    }

    /// True for the [`DateRange::EMPTY`] sentinel.
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// True when the range has no lower limit.
    pub fn has_open_start(&self) -> bool {
        is_open_start(self.start)
    }

    /// True when the range has no upper limit.
    pub fn has_open_end(&self) -> bool {
        is_open_end(self.end)
    }

    // ── Period factories ────────────────────────────────────────────────

    /// The whole day containing `m`.
    pub fn day(m: Moment) -> Self {
        Self::new(day::start_of(m), day::end_of(m))
    }

    /// The whole week containing `m`, weeks beginning on Sunday.
    pub fn week(m: Moment) -> Self {
        Self::week_with(m, &CalendarOptions::default())
    }

    /// The whole week containing `m` under `options`.
    pub fn week_with(m: Moment, options: &CalendarOptions) -> Self {
        Self::new(
            week::start_of_with(m, options.week_start),
            week::end_of_with(m, options.week_start),
        )
    }

    /// The whole month containing `m`.
    pub fn month(m: Moment) -> Self {
        Self::new(month::start_of(m), month::end_of(m))
    }

    /// The whole quarter containing `m`.
    pub fn quarter(m: Moment) -> Self {
        Self::new(quarter::start_of(m), quarter::end_of(m))
    }

    /// The whole year containing `m`.
    pub fn year(m: Moment) -> Self {
        Self::new(year::start_of(m), year::end_of(m))
    }

    /// The range between `reference` and `reference + magnitude × unit`.
    ///
    /// A negative magnitude yields `[reference - |magnitude| × unit, reference]`.
    /// Month and year offsets clamp the day of month (Jan 31 + 1 month = Feb 28/29).
    ///
    /// When the offset cannot be applied the result is [`DateRange::EMPTY`],
    /// not an error; callers must check [`DateRange::is_empty`].
    pub fn date_range_from(reference: Moment, magnitude: i32, unit: TimeUnit) -> Self {
        match unit.add_to(reference, magnitude as i64) {
            Some(other) => Self::new(reference, other),
            None => {
                debug!(%reference, magnitude, %unit, "offset leaves the representable range; returning EMPTY");
                Self::EMPTY
            }
        }
    }

    // ── Enumeration ─────────────────────────────────────────────────────

    /// Every moment `start + k × step` that is `<= end`, starting with `start`.
    ///
    /// The iterator is lazy and each call starts again from `start`. `end` is
    /// included only when it lands exactly on a step.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::UnboundedStart`] if the range has an open start,
    /// since there is no first step after negative infinity.
    pub fn enumerate(&self, step: TimeUnit) -> Result<Steps> {
        if self.has_open_start() {
            return Err(DateRangeError::UnboundedStart);
        }
        trace!(range = %self, %step, "enumerating range");
        Ok(Steps {
            origin: self.start,
            step,
            index: 0,
            end: Some(self.end),
        })
    }

    /// Every moment `start + k × step` with no upper limit.
    ///
    /// Stops only when the next step would leave the representable range;
    /// consumers are expected to stop pulling (`take`, `take_while`, ...).
    pub fn enumerate_from(start: Moment, step: TimeUnit) -> Steps {
        Steps {
            origin: start,
            step,
            index: 0,
            end: None,
        }
    }

    // ── Set operations ──────────────────────────────────────────────────

    /// True unless the two ranges are disjoint.
    pub fn intersects(&self, other: &DateRange) -> bool {
        let disjoint = other.end < self.start
            || other.start > self.end
            || self.end < other.start
            || self.start > other.end;
        !disjoint
    }

    /// True when `m` lies in `[start, end]`.
    pub fn contains(&self, m: Moment) -> bool {
        self.start <= m && self.end >= m
    }

    /// The overlap of the two ranges.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::NonIntersecting`] if the ranges are disjoint.
    pub fn intersection(&self, other: &DateRange) -> Result<DateRange> {
        if !self.intersects(other) {
            return Err(DateRangeError::NonIntersecting(
                self.to_string(),
                other.to_string(),
            ));
        }
        let latest_start = if self.start >= other.start {
            self.start
        } else {
            other.start
        };
        let earliest_end = if self.end >= other.end {
            other.end
        } else {
            self.end
        };
        Ok(Self::new(latest_start, earliest_end))
    }

    // ── Short string codec ──────────────────────────────────────────────

    /// `yyyy-MM-dd_yyyy-MM-dd`; time of day is dropped.
    pub fn to_short_string(&self) -> String {
        format!(
            "{}_{}",
            self.start.format(DAY_KEY_FORMAT),
            self.end.format(DAY_KEY_FORMAT)
        )
    }

    /// Parse `yyyy-MM-dd_yyyy-MM-dd` into a range of two midnights.
    ///
    /// Requires exactly one `_` and two strictly formatted dates
    /// (four-digit year, two-digit month and day). Anything else yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use date_ranger::DateRange;
    ///
    /// let range = DateRange::try_parse_short("2026-01-01_2026-01-31").unwrap();
    /// assert_eq!(range.duration().num_days(), 30);
    /// assert_eq!(range.to_short_string(), "2026-01-01_2026-01-31");
    ///
    /// assert!(DateRange::try_parse_short("2026-1-1_2026-01-31").is_none());
    /// assert!(DateRange::try_parse_short("2026-01-01").is_none());
    /// ```
    pub fn try_parse_short(s: &str) -> Option<DateRange> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 2 {
            debug!(input = s, "short date range needs exactly one '_'");
            return None;
        }
        let start = parse_day_key(parts[0])?;
        let end = parse_day_key(parts[1])?;
        Some(Self::new(moment::start_of_date(start), moment::start_of_date(end)))
    }

    // ── Predefined ranges ───────────────────────────────────────────────
    //
    // Wall-clock shorthands for `NamedRange::X.resolve()`.

    /// Yesterday, midnight to the last millisecond.
    pub fn yesterday() -> Self {
        NamedRange::Yesterday.resolve()
    }

    /// Today, midnight to the last millisecond.
    pub fn today() -> Self {
        NamedRange::Today.resolve()
    }

    /// Tomorrow, midnight to the last millisecond.
    pub fn tomorrow() -> Self {
        NamedRange::Tomorrow.resolve()
    }

    /// The current week, starting on Sunday.
    pub fn this_week() -> Self {
        NamedRange::ThisWeek.resolve()
    }

    /// The week before the current one.
    pub fn last_week() -> Self {
        NamedRange::LastWeek.resolve()
    }

    /// The week after the current one.
    pub fn next_week() -> Self {
        NamedRange::NextWeek.resolve()
    }

    /// The current calendar month.
    pub fn this_month() -> Self {
        NamedRange::ThisMonth.resolve()
    }

    /// The previous calendar month.
    pub fn last_month() -> Self {
        NamedRange::LastMonth.resolve()
    }

    /// The following calendar month.
    pub fn next_month() -> Self {
        NamedRange::NextMonth.resolve()
    }

    /// The current calendar quarter.
    pub fn this_quarter() -> Self {
        NamedRange::ThisQuarter.resolve()
    }

    /// The previous calendar quarter.
    pub fn last_quarter() -> Self {
        NamedRange::LastQuarter.resolve()
    }

    /// The following calendar quarter.
    pub fn next_quarter() -> Self {
        NamedRange::NextQuarter.resolve()
    }

    /// The current calendar year.
    pub fn this_year() -> Self {
        NamedRange::ThisYear.resolve()
    }

    /// The previous calendar year.
    pub fn last_year() -> Self {
        NamedRange::LastYear.resolve()
    }

    /// The following calendar year.
    pub fn next_year() -> Self {
        NamedRange::NextYear.resolve()
    }

    /// Negative infinity up to one millisecond before now.
    pub fn the_past() -> Self {
        NamedRange::ThePast.resolve()
    }

    /// One millisecond after now up to positive infinity.
    pub fn the_future() -> Self {
        NamedRange::TheFuture.resolve()
    }

    /// The widest range a SQL Server `datetime` column can store.
    pub fn max_sql_date_range() -> Self {
        NamedRange::MaxSqlDateRange.resolve()
    }

    /// The SQL `datetime` minimum up to now.
    pub fn past_sql_date_range() -> Self {
        NamedRange::PastSqlDateRange.resolve()
    }
}

/// Strict `yyyy-MM-dd`.
fn parse_day_key(s: &str) -> Option<NaiveDate> {
    let well_formed = s.len() == 10
        && s.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        debug!(input = s, "not a yyyy-MM-dd date");
        return None;
    }
    NaiveDate::parse_from_str(s, DAY_KEY_FORMAT).ok()
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl FromStr for DateRange {
    type Err = DateRangeError;

    /// Parses the short `yyyy-MM-dd_yyyy-MM-dd` form.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_parse_short(s).ok_or_else(|| {
            DateRangeError::InvalidExpression(format!("not a yyyy-MM-dd_yyyy-MM-dd range: '{s}'"))
        })
    }
}

/// Lazy stepped moments, see [`DateRange::enumerate`].
///
/// Each item is computed from the origin (`origin + index × step`), so
/// month steps from the 31st do not drift after passing a short month.
#[derive(Debug, Clone)]
pub struct Steps {
    origin: Moment,
    step: TimeUnit,
    index: i64,
    end: Option<Moment>,
}

impl Iterator for Steps {
    type Item = Moment;

    fn next(&mut self) -> Option<Moment> {
        let current = self.step.add_to(self.origin, self.index)?;
        if self.end.is_some_and(|end| current > end) {
            return None;
        }
        self.index += 1;
        Some(current)
    }
}

/// Lowest and highest values of a SQL Server `datetime` column.
pub(crate) fn sql_datetime_bounds() -> (Moment, Moment) {
    let min = NaiveDate::from_ymd_opt(1753, 1, 1)
        .map(moment::start_of_date)
        .unwrap_or(MIN_MOMENT);
    let max = NaiveDate::from_ymd_opt(9999, 12, 31)
        .and_then(|d| d.and_hms_milli_opt(23, 59, 59, 997))
        .unwrap_or(MAX_MOMENT);
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    fn anchor() -> Moment {
        // Wednesday, Feb 18 2026 14:30:15.250
        NaiveDate::from_ymd_opt(2026, 2, 18)
            .unwrap()
            .and_hms_milli_opt(14, 30, 15, 250)
            .unwrap()
    }

    fn midnight(y: i32, m: u32, d: u32) -> Moment {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
    }

    fn last_ms(y: i32, m: u32, d: u32) -> Moment {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_milli_opt(23, 59, 59, 999)
            .unwrap()
    }

    // ── construction ────────────────────────────────────────────────────

    #[test]
    fn test_new_keeps_ordered_bounds() {
        let r = DateRange::new(midnight(2026, 1, 1), midnight(2026, 2, 1));
        assert_eq!(r.start(), midnight(2026, 1, 1));
        assert_eq!(r.end(), midnight(2026, 2, 1));
    }

    #[test]
    fn test_new_swaps_reversed_bounds() {
        let r = DateRange::new(midnight(2026, 2, 1), midnight(2026, 1, 1));
        assert_eq!(r.start(), midnight(2026, 1, 1));
        assert_eq!(r.end(), midnight(2026, 2, 1));
    }

    #[test]
    fn test_new_zero_width() {
        let r = DateRange::new(anchor(), anchor());
        assert_eq!(r.start(), r.end());
        assert_eq!(r.duration(), TimeDelta::zero());
    }

    #[test]
    fn test_new_infinite_range() {
        let r = DateRange::new(MIN_MOMENT, MAX_MOMENT);
        assert_eq!(r.start(), MIN_MOMENT);
        assert_eq!(r.end(), MAX_MOMENT);
        assert!(r.has_open_start());
        assert!(r.has_open_end());
    }

    #[test]
    fn test_empty_is_sentinel_not_absorbing() {
        assert!(DateRange::EMPTY.is_empty());
        assert!(DateRange::EMPTY.contains(MIN_MOMENT));
        let past = DateRange::new(MIN_MOMENT, anchor());
        assert!(DateRange::EMPTY.intersects(&past));
        assert!(!DateRange::EMPTY.intersects(&DateRange::day(anchor())));
    }

    #[test]
    fn test_duration() {
        let r = DateRange::new(midnight(2026, 1, 1), midnight(2026, 1, 8));
        assert_eq!(r.duration(), TimeDelta::days(7));
    }

    // ── period factories ────────────────────────────────────────────────

    #[test]
    fn test_period_factories() {
        assert_eq!(
            DateRange::day(anchor()),
            DateRange::new(midnight(2026, 2, 18), last_ms(2026, 2, 18))
        );
        assert_eq!(
            DateRange::week(anchor()),
            DateRange::new(midnight(2026, 2, 15), last_ms(2026, 2, 21))
        );
        assert_eq!(
            DateRange::month(anchor()),
            DateRange::new(midnight(2026, 2, 1), last_ms(2026, 2, 28))
        );
        assert_eq!(
            DateRange::quarter(anchor()),
            DateRange::new(midnight(2026, 1, 1), last_ms(2026, 3, 31))
        );
        assert_eq!(
            DateRange::year(anchor()),
            DateRange::new(midnight(2026, 1, 1), last_ms(2026, 12, 31))
        );
    }

    #[test]
    fn test_week_with_monday_start() {
        let options = CalendarOptions {
            week_start: crate::period::WeekStartDay::Monday,
        };
        assert_eq!(
            DateRange::week_with(anchor(), &options),
            DateRange::new(midnight(2026, 2, 16), last_ms(2026, 2, 22))
        );
    }

    // ── date_range_from ─────────────────────────────────────────────────

    fn check_date_range_from(unit: TimeUnit) {
        let reference = anchor();
        for magnitude in 1..1000 {
            let expected = DateRange::new(reference, unit.add_to(reference, magnitude as i64).unwrap());
            assert_eq!(DateRange::date_range_from(reference, magnitude, unit), expected);
            assert_eq!(expected.start(), reference);
        }
        for magnitude in -999..0 {
            let expected = DateRange::new(unit.add_to(reference, magnitude as i64).unwrap(), reference);
            assert_eq!(DateRange::date_range_from(reference, magnitude, unit), expected);
            assert_eq!(expected.end(), reference);
        }
    }

    #[test]
    fn test_date_range_from_minutes() {
        check_date_range_from(TimeUnit::Minute);
    }

    #[test]
    fn test_date_range_from_hours() {
        check_date_range_from(TimeUnit::Hour);
    }

    #[test]
    fn test_date_range_from_days() {
        check_date_range_from(TimeUnit::Day);
    }

    #[test]
    fn test_date_range_from_weeks() {
        check_date_range_from(TimeUnit::Week);
    }

    #[test]
    fn test_date_range_from_months() {
        check_date_range_from(TimeUnit::Month);
    }

    #[test]
    fn test_date_range_from_years() {
        check_date_range_from(TimeUnit::Year);
    }

    #[test]
    fn test_date_range_from_month_end_clamps() {
        let jan31 = midnight(2026, 1, 31);
        let r = DateRange::date_range_from(jan31, 1, TimeUnit::Month);
        assert_eq!(r, DateRange::new(jan31, midnight(2026, 2, 28)));
    }

    #[test]
    fn test_date_range_from_week_is_seven_days() {
        let r = DateRange::date_range_from(anchor(), -2, TimeUnit::Week);
        assert_eq!(r.duration(), TimeDelta::days(14));
        assert_eq!(r.end(), anchor());
    }

    #[test]
    fn test_date_range_from_out_of_range_is_empty() {
        let r = DateRange::date_range_from(MAX_MOMENT, 1, TimeUnit::Day);
        assert!(r.is_empty());
    }

    // ── enumeration ─────────────────────────────────────────────────────

    #[test]
    fn test_enumerate_day_by_minutes() {
        let r = DateRange::day(anchor());
        assert_eq!(r.enumerate(TimeUnit::Minute).unwrap().count(), 1440);
    }

    #[test]
    fn test_enumerate_day_by_hours() {
        let r = DateRange::day(anchor());
        assert_eq!(r.enumerate(TimeUnit::Hour).unwrap().count(), 24);
    }

    #[test]
    fn test_enumerate_week_by_days() {
        let r = DateRange::week(anchor());
        assert_eq!(r.enumerate(TimeUnit::Day).unwrap().count(), 7);
    }

    #[test]
    fn test_enumerate_year_by_weeks() {
        // 52 full weeks plus a partial one
        assert_eq!(DateRange::year(anchor()).enumerate(TimeUnit::Week).unwrap().count(), 53);
        let leap = DateRange::year(midnight(2024, 6, 1));
        assert_eq!(leap.enumerate(TimeUnit::Week).unwrap().count(), 53);
    }

    #[test]
    fn test_enumerate_year_by_months() {
        let months: Vec<Moment> = DateRange::year(anchor())
            .enumerate(TimeUnit::Month)
            .unwrap()
            .collect();
        assert_eq!(months.len(), 12);
        assert_eq!(months[0], midnight(2026, 1, 1));
        assert_eq!(months[11], midnight(2026, 12, 1));
    }

    #[test]
    fn test_enumerate_year_by_days_leap_aware() {
        assert_eq!(DateRange::year(anchor()).enumerate(TimeUnit::Day).unwrap().count(), 365);
        let leap = DateRange::year(midnight(2024, 6, 1));
        assert_eq!(leap.enumerate(TimeUnit::Day).unwrap().count(), 366);
    }

    #[test]
    fn test_enumerate_decade_by_years() {
        let r = DateRange::new(midnight(2001, 1, 1), midnight(2010, 12, 31));
        assert_eq!(r.enumerate(TimeUnit::Year).unwrap().count(), 10);
    }

    #[test]
    fn test_enumerate_same_start_and_end() {
        let start = month::start_of(anchor());
        let r = DateRange::new(start, start);
        for unit in TimeUnit::ALL {
            let steps: Vec<Moment> = r.enumerate(unit).unwrap().collect();
            assert_eq!(steps, vec![start], "{unit}");
        }
    }

    #[test]
    fn test_enumerate_includes_end_on_step_boundary() {
        let r = DateRange::new(midnight(2026, 3, 1), midnight(2026, 3, 3));
        let days: Vec<Moment> = r.enumerate(TimeUnit::Day).unwrap().collect();
        assert_eq!(days, vec![midnight(2026, 3, 1), midnight(2026, 3, 2), midnight(2026, 3, 3)]);
    }

    #[test]
    fn test_enumerate_months_from_31st_does_not_drift() {
        let r = DateRange::new(midnight(2026, 1, 31), midnight(2026, 4, 30));
        let steps: Vec<u32> = r.enumerate(TimeUnit::Month).unwrap().map(|m| m.day()).collect();
        assert_eq!(steps, vec![31, 28, 31, 30]);
    }

    #[test]
    fn test_enumerate_is_restartable() {
        let r = DateRange::week(anchor());
        let first: Vec<Moment> = r.enumerate(TimeUnit::Day).unwrap().collect();
        let second: Vec<Moment> = r.enumerate(TimeUnit::Day).unwrap().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumerate_open_start_is_error() {
        let r = DateRange::new(MIN_MOMENT, anchor());
        assert_eq!(r.enumerate(TimeUnit::Day).unwrap_err(), DateRangeError::UnboundedStart);
        assert!(DateRange::EMPTY.enumerate(TimeUnit::Year).is_err());
    }

    #[test]
    fn test_enumerate_open_end_is_lazy() {
        let r = DateRange::new(anchor(), MAX_MOMENT);
        let first: Vec<Moment> = r.enumerate(TimeUnit::Hour).unwrap().take(3).collect();
        assert_eq!(first.len(), 3);
        assert_eq!(first[2], anchor() + TimeDelta::hours(2));
    }

    #[test]
    fn test_enumerate_from_is_unbounded() {
        let steps: Vec<Moment> = DateRange::enumerate_from(midnight(2026, 1, 1), TimeUnit::Year)
            .skip(100)
            .take(1)
            .collect();
        assert_eq!(steps, vec![midnight(2126, 1, 1)]);
    }

    // ── intersection / containment ──────────────────────────────────────

    #[test]
    fn test_intersects_overlapping() {
        let week = DateRange::week(anchor());
        let day_before = DateRange::day(anchor() - TimeDelta::days(1));
        assert!(week.intersects(&day_before));
        assert!(day_before.intersects(&week));
    }

    #[test]
    fn test_adjacent_weeks_do_not_intersect() {
        let this_week = DateRange::week(anchor());
        let next_week = DateRange::week(anchor() + TimeDelta::days(7));
        assert!(!this_week.intersects(&next_week));
        assert!(!next_week.intersects(&this_week));
    }

    #[test]
    fn test_touching_ranges_intersect() {
        let a = DateRange::new(midnight(2026, 1, 1), midnight(2026, 1, 5));
        let b = DateRange::new(midnight(2026, 1, 5), midnight(2026, 1, 9));
        assert!(a.intersects(&b));
        assert_eq!(a.intersection(&b).unwrap(), DateRange::new(midnight(2026, 1, 5), midnight(2026, 1, 5)));
    }

    #[test]
    fn test_contains_inclusive_bounds() {
        let r = DateRange::day(anchor());
        assert!(r.contains(r.start()));
        assert!(r.contains(r.end()));
        assert!(r.contains(anchor()));
        assert!(!r.contains(r.end() + TimeDelta::milliseconds(1)));
        assert!(!r.contains(r.start() - TimeDelta::milliseconds(1)));
    }

    #[test]
    fn test_contains_open_ranges() {
        let now = anchor();
        assert!(DateRange::new(MIN_MOMENT, now + TimeDelta::days(1)).contains(now));
        assert!(DateRange::new(now - TimeDelta::days(1), MAX_MOMENT).contains(now));
        assert!(!DateRange::new(now + TimeDelta::days(10), MAX_MOMENT).contains(now));
        assert!(!DateRange::week(now + TimeDelta::days(7)).contains(now));
    }

    #[test]
    fn test_intersection_of_overlap() {
        let a = DateRange::new(midnight(2026, 1, 1), midnight(2026, 1, 20));
        let b = DateRange::new(midnight(2026, 1, 10), midnight(2026, 2, 1));
        let expected = DateRange::new(midnight(2026, 1, 10), midnight(2026, 1, 20));
        assert_eq!(a.intersection(&b).unwrap(), expected);
        assert_eq!(b.intersection(&a).unwrap(), expected);
    }

    #[test]
    fn test_intersection_with_open_range() {
        let month = DateRange::month(anchor());
        let future = DateRange::new(anchor(), MAX_MOMENT);
        assert_eq!(
            month.intersection(&future).unwrap(),
            DateRange::new(anchor(), last_ms(2026, 2, 28))
        );
    }

    #[test]
    fn test_intersection_disjoint_is_error() {
        let a = DateRange::day(anchor());
        let b = DateRange::day(anchor() + TimeDelta::days(2));
        let err = a.intersection(&b).unwrap_err();
        assert!(matches!(err, DateRangeError::NonIntersecting(_, _)));
        assert!(err.to_string().contains("do not intersect"));
    }

    // ── short string ────────────────────────────────────────────────────

    #[test]
    fn test_to_short_string() {
        let r = DateRange::new(anchor(), anchor() + TimeDelta::days(3));
        assert_eq!(r.to_short_string(), "2026-02-18_2026-02-21");
    }

    #[test]
    fn test_to_short_string_single_day() {
        assert_eq!(
            DateRange::new(anchor(), anchor()).to_short_string(),
            "2026-02-18_2026-02-18"
        );
    }

    #[test]
    fn test_try_parse_short_round_trip() {
        let today = midnight(2026, 2, 18);
        let single = DateRange::new(today, today);
        let parsed = DateRange::try_parse_short(&single.to_short_string()).unwrap();
        assert_eq!(parsed, single);
    }

    #[test]
    fn test_try_parse_short_swaps_reversed() {
        let r = DateRange::try_parse_short("2026-03-01_2026-01-01").unwrap();
        assert_eq!(r, DateRange::new(midnight(2026, 1, 1), midnight(2026, 3, 1)));
    }

    #[test]
    fn test_try_parse_short_rejects_malformed() {
        for s in [
            "",
            "2026-02-18",
            "2026-02-18_",
            "2026-02-18_2026-02-19_2026-02-20",
            "2026-2-18_2026-02-19",
            "2026/02/18_2026/02/19",
            "2026-02-30_2026-03-01",
            " 2026-02-18_2026-02-19",
            "2026-02-18T00:00_2026-02-19",
        ] {
            assert!(DateRange::try_parse_short(s).is_none(), "{s:?} should fail");
        }
    }

    #[test]
    fn test_from_str_short() {
        let r: DateRange = "2024-02-28_2024-03-01".parse().unwrap();
        assert_eq!(r.duration(), TimeDelta::days(2));
        assert!("nonsense".parse::<DateRange>().is_err());
    }

    #[test]
    fn test_display() {
        let r = DateRange::new(midnight(2026, 1, 1), midnight(2026, 1, 2));
        assert_eq!(r.to_string(), "2026-01-01 00:00:00 - 2026-01-02 00:00:00");
    }

    #[test]
    fn test_sql_bounds() {
        let (min, max) = sql_datetime_bounds();
        assert_eq!(min, midnight(1753, 1, 1));
        assert_eq!(max.date(), NaiveDate::from_ymd_opt(9999, 12, 31).unwrap());
    }

    #[test]
    fn test_period_factories_at_sentinels() {
        let monday = CalendarOptions {
            week_start: crate::period::WeekStartDay::Monday,
        };
        for m in [MIN_MOMENT, MAX_MOMENT, DateRange::EMPTY.start()] {
            let ranges = [
                DateRange::day(m),
                DateRange::week(m),
                DateRange::week_with(m, &monday),
                DateRange::month(m),
                DateRange::quarter(m),
                DateRange::year(m),
            ];
            for range in ranges {
                assert!(range.contains(m) || range.has_open_end(), "{range} for {m}");
                assert!(range.start() <= range.end());
            }
        }
        assert!(DateRange::week(MIN_MOMENT).has_open_start());
        assert!(DateRange::week(MAX_MOMENT).has_open_end());
        assert!(DateRange::year(MAX_MOMENT).contains(MAX_MOMENT));
    }

    /// Runs `f` and reads the clock within one calendar day, retrying if midnight passes.
    fn same_day<T>(f: impl Fn() -> T) -> (Moment, T) {
        loop {
            let now = moment::now();
            let value = f();
            if day::start_of(moment::now()) == day::start_of(now) {
                return (now, value);
            }
        }
    }

    #[test]
    fn test_today_contains_now() {
        let (now, (today, yesterday, tomorrow)) =
            same_day(|| (DateRange::today(), DateRange::yesterday(), DateRange::tomorrow()));
        assert!(today.contains(now));
        assert!(!yesterday.contains(now));
        assert!(!tomorrow.contains(now));
        assert!(yesterday.end() < today.start());
        assert!(today.end() < tomorrow.start());
    }

    #[test]
    fn test_predefined_ranges_match_named_resolution() {
        let (now, ranges) = same_day(|| {
            [
                DateRange::yesterday(),
                DateRange::today(),
                DateRange::tomorrow(),
                DateRange::this_week(),
                DateRange::last_week(),
                DateRange::next_week(),
                DateRange::this_month(),
                DateRange::last_month(),
                DateRange::next_month(),
                DateRange::this_quarter(),
                DateRange::last_quarter(),
                DateRange::next_quarter(),
                DateRange::this_year(),
                DateRange::last_year(),
                DateRange::next_year(),
            ]
        });
        let calendar = &NamedRange::ALL[..15];
        for (range, named) in ranges.iter().zip(calendar) {
            assert!(range.start() <= range.end(), "{named}");
            assert_eq!(*range, named.resolve_at(now), "{named}");
        }
        for (i, this) in [3, 6, 9, 12].into_iter().enumerate() {
            let (current, last, next) = (ranges[this], ranges[this + 1], ranges[this + 2]);
            assert!(current.contains(now), "period {i}");
            assert!(last.end() < current.start(), "period {i}");
            assert!(current.end() < next.start(), "period {i}");
        }
    }

    #[test]
    fn test_open_predefined_ranges() {
        let past = DateRange::the_past();
        let future = DateRange::the_future();
        assert!(past.has_open_start());
        assert!(future.has_open_end());
        assert!(!past.intersects(&future));
        assert_eq!(DateRange::max_sql_date_range(), NamedRange::MaxSqlDateRange.resolve_at(anchor()));
        let sql_past = DateRange::past_sql_date_range();
        assert_eq!(sql_past.start(), midnight(1753, 1, 1));
        assert!(sql_past.end() <= moment::now());
    }
}
