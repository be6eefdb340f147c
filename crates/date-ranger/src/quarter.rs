//! Calendar quarters: the `Quarter` value type and quarter boundaries.
//!
//! Q1 = January–March, Q2 = April–June, Q3 = July–September,
//! Q4 = October–December.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::debug;

use crate::error::{DateRangeError, Result};
use crate::moment::{self, end_of_date, start_of_date, Moment};
use crate::period::month;

/// Position of a quarter within its year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum QuarterOfYear {
    First = 1,
    Second = 2,
    Third = 3,
    Fourth = 4,
}

impl QuarterOfYear {
    /// The quarter a month (1..=12) falls in. Months past 12 map to `Fourth`.
    pub fn from_month(month: u32) -> Self {
        match month {
            0..=3 => QuarterOfYear::First,
            4..=6 => QuarterOfYear::Second,
            7..=9 => QuarterOfYear::Third,
            _ => QuarterOfYear::Fourth,
        }
    }

    /// The quarter numbered `n` (1..=4), or `None` for any other number.
    pub fn from_number(n: u32) -> Option<Self> {
        match n {
            1 => Some(QuarterOfYear::First),
            2 => Some(QuarterOfYear::Second),
            3 => Some(QuarterOfYear::Third),
            4 => Some(QuarterOfYear::Fourth),
            _ => None,
        }
    }

    /// 1 for `First` through 4 for `Fourth`.
    pub fn number(self) -> u32 {
        self as u32
    }

    /// The variant name, "First" through "Fourth".
    pub fn name(self) -> &'static str {
        match self {
            QuarterOfYear::First => "First",
            QuarterOfYear::Second => "Second",
            QuarterOfYear::Third => "Third",
            QuarterOfYear::Fourth => "Fourth",
        }
    }

    /// First month (1-based) of the quarter.
    pub fn first_month(self) -> u32 {
        (self.number() - 1) * 3 + 1
    }

    /// Last month (1-based) of the quarter.
    pub fn last_month(self) -> u32 {
        self.number() * 3
    }
}

// ── Boundaries ──────────────────────────────────────────────────────────────

/// First day of the quarter containing `date`.
fn first_day(date: NaiveDate) -> NaiveDate {
    let mut first = month::first_day(date);
    for _ in 0..(date.month0() % 3) {
        first = month::first_day(moment::shift_date(first, -1));
    }
    first
}

/// Last day of the quarter containing `date`.
fn last_day(date: NaiveDate) -> NaiveDate {
    let mut last = month::last_day(date);
    for _ in 0..(2 - date.month0() % 3) {
        last = month::last_day(moment::shift_date(last, 1));
    }
    last
}

/// Midnight on the first day of `quarter` in `year`.
///
/// # Errors
///
/// Returns [`DateRangeError::InvalidDate`] if `year` is outside the representable range.
pub fn start_of_quarter(quarter: QuarterOfYear, year: i32) -> Result<Moment> {
    month::start_of_month(quarter.first_month(), year)
}

/// The last millisecond of the last day of `quarter` in `year`.
///
/// # Errors
///
/// Same conditions as [`start_of_quarter`].
pub fn end_of_quarter(quarter: QuarterOfYear, year: i32) -> Result<Moment> {
    month::end_of_month(quarter.last_month(), year)
}

/// Midnight on the first day of the quarter containing `m`.
pub fn start_of(m: Moment) -> Moment {
    start_of_date(first_day(m.date()))
}

/// The last millisecond of the quarter containing `m`.
pub fn end_of(m: Moment) -> Moment {
    end_of_date(last_day(m.date()))
}

/// Start of the current quarter, by the wall clock.
pub fn start_of_current() -> Moment {
    start_of(moment::now())
}

/// End of the current quarter, by the wall clock.
pub fn end_of_current() -> Moment {
    end_of(moment::now())
}

/// Start of the previous quarter, by the wall clock.
pub fn start_of_last() -> Moment {
    start_of_last_at(moment::now())
}

/// End of the previous quarter, by the wall clock.
pub fn end_of_last() -> Moment {
    end_of_last_at(moment::now())
}

/// Start of the following quarter, by the wall clock.
pub fn start_of_next() -> Moment {
    start_of_next_at(moment::now())
}

/// End of the following quarter, by the wall clock.
pub fn end_of_next() -> Moment {
    end_of_next_at(moment::now())
}

/// Start of the quarter before the one containing `anchor`.
pub fn start_of_last_at(anchor: Moment) -> Moment {
    start_of(end_of_last_at(anchor))
}

/// The millisecond before the quarter containing `anchor` begins.
///
/// Saturates at [`MIN_MOMENT`](crate::MIN_MOMENT); the `_next_` forms
/// saturate at [`MAX_MOMENT`](crate::MAX_MOMENT).
pub fn end_of_last_at(anchor: Moment) -> Moment {
    moment::shift(start_of(anchor), -moment::one_millisecond())
}

/// Midnight on the first day of the quarter after the one containing `anchor`.
pub fn start_of_next_at(anchor: Moment) -> Moment {
    moment::shift(end_of(anchor), moment::one_millisecond())
}

/// End of the quarter after the one containing `anchor`.
pub fn end_of_next_at(anchor: Moment) -> Moment {
    end_of(start_of_next_at(anchor))
}

// ── Quarter ─────────────────────────────────────────────────────────────────

/// A specific quarter of a specific year, e.g. `2014Q1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Quarter {
    year: i32,
    quarter_of_year: QuarterOfYear,
}

impl Quarter {
    /// Any `i32` year is accepted; [`Quarter::start`] and [`Quarter::end`]
    /// report years chrono cannot represent.
    pub fn new(quarter_of_year: QuarterOfYear, year: i32) -> Self {
        Self {
            year,
            quarter_of_year,
        }
    }

    /// The quarter containing `m`.
    pub fn from_moment(m: Moment) -> Self {
        Self::new(QuarterOfYear::from_month(m.month()), m.year())
    }

    /// The quarter containing the current wall-clock moment.
    pub fn current() -> Self {
        Self::from_moment(moment::now())
    }

    /// The calendar year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Which quarter of [`Quarter::year`] this is.
    pub fn quarter_of_year(&self) -> QuarterOfYear {
        self.quarter_of_year
    }

    /// The following quarter; Q4 rolls over to Q1 of the next year.
    ///
    /// Q4 of `i32::MAX` has no successor and is returned unchanged.
    pub fn next(&self) -> Self {
        match self.quarter_of_year {
            QuarterOfYear::First => Self::new(QuarterOfYear::Second, self.year),
            QuarterOfYear::Second => Self::new(QuarterOfYear::Third, self.year),
            QuarterOfYear::Third => Self::new(QuarterOfYear::Fourth, self.year),
            QuarterOfYear::Fourth => match self.year.checked_add(1) {
                Some(year) => Self::new(QuarterOfYear::First, year),
                None => *self,
            },
        }
    }

    /// The preceding quarter; Q1 rolls back to Q4 of the previous year.
    ///
    /// Q1 of `i32::MIN` has no predecessor and is returned unchanged.
    pub fn previous(&self) -> Self {
        match self.quarter_of_year {
            QuarterOfYear::First => match self.year.checked_sub(1) {
                Some(year) => Self::new(QuarterOfYear::Fourth, year),
                None => *self,
            },
            QuarterOfYear::Second => Self::new(QuarterOfYear::First, self.year),
            QuarterOfYear::Third => Self::new(QuarterOfYear::Second, self.year),
            QuarterOfYear::Fourth => Self::new(QuarterOfYear::Third, self.year),
        }
    }

    /// First moment of this quarter.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::InvalidDate`] if the year is outside the representable range.
    pub fn start(&self) -> Result<Moment> {
        start_of_quarter(self.quarter_of_year, self.year)
    }

    /// Last millisecond of this quarter.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Quarter::start`].
    pub fn end(&self) -> Result<Moment> {
        end_of_quarter(self.quarter_of_year, self.year)
    }

    /// Ordering key: the digits of the year followed by the quarter digit
    /// (`2009Q1` → `20091`). Only sound because the quarter is always a
    /// single digit 1..=4.
    fn sort_key(&self) -> i64 {
        self.year as i64 * 10 + self.quarter_of_year.number() as i64
    }

    /// `Quarter First, 2014` style label, naming the quarter rather than
    /// numbering it.
    pub fn to_long_string(&self) -> String {
        format!("Quarter {}, {}", self.quarter_of_year.name(), self.year)
    }

    /// Parse `YYYYQ#`, e.g. `2014Q1`.
    ///
    /// Requires exactly one `Q`, an integer year and a quarter in 1..=4.
    /// Anything else yields `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use date_ranger::{Quarter, QuarterOfYear};
    ///
    /// let q = Quarter::try_parse("2014Q1").unwrap();
    /// assert_eq!(q.year(), 2014);
    /// assert_eq!(q.quarter_of_year(), QuarterOfYear::First);
    /// assert_eq!(q.to_string(), "2014Q1");
    /// assert!(Quarter::try_parse("2014Q5").is_none());
    /// ```
    pub fn try_parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s.split('Q').collect();
        if parts.len() != 2 {
            debug!(input = s, "quarter string needs exactly one 'Q'");
            return None;
        }
        let year = parts[0].parse::<i32>().ok()?;
        let quarter = parts[1].parse::<u32>().ok().and_then(QuarterOfYear::from_number)?;
        Some(Self::new(quarter, year))
    }

    /// Every quarter from the one containing `start` up to, but excluding,
    /// the one containing `end`.
    pub fn quarters_between(start: Moment, end: Moment) -> Quarters {
        Quarters {
            current: Self::from_moment(start),
            last: Self::from_moment(end),
        }
    }
}

impl PartialOrd for Quarter {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Quarter {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Q{}", self.year, self.quarter_of_year.number())
    }
}

impl FromStr for Quarter {
    type Err = DateRangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_parse(s)
            .ok_or_else(|| DateRangeError::InvalidExpression(format!("not a YYYYQ# quarter: '{s}'")))
    }
}

/// Lazy half-open sequence of quarters, see [`Quarter::quarters_between`].
#[derive(Debug, Clone)]
pub struct Quarters {
    current: Quarter,
    last: Quarter,
}

impl Iterator for Quarters {
    type Item = Quarter;

    fn next(&mut self) -> Option<Quarter> {
        if self.current >= self.last {
            return None;
        }
        let item = self.current;
        self.current = item.next();
        Some(item)
    }
}
