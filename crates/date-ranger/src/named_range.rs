//! Predefined date ranges addressed by name ("Today", "Last Month", ...).
//!
//! Every range is resolved against an explicit anchor via
//! [`NamedRange::resolve_at`]; [`NamedRange::resolve`] anchors at
//! [`moment::now`]. Two resolutions in the same calendar period agree.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::date_range::{sql_datetime_bounds, DateRange};
use crate::error::DateRangeError;
use crate::moment::{self, one_millisecond, shift, Moment, MAX_MOMENT, MIN_MOMENT};
use crate::period::{day, month, week, year, CalendarOptions};
use crate::quarter;

/// A predefined range, resolved against an anchor moment.
///
/// Calendar ranges cover the whole period from midnight to the last
/// millisecond. Near [`MIN_MOMENT`] or [`MAX_MOMENT`] a period that would fall
/// outside the representable span saturates to the sentinel instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NamedRange {
    /// The day before the anchor's day.
    Yesterday,
    /// The anchor's day.
    Today,
    /// The day after the anchor's day.
    Tomorrow,
    ThisWeek,
    LastWeek,
    NextWeek,
    ThisMonth,
    LastMonth,
    NextMonth,
    ThisQuarter,
    LastQuarter,
    NextQuarter,
    ThisYear,
    LastYear,
    NextYear,
    /// Open start up to one millisecond before the anchor.
    ThePast,
    /// One millisecond after the anchor to an open end.
    TheFuture,
    /// 1753-01-01 through 9999-12-31 23:59:59.997, the SQL Server `datetime` span.
    MaxSqlDateRange,
    /// The SQL Server `datetime` minimum up to the anchor.
    PastSqlDateRange,
}

impl NamedRange {
    /// Every named range, in declaration order.
    pub const ALL: [NamedRange; 19] = [
        NamedRange::Yesterday,
        NamedRange::Today,
        NamedRange::Tomorrow,
        NamedRange::ThisWeek,
        NamedRange::LastWeek,
        NamedRange::NextWeek,
        NamedRange::ThisMonth,
        NamedRange::LastMonth,
        NamedRange::NextMonth,
        NamedRange::ThisQuarter,
        NamedRange::LastQuarter,
        NamedRange::NextQuarter,
        NamedRange::ThisYear,
        NamedRange::LastYear,
        NamedRange::NextYear,
        NamedRange::ThePast,
        NamedRange::TheFuture,
        NamedRange::MaxSqlDateRange,
        NamedRange::PastSqlDateRange,
    ];

    /// The display name, e.g. "Last Month".
    pub fn name(self) -> &'static str {
        match self {
            NamedRange::Yesterday => "Yesterday",
            NamedRange::Today => "Today",
            NamedRange::Tomorrow => "Tomorrow",
            NamedRange::ThisWeek => "This Week",
            NamedRange::LastWeek => "Last Week",
            NamedRange::NextWeek => "Next Week",
            NamedRange::ThisMonth => "This Month",
            NamedRange::LastMonth => "Last Month",
            NamedRange::NextMonth => "Next Month",
            NamedRange::ThisQuarter => "This Quarter",
            NamedRange::LastQuarter => "Last Quarter",
            NamedRange::NextQuarter => "Next Quarter",
            NamedRange::ThisYear => "This Year",
            NamedRange::LastYear => "Last Year",
            NamedRange::NextYear => "Next Year",
            NamedRange::ThePast => "The Past",
            NamedRange::TheFuture => "The Future",
            NamedRange::MaxSqlDateRange => "Max SQL Date Range",
            NamedRange::PastSqlDateRange => "Past SQL Date Range",
        }
    }

    /// Resolve against the current wall clock with default options.
    pub fn resolve(self) -> DateRange {
        self.resolve_at(moment::now())
    }

    /// Resolve against `anchor` with default options.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use date_ranger::NamedRange;
    ///
    /// let anchor = NaiveDate::from_ymd_opt(2026, 2, 18)
    ///     .unwrap()
    ///     .and_hms_opt(14, 30, 0)
    ///     .unwrap();
    /// let last_month = NamedRange::LastMonth.resolve_at(anchor);
    /// assert_eq!(last_month.to_short_string(), "2026-01-01_2026-01-31");
    /// ```
    pub fn resolve_at(self, anchor: Moment) -> DateRange {
        self.resolve_with(anchor, &CalendarOptions::default())
    }

    /// Resolve against `anchor`; week ranges honor `options.week_start`.
    pub fn resolve_with(self, anchor: Moment, options: &CalendarOptions) -> DateRange {
        let week_start = options.week_start;

        match self {
            NamedRange::Yesterday => DateRange::new(
                day::start_of_yesterday_at(anchor),
                day::end_of_yesterday_at(anchor),
            ),
            NamedRange::Today => DateRange::day(anchor),
            NamedRange::Tomorrow => DateRange::new(
                day::start_of_tomorrow_at(anchor),
                day::end_of_tomorrow_at(anchor),
            ),
            NamedRange::ThisWeek => DateRange::week_with(anchor, options),
            NamedRange::LastWeek => DateRange::new(
                week::start_of_last_with(anchor, week_start),
                week::end_of_last_with(anchor, week_start),
            ),
            NamedRange::NextWeek => DateRange::new(
                week::start_of_next_with(anchor, week_start),
                week::end_of_next_with(anchor, week_start),
            ),
            NamedRange::ThisMonth => DateRange::month(anchor),
            NamedRange::LastMonth => {
                DateRange::new(month::start_of_last_at(anchor), month::end_of_last_at(anchor))
            }
            NamedRange::NextMonth => {
                DateRange::new(month::start_of_next_at(anchor), month::end_of_next_at(anchor))
            }
            NamedRange::ThisQuarter => DateRange::quarter(anchor),
            NamedRange::LastQuarter => DateRange::new(
                quarter::start_of_last_at(anchor),
                quarter::end_of_last_at(anchor),
            ),
            NamedRange::NextQuarter => DateRange::new(
                quarter::start_of_next_at(anchor),
                quarter::end_of_next_at(anchor),
            ),
            NamedRange::ThisYear => DateRange::year(anchor),
            NamedRange::LastYear => {
                DateRange::new(year::start_of_last_at(anchor), year::end_of_last_at(anchor))
            }
            NamedRange::NextYear => {
                DateRange::new(year::start_of_next_at(anchor), year::end_of_next_at(anchor))
            }
            NamedRange::ThePast => DateRange::new(MIN_MOMENT, shift(anchor, -one_millisecond())),
            NamedRange::TheFuture => DateRange::new(shift(anchor, one_millisecond()), MAX_MOMENT),
            NamedRange::MaxSqlDateRange => {
                let (min, max) = sql_datetime_bounds();
                DateRange::new(min, max)
            }
            NamedRange::PastSqlDateRange => {
                let (min, _) = sql_datetime_bounds();
                DateRange::new(min, anchor)
            }
        }
    }

    /// Case-insensitive name lookup; spaces and underscores are ignored, so
    /// "last month", "LastMonth" and "last_month" all match.
    pub fn try_parse(s: &str) -> Option<NamedRange> {
        let key = normalize(s);
        let found = Self::ALL.into_iter().find(|r| normalize(r.name()) == key);
        if found.is_none() {
            debug!(input = s, "unknown range name");
        }
        found
    }
}

fn normalize(s: &str) -> String {
    s.chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

impl fmt::Display for NamedRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NamedRange {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s)
            .ok_or_else(|| DateRangeError::InvalidExpression(format!("unknown range name '{s}'")))
    }
}
