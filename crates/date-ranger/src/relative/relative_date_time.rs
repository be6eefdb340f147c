//! Named symbolic moments ("Now", "Start of Last Week", "14 Days Ago", ...).
//!
//! The registry is closed: every entry is a [`RelativeDateTime`] variant and
//! the lower-cased name index is built once on first lookup.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use chrono::TimeDelta;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::DateRangeError;
use crate::moment::{self, shift, Moment, MAX_MOMENT, MIN_MOMENT};
use crate::period::{day, month, week, year, CalendarOptions};

/// A symbolic moment evaluated against an anchor.
///
/// Values order by [`name`](RelativeDateTime::name) and serialize as that
/// name. Offsets that would leave the representable span saturate at
/// [`MIN_MOMENT`] or [`MAX_MOMENT`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use date_ranger::RelativeDateTime;
///
/// let anchor = NaiveDate::from_ymd_opt(2026, 2, 18)
///     .unwrap()
///     .and_hms_opt(14, 30, 0)
///     .unwrap();
/// let start = RelativeDateTime::try_parse("start of last month").unwrap();
/// assert_eq!(start, RelativeDateTime::StartOfLastMonth);
/// assert_eq!(start.evaluate_at(anchor).to_string(), "2026-01-01 00:00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelativeDateTime {
    /// The anchor itself.
    Now,
    StartOfYesterday,
    EndOfYesterday,
    StartOfTomorrow,
    EndOfTomorrow,
    /// [`MIN_MOMENT`], an open start.
    AnyTimeInPast,
    /// [`MAX_MOMENT`], an open end.
    AnyTimeInFuture,
    StartOfLastWeek,
    StartOfThisWeek,
    StartOfNextWeek,
    /// The anchor minus seven days, keeping the time of day.
    SevenDaysAgo,
    FourteenDaysAgo,
    TwentyEightDaysAgo,
    /// The anchor plus seven days, keeping the time of day.
    SevenDaysFromNow,
    FourteenDaysFromNow,
    TwentyEightDaysFromNow,
    EndOfLastWeek,
    EndOfThisWeek,
    EndOfNextWeek,
    StartOfLastMonth,
    StartOfThisMonth,
    StartOfNextMonth,
    EndOfLastMonth,
    EndOfThisMonth,
    EndOfNextMonth,
    StartOfLastYear,
    StartOfThisYear,
    StartOfNextYear,
    EndOfLastYear,
    EndOfThisYear,
    EndOfNextYear,
}

impl RelativeDateTime {
    /// Every registry entry, in declaration order. See [`RelativeDateTime::items`]
    /// for name order.
    pub const ALL: [RelativeDateTime; 31] = [
        RelativeDateTime::Now,
        RelativeDateTime::StartOfYesterday,
        RelativeDateTime::EndOfYesterday,
        RelativeDateTime::StartOfTomorrow,
        RelativeDateTime::EndOfTomorrow,
        RelativeDateTime::AnyTimeInPast,
        RelativeDateTime::AnyTimeInFuture,
        RelativeDateTime::StartOfLastWeek,
        RelativeDateTime::StartOfThisWeek,
        RelativeDateTime::StartOfNextWeek,
        RelativeDateTime::SevenDaysAgo,
        RelativeDateTime::FourteenDaysAgo,
        RelativeDateTime::TwentyEightDaysAgo,
        RelativeDateTime::SevenDaysFromNow,
        RelativeDateTime::FourteenDaysFromNow,
        RelativeDateTime::TwentyEightDaysFromNow,
        RelativeDateTime::EndOfLastWeek,
        RelativeDateTime::EndOfThisWeek,
        RelativeDateTime::EndOfNextWeek,
        RelativeDateTime::StartOfLastMonth,
        RelativeDateTime::StartOfThisMonth,
        RelativeDateTime::StartOfNextMonth,
        RelativeDateTime::EndOfLastMonth,
        RelativeDateTime::EndOfThisMonth,
        RelativeDateTime::EndOfNextMonth,
        RelativeDateTime::StartOfLastYear,
        RelativeDateTime::StartOfThisYear,
        RelativeDateTime::StartOfNextYear,
        RelativeDateTime::EndOfLastYear,
        RelativeDateTime::EndOfThisYear,
        RelativeDateTime::EndOfNextYear,
    ];

    /// The human-friendly name, e.g. "Start of Last Week".
    pub fn name(self) -> &'static str {
        match self {
            RelativeDateTime::Now => "Now",
            RelativeDateTime::StartOfYesterday => "Start of Yesterday",
            RelativeDateTime::EndOfYesterday => "End of Yesterday",
            RelativeDateTime::StartOfTomorrow => "Start of Tomorrow",
            RelativeDateTime::EndOfTomorrow => "End of Tomorrow",
            RelativeDateTime::AnyTimeInPast => "Any Time in Past",
            RelativeDateTime::AnyTimeInFuture => "Any Time in Future",
            RelativeDateTime::StartOfLastWeek => "Start of Last Week",
            RelativeDateTime::StartOfThisWeek => "Start of This Week",
            RelativeDateTime::StartOfNextWeek => "Start of Next Week",
            RelativeDateTime::SevenDaysAgo => "7 Days Ago",
            RelativeDateTime::FourteenDaysAgo => "14 Days Ago",
            RelativeDateTime::TwentyEightDaysAgo => "28 Days Ago",
            RelativeDateTime::SevenDaysFromNow => "7 Days From Now",
            RelativeDateTime::FourteenDaysFromNow => "14 Days From Now",
            RelativeDateTime::TwentyEightDaysFromNow => "28 Days From Now",
            RelativeDateTime::EndOfLastWeek => "End of Last Week",
            RelativeDateTime::EndOfThisWeek => "End of This Week",
            RelativeDateTime::EndOfNextWeek => "End of Next Week",
            RelativeDateTime::StartOfLastMonth => "Start of Last Month",
            RelativeDateTime::StartOfThisMonth => "Start of This Month",
            RelativeDateTime::StartOfNextMonth => "Start of Next Month",
            RelativeDateTime::EndOfLastMonth => "End of Last Month",
            RelativeDateTime::EndOfThisMonth => "End of This Month",
            RelativeDateTime::EndOfNextMonth => "End of Next Month",
            RelativeDateTime::StartOfLastYear => "Start of Last Year",
            RelativeDateTime::StartOfThisYear => "Start of This Year",
            RelativeDateTime::StartOfNextYear => "Start of Next Year",
            RelativeDateTime::EndOfLastYear => "End of Last Year",
            RelativeDateTime::EndOfThisYear => "End of This Year",
            RelativeDateTime::EndOfNextYear => "End of Next Year",
        }
    }

    /// Evaluate against the current wall clock.
    pub fn evaluate(self) -> Moment {
        self.evaluate_at(moment::now())
    }

    /// Evaluate against `anchor` with default options.
    pub fn evaluate_at(self, anchor: Moment) -> Moment {
        self.evaluate_with(anchor, &CalendarOptions::default())
    }

    /// Evaluate against `anchor`; week entries honor `options.week_start`.
    pub fn evaluate_with(self, anchor: Moment, options: &CalendarOptions) -> Moment {
        let week_start = options.week_start;
        let days = |n: i64| shift(anchor, TimeDelta::days(n));

        match self {
            RelativeDateTime::Now => anchor,
            RelativeDateTime::StartOfYesterday => day::start_of_yesterday_at(anchor),
            RelativeDateTime::EndOfYesterday => day::end_of_yesterday_at(anchor),
            RelativeDateTime::StartOfTomorrow => day::start_of_tomorrow_at(anchor),
            RelativeDateTime::EndOfTomorrow => day::end_of_tomorrow_at(anchor),
            RelativeDateTime::AnyTimeInPast => MIN_MOMENT,
            RelativeDateTime::AnyTimeInFuture => MAX_MOMENT,
            RelativeDateTime::StartOfLastWeek => week::start_of_last_with(anchor, week_start),
            RelativeDateTime::StartOfThisWeek => week::start_of_with(anchor, week_start),
            RelativeDateTime::StartOfNextWeek => week::start_of_next_with(anchor, week_start),
            RelativeDateTime::SevenDaysAgo => days(-7),
            RelativeDateTime::FourteenDaysAgo => days(-14),
            RelativeDateTime::TwentyEightDaysAgo => days(-28),
            RelativeDateTime::SevenDaysFromNow => days(7),
            RelativeDateTime::FourteenDaysFromNow => days(14),
            RelativeDateTime::TwentyEightDaysFromNow => days(28),
            RelativeDateTime::EndOfLastWeek => week::end_of_last_with(anchor, week_start),
            RelativeDateTime::EndOfThisWeek => week::end_of_with(anchor, week_start),
            RelativeDateTime::EndOfNextWeek => week::end_of_next_with(anchor, week_start),
            RelativeDateTime::StartOfLastMonth => month::start_of_last_at(anchor),
            RelativeDateTime::StartOfThisMonth => month::start_of(anchor),
            RelativeDateTime::StartOfNextMonth => month::start_of_next_at(anchor),
            RelativeDateTime::EndOfLastMonth => month::end_of_last_at(anchor),
            RelativeDateTime::EndOfThisMonth => month::end_of(anchor),
            RelativeDateTime::EndOfNextMonth => month::end_of_next_at(anchor),
            RelativeDateTime::StartOfLastYear => year::start_of_last_at(anchor),
            RelativeDateTime::StartOfThisYear => year::start_of(anchor),
            RelativeDateTime::StartOfNextYear => year::start_of_next_at(anchor),
            RelativeDateTime::EndOfLastYear => year::end_of_last_at(anchor),
            RelativeDateTime::EndOfThisYear => year::end_of(anchor),
            RelativeDateTime::EndOfNextYear => year::end_of_next_at(anchor),
        }
    }

    /// Case-insensitive exact name match, e.g. "start of last week".
    pub fn try_parse(s: &str) -> Option<RelativeDateTime> {
        let found = registry().get(&s.to_lowercase()).copied();
        if found.is_none() {
            debug!(input = s, "not a relative date-time name");
        }
        found
    }

    /// All entries, sorted by name.
    pub fn items() -> impl Iterator<Item = RelativeDateTime> {
        let mut items = Self::ALL;
        items.sort();
        items.into_iter()
    }
}

fn registry() -> &'static BTreeMap<String, RelativeDateTime> {
    static REGISTRY: OnceLock<BTreeMap<String, RelativeDateTime>> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        RelativeDateTime::ALL
            .into_iter()
            .map(|r| (r.name().to_lowercase(), r))
            .collect()
    })
}

impl Ord for RelativeDateTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name().cmp(other.name())
    }
}

impl PartialOrd for RelativeDateTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for RelativeDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for RelativeDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RelativeDateTime {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| {
            DateRangeError::InvalidExpression(format!("unknown relative date-time '{s}'"))
        })
    }
}
