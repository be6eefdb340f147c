//! Unit names used in vector expressions ("Day", "Weeks", "Hour(s)").

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::DateRangeError;
use crate::moment::TimeUnit;

/// A named [`TimeUnit`] with singular and plural spellings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval(TimeUnit);

impl TimeInterval {
    /// Whole days.
    pub const DAYS: TimeInterval = TimeInterval(TimeUnit::Day);
    /// Seven-day weeks.
    pub const WEEKS: TimeInterval = TimeInterval(TimeUnit::Week);
    /// Calendar months; offsets clamp the day of month.
    pub const MONTHS: TimeInterval = TimeInterval(TimeUnit::Month);
    /// Calendar years.
    pub const YEARS: TimeInterval = TimeInterval(TimeUnit::Year);
    /// Minutes.
    pub const MINUTES: TimeInterval = TimeInterval(TimeUnit::Minute);
    /// Hours.
    pub const HOURS: TimeInterval = TimeInterval(TimeUnit::Hour);

    /// Wraps `unit`.
    pub fn new(unit: TimeUnit) -> Self {
        Self(unit)
    }

    /// The underlying unit used for arithmetic.
    pub fn unit(self) -> TimeUnit {
        self.0
    }

    /// Singular name, e.g. "Day".
    pub fn name(self) -> &'static str {
        self.0.name()
    }

    /// "Days".
    pub fn plural(self) -> String {
        format!("{}s", self.name())
    }

    /// "Day(s)".
    pub fn optional_plural(self) -> String {
        format!("{}(s)", self.name())
    }

    /// Every interval: Day, Week, Month, Year, Minute, Hour.
    pub fn items() -> impl Iterator<Item = TimeInterval> {
        TimeUnit::ALL.into_iter().map(TimeInterval)
    }

    /// Case-insensitive lookup accepting "day", "Days" or "Day(s)".
    ///
    /// A single trailing `s` is stripped first; failing that, a trailing `(s)`.
    pub fn try_parse(s: &str) -> Option<TimeInterval> {
        let lowered = s.to_lowercase();
        let singular = lowered
            .strip_suffix('s')
            .or_else(|| lowered.strip_suffix("(s)"))
            .unwrap_or(lowered.as_str());
        let found = Self::items().find(|i| i.name().to_lowercase() == singular);
        if found.is_none() {
            debug!(input = s, "not a time interval name");
        }
        found
    }
}

impl From<TimeUnit> for TimeInterval {
    fn from(unit: TimeUnit) -> Self {
        Self(unit)
    }
}

impl Serialize for TimeInterval {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeInterval {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| DateRangeError::UnsupportedUnit(s.to_string()))
    }
}
