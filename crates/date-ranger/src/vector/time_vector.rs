//! Direction + magnitude + unit expressions such as `Next_5_Days`.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use super::TimeInterval;
use crate::date_range::DateRange;
use crate::error::DateRangeError;
use crate::moment::{self, Moment};

/// Which way a [`TimeVector`] points from its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TimeDirection {
    /// Toward the past.
    Last,
    /// Toward the future.
    Next,
}

impl TimeDirection {
    /// "Last" or "Next".
    pub fn name(self) -> &'static str {
        match self {
            TimeDirection::Last => "Last",
            TimeDirection::Next => "Next",
        }
    }
}

impl fmt::Display for TimeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A range relative to now, such as "the last 3 hours".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TimeVector {
    pub direction: TimeDirection,
    pub magnitude: i32,
    pub interval: TimeInterval,
}

impl TimeVector {
    /// Creates a vector. A negative `magnitude` reverses `direction`.
    pub fn new(direction: TimeDirection, magnitude: i32, interval: TimeInterval) -> Self {
        Self {
            direction,
            magnitude,
            interval,
        }
    }

    /// Parse `<direction>_<magnitude>_<unit>`.
    ///
    /// Any direction token other than "next" (case-insensitive) reads as
    /// [`TimeDirection::Last`]. The unit accepts singular and plural forms.
    ///
    /// # Examples
    ///
    /// ```
    /// use date_ranger::{TimeDirection, TimeInterval, TimeVector};
    ///
    /// let v = TimeVector::try_parse("Next_5_Days").unwrap();
    /// assert_eq!(v.direction, TimeDirection::Next);
    /// assert_eq!(v.magnitude, 5);
    /// assert_eq!(v.interval, TimeInterval::DAYS);
    /// assert_eq!(v.to_string(), "Next_5_Day");
    ///
    /// assert!(TimeVector::try_parse("Next_five_Days").is_none());
    /// assert!(TimeVector::try_parse("Next_5").is_none());
    /// ```
    pub fn try_parse(s: &str) -> Option<TimeVector> {
        let parts: Vec<&str> = s.split('_').collect();
        let [direction, magnitude, unit] = parts.as_slice() else {
            debug!(input = s, "time vector needs exactly three '_'-separated parts");
            return None;
        };
        let direction = if direction.eq_ignore_ascii_case("next") {
            TimeDirection::Next
        } else {
            TimeDirection::Last
        };
        let Ok(magnitude) = magnitude.parse::<i32>() else {
            debug!(input = s, "time vector magnitude is not an integer");
            return None;
        };
        let interval = TimeInterval::try_parse(unit)?;
        Some(Self::new(direction, magnitude, interval))
    }

    /// Resolve against the current wall clock.
    pub fn to_date_range(&self) -> DateRange {
        self.to_date_range_at(moment::now())
    }

    /// The range between `anchor` and `anchor ± magnitude × unit`.
    ///
    /// `Last` offsets backwards. Like [`DateRange::date_range_from`], an offset
    /// that cannot be applied yields [`DateRange::EMPTY`].
    pub fn to_date_range_at(&self, anchor: Moment) -> DateRange {
        let signed = match self.direction {
            TimeDirection::Next => Some(self.magnitude),
            TimeDirection::Last => self.magnitude.checked_neg(),
        };
        match signed {
            Some(magnitude) => DateRange::date_range_from(anchor, magnitude, self.interval.unit()),
            None => {
                debug!(vector = %self, "magnitude cannot be negated; returning EMPTY");
                DateRange::EMPTY
            }
        }
    }
}

impl fmt::Display for TimeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.direction, self.magnitude, self.interval)
    }
}

impl FromStr for TimeVector {
    type Err = DateRangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| {
            DateRangeError::InvalidExpression(format!("not a <Last|Next>_<n>_<unit> vector: '{s}'"))
        })
    }
}
