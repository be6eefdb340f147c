//! A date range bounded by two [`RelativeDateTime`]s, e.g. `14 Days Ago_Now`.

use std::fmt;
use std::str::FromStr;

use chrono::TimeDelta;
use serde::Serialize;
use tracing::debug;

use super::RelativeDateTime;
use crate::date_range::DateRange;
use crate::error::{DateRangeError, Result};
use crate::moment::{self, Moment};
use crate::period::CalendarOptions;

/// Symbolic interval; resolves to a [`DateRange`] when evaluated.
///
/// The bounds are ordered once, at construction, by their evaluated moments.
/// The resolved [`DateRange`] is re-normalized on every evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct RelativeDateRange {
    start: RelativeDateTime,
    end: RelativeDateTime,
}

impl RelativeDateRange {
    /// Creates a range, putting the bound that evaluates earlier now first.
    pub fn new(a: RelativeDateTime, b: RelativeDateTime) -> Self {
        Self::new_at(a, b, moment::now())
    }

    /// Like [`RelativeDateRange::new`], ordering the bounds as evaluated at `anchor`.
    pub fn new_at(a: RelativeDateTime, b: RelativeDateTime, anchor: Moment) -> Self {
        if a.evaluate_at(anchor) < b.evaluate_at(anchor) {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Builds a range from bounds that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`DateRangeError::MissingBound`] naming the absent side.
    pub fn from_options(
        start: Option<RelativeDateTime>,
        end: Option<RelativeDateTime>,
    ) -> Result<Self> {
        let start = start.ok_or(DateRangeError::MissingBound("start"))?;
        let end = end.ok_or(DateRangeError::MissingBound("end"))?;
        Ok(Self::new(start, end))
    }

    /// The symbolic lower bound.
    pub fn start(&self) -> RelativeDateTime {
        self.start
    }

    /// The symbolic upper bound.
    pub fn end(&self) -> RelativeDateTime {
        self.end
    }

    /// Span between the evaluated bounds, as of now.
    pub fn duration(&self) -> TimeDelta {
        self.duration_at(moment::now())
    }

    /// Span between the bounds evaluated against `anchor`.
    pub fn duration_at(&self, anchor: Moment) -> TimeDelta {
        self.to_date_range_at(anchor).duration()
    }

    /// Evaluate both bounds against the current wall clock.
    pub fn to_date_range(&self) -> DateRange {
        self.to_date_range_at(moment::now())
    }

    /// Evaluate both bounds against `anchor` with default options.
    pub fn to_date_range_at(&self, anchor: Moment) -> DateRange {
        self.to_date_range_with(anchor, &CalendarOptions::default())
    }

    /// Evaluate both bounds against `anchor`; week bounds honor `options`.
    pub fn to_date_range_with(&self, anchor: Moment, options: &CalendarOptions) -> DateRange {
        DateRange::new(
            self.start.evaluate_with(anchor, options),
            self.end.evaluate_with(anchor, options),
        )
    }

    /// Parse `<name>_<name>`, where both halves are relative date-time names.
    pub fn try_parse(s: &str) -> Option<RelativeDateRange> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 2 {
            debug!(input = s, "relative range needs exactly one '_'");
            return None;
        }
        let start = RelativeDateTime::try_parse(parts[0])?;
        let end = RelativeDateTime::try_parse(parts[1])?;
        Some(Self::new(start, end))
    }
}

impl fmt::Display for RelativeDateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}

impl FromStr for RelativeDateRange {
    type Err = DateRangeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| {
            DateRangeError::InvalidExpression(format!("not a <name>_<name> relative range: '{s}'"))
        })
    }
}
