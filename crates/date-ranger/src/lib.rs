//! # date-ranger
//!
//! Date-range calculus over wall-clock moments.
//!
//! Models closed intervals of calendar time, computes canonical boundaries for
//! calendar periods, tests intersection and containment, and reads and writes
//! two textual encodings: the absolute short form `yyyy-MM-dd_yyyy-MM-dd` and
//! symbolic forms (`14 Days Ago_Now`, `Next_5_Days`) that resolve against the
//! clock at evaluation time.
//!
//! Everything that reads "now" has an `_at(anchor)` form taking the anchor
//! explicitly.
//!
//! ## Modules
//!
//! - [`moment`] — Moment type, infinity sentinels, time units
//! - [`period`] — Day/week/month/year start and end boundaries
//! - [`quarter`] — Quarter boundaries and the `YYYYQ#` quarter value
//! - [`date_range`] — Closed ranges: intersection, enumeration, short codec
//! - [`named_range`] — Predefined ranges (Today, Last Month, The Past, ...)
//! - [`relative`] — Named symbolic moments and ranges built from them
//! - [`vector`] — `Last_3_Hours`-style expressions
//! - [`error`] — Error types

pub mod date_range;
pub mod error;
pub mod moment;
pub mod named_range;
pub mod period;
pub mod quarter;
pub mod relative;
pub mod vector;

pub use date_range::{DateRange, Steps};
pub use error::{DateRangeError, Result};
pub use moment::{Moment, TimeUnit, MAX_MOMENT, MIN_MOMENT};
pub use named_range::NamedRange;
pub use period::{CalendarOptions, WeekStartDay};
pub use quarter::{Quarter, QuarterOfYear, Quarters};
pub use relative::{RelativeDateRange, RelativeDateTime};
pub use vector::{TimeDirection, TimeInterval, TimeVector};
