//! Calendar-period helpers.
//!
//! Each submodule computes the first and last instant of the period that
//! contains a moment, plus last/current/next variants. The wall-clock forms
//! (`start_of_last()`) read [`moment::now`](crate::moment::now); the `_at`
//! forms take the anchor explicitly and are what the rest of the crate calls.
//!
//! Period ends are the last millisecond before the following period begins.
//! Quarter boundaries live in [`crate::quarter`].

pub mod day;
pub mod month;
pub mod week;
pub mod year;

pub use week::WeekStartDay;

/// Options for period computations.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalendarOptions {
    /// Which day starts the week.
    pub week_start: WeekStartDay,
}
