//! Vector expressions: `<Last|Next>_<n>_<unit>`.

mod time_interval;
mod time_vector;

pub use time_interval::TimeInterval;
pub use time_vector::{TimeDirection, TimeVector};
