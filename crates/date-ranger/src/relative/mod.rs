//! Symbolic moments and ranges that resolve against "now".

mod relative_date_range;
mod relative_date_time;

pub use relative_date_range::RelativeDateRange;
pub use relative_date_time::RelativeDateTime;
