//! Names command: every name the expression parser recognizes.

use anyhow::Result;
use serde::Serialize;

use date_ranger::{NamedRange, RelativeDateTime, TimeInterval};

use crate::output;

#[derive(Serialize)]
struct Names {
    relative_date_times: Vec<&'static str>,
    named_ranges: Vec<&'static str>,
    intervals: Vec<String>,
}

pub fn run() -> Result<()> {
    output::print_json(&Names {
        relative_date_times: RelativeDateTime::items().map(RelativeDateTime::name).collect(),
        named_ranges: NamedRange::ALL.iter().map(|r| r.name()).collect(),
        intervals: TimeInterval::items().map(TimeInterval::optional_plural).collect(),
    })
}
