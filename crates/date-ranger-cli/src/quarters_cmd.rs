//! Quarters command: list the quarters between two moments.

use anyhow::{Context, Result};
use serde::Serialize;

use date_ranger::{Moment, Quarter};

use crate::cli::QuartersArgs;
use crate::expr;
use crate::output;

#[derive(Serialize)]
struct QuarterRow {
    quarter: String,
    label: String,
    start: Moment,
    end: Moment,
}

pub fn run(args: QuartersArgs) -> Result<()> {
    let start = expr::parse_moment(&args.start).context("invalid START")?;
    let end = expr::parse_moment(&args.end).context("invalid END")?;

    let rows = Quarter::quarters_between(start, end)
        .map(|q| -> Result<QuarterRow> {
            Ok(QuarterRow {
                quarter: q.to_string(),
                label: q.to_long_string(),
                start: q.start()?,
                end: q.end()?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    output::print_json(&rows)
}
