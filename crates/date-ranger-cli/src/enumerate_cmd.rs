//! Enumerate command: step through a resolved range.

use anyhow::{bail, Context, Result};
use tracing::info;

use date_ranger::{Moment, TimeInterval};

use crate::cli::EnumerateArgs;
use crate::expr::{self, Evaluation};
use crate::output;

pub fn run(args: EnumerateArgs, eval: &Evaluation) -> Result<()> {
    let step: TimeInterval = args
        .step
        .parse()
        .with_context(|| format!("invalid --step '{}'", args.step))?;
    let (_, range) = expr::resolve(&args.expression, eval)?;

    if range.has_open_end() && args.limit.is_none() {
        bail!("range {range} has an open end; pass --limit");
    }

    let steps = range
        .enumerate(step.unit())
        .with_context(|| format!("cannot enumerate {range}"))?;
    let moments: Vec<Moment> = match args.limit {
        Some(limit) => steps.take(limit).collect(),
        None => steps.collect(),
    };
    info!(%range, %step, count = moments.len(), "enumerated");

    output::print_json(&moments)
}
