//! Range command: resolve one expression.

use anyhow::Result;
use serde::Serialize;
use tracing::info;

use date_ranger::Moment;

use crate::cli::RangeArgs;
use crate::expr::{self, Evaluation, ExpressionKind};
use crate::output;

#[derive(Serialize)]
struct ResolvedRange<'a> {
    expression: &'a str,
    kind: ExpressionKind,
    start: Option<Moment>,
    end: Option<Moment>,
    short: String,
    display: String,
    duration_ms: Option<i64>,
}

pub fn run(args: RangeArgs, eval: &Evaluation) -> Result<()> {
    let (kind, range) = expr::resolve(&args.expression, eval)?;
    info!(expression = %args.expression, ?kind, %range, "resolved");

    let bounded = !range.has_open_start() && !range.has_open_end();
    output::print_json(&ResolvedRange {
        expression: &args.expression,
        kind,
        start: expr::bound(range.start()),
        end: expr::bound(range.end()),
        short: range.to_short_string(),
        display: range.to_string(),
        duration_ms: bounded.then(|| range.duration().num_milliseconds()),
    })
}
