//! Expression parsing shared by the subcommands.

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveDateTime, SubsecRound};
use serde::Serialize;
use tracing::debug;

use date_ranger::moment;
use date_ranger::{
    CalendarOptions, DateRange, Moment, NamedRange, RelativeDateRange, TimeVector,
};

use crate::cli::Cli;

/// Anchor and calendar options every expression is evaluated with.
pub struct Evaluation {
    pub anchor: Moment,
    pub options: CalendarOptions,
}

impl Evaluation {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let anchor = match &cli.at {
            Some(at) => parse_moment(at).context("invalid --at")?,
            None => moment::now(),
        };
        Ok(Self {
            anchor,
            options: CalendarOptions {
                week_start: cli.week_start.into(),
            },
        })
    }
}

/// Which syntax an expression was read as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    Short,
    Relative,
    Vector,
    Named,
}

/// Resolve `expr` against `eval`, trying each syntax in turn.
pub fn resolve(expr: &str, eval: &Evaluation) -> Result<(ExpressionKind, DateRange)> {
    if let Some(range) = DateRange::try_parse_short(expr) {
        return Ok((ExpressionKind::Short, range));
    }
    if let Some(relative) = RelativeDateRange::try_parse(expr) {
        return Ok((
            ExpressionKind::Relative,
            relative.to_date_range_with(eval.anchor, &eval.options),
        ));
    }
    if let Some(vector) = TimeVector::try_parse(expr) {
        return Ok((ExpressionKind::Vector, vector.to_date_range_at(eval.anchor)));
    }
    if let Some(named) = NamedRange::try_parse(expr) {
        return Ok((ExpressionKind::Named, named.resolve_with(eval.anchor, &eval.options)));
    }
    bail!(
        "unrecognized expression '{expr}': expected yyyy-MM-dd_yyyy-MM-dd, \
         <name>_<name>, <Last|Next>_<n>_<unit> or a range name (see `dateranger names`)"
    )
}

/// Parse `YYYY-MM-DD`, `YYYY-MM-DDTHH:MM:SS[.fff]` or the same with a space.
pub fn parse_moment(s: &str) -> Result<Moment> {
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(m) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(m.trunc_subsecs(3));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(moment::start_of_date(date));
    }
    debug!(input = s, "unparseable moment");
    bail!("invalid moment '{s}': expected YYYY-MM-DD or YYYY-MM-DDTHH:MM:SS")
}

/// Bound as JSON: `null` for an open end.
pub fn bound(m: Moment) -> Option<Moment> {
    (!moment::is_open_bound(m)).then_some(m)
}
