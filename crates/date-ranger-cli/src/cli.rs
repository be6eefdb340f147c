use clap::{Parser, Subcommand, ValueEnum};
use date_ranger::WeekStartDay;

/// Resolve and inspect date-range expressions.
#[derive(Parser)]
#[command(
    name = "dateranger",
    version,
    about = "Resolve absolute, relative and vector date-range expressions"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Evaluate relative expressions at this moment instead of now
    /// (YYYY-MM-DD, YYYY-MM-DDTHH:MM:SS[.fff]).
    #[arg(long, global = true)]
    pub at: Option<String>,

    /// First day of the week.
    #[arg(long = "week-start", global = true, value_enum, default_value_t = WeekStart::Sunday)]
    pub week_start: WeekStart,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve an expression to a concrete range.
    Range(RangeArgs),
    /// List the moments of a range at a fixed step.
    Enumerate(EnumerateArgs),
    /// List the quarters between two moments.
    Quarters(QuartersArgs),
    /// List every recognized name.
    Names,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// `2026-01-01_2026-01-31`, `14 Days Ago_Now`, `Next_5_Days` or `Last Month`.
    pub expression: String,
}

/// Arguments for the `enumerate` subcommand.
#[derive(clap::Args)]
pub struct EnumerateArgs {
    /// Any expression accepted by `range`.
    pub expression: String,

    /// Step unit: minute, hour, day, week, month or year (plurals accepted).
    #[arg(short, long, default_value = "day")]
    pub step: String,

    /// Stop after this many moments. Required for ranges with an open end.
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Arguments for the `quarters` subcommand.
#[derive(clap::Args)]
pub struct QuartersArgs {
    /// Moment inside the first quarter.
    pub start: String,

    /// Moment inside the quarter after the last one listed.
    pub end: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl From<WeekStart> for WeekStartDay {
    fn from(value: WeekStart) -> Self {
        match value {
            WeekStart::Sunday => WeekStartDay::Sunday,
            WeekStart::Monday => WeekStartDay::Monday,
        }
    }
}
