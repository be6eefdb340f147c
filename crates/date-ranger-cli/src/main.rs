mod cli;
mod enumerate_cmd;
mod expr;
mod logging;
mod names_cmd;
mod output;
mod quarters_cmd;
mod range_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};
use crate::expr::Evaluation;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let eval = Evaluation::from_cli(&cli)?;
    match cli.command {
        Command::Range(args) => range_cmd::run(args, &eval),
        Command::Enumerate(args) => enumerate_cmd::run(args, &eval),
        Command::Quarters(args) => quarters_cmd::run(args),
        Command::Names => names_cmd::run(),
    }
}
