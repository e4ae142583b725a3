mod budget_cmd;
mod cli;
mod draw_cmd;
mod logging;
mod prob_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Budget(args) => budget_cmd::run(args),
        Command::Prob(args) => prob_cmd::run(args),
        Command::Draw(args) => draw_cmd::run(args),
    }
}
