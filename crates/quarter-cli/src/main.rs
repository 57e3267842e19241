mod cli;
mod commands;
mod logging;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let format = if cli.iso {
        commands::Format::Iso
    } else {
        commands::Format::Display
    };

    match cli.command {
        Command::Show(args) => commands::show(args, format),
        Command::Range(args) => commands::range(args, format),
        Command::Of(args) => commands::of(args, format),
        Command::Today => commands::today(format),
    }
}
