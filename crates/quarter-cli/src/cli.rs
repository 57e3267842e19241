use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Calendar quarter calculator.
#[derive(Parser)]
#[command(
    name = "quarter",
    version,
    about = "Parse, format, and enumerate calendar quarters"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print quarters as `2020-Q1` instead of `Q1 2020`.
    #[arg(long, global = true)]
    pub iso: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Describe a quarter: forms, first and last day, length, months.
    Show(ShowArgs),
    /// List quarters from one to another, inclusive.
    Range(RangeArgs),
    /// Print the quarter containing a date.
    Of(OfArgs),
    /// Print the current quarter.
    Today,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Quarter such as "Q1 2020", "2020-Q1", or "2020Q1".
    pub quarter: String,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `range` subcommand.
#[derive(clap::Args)]
pub struct RangeArgs {
    /// First quarter.
    pub from: String,

    /// Last quarter (included when reached exactly).
    pub to: String,

    /// Quarters per step; defaults to 1, or -1 when TO is before FROM.
    #[arg(short, long, allow_negative_numbers = true)]
    pub step: Option<i32>,
}

/// Arguments for the `of` subcommand.
#[derive(clap::Args)]
pub struct OfArgs {
    /// Date in YYYY-MM-DD form.
    pub date: NaiveDate,
}
