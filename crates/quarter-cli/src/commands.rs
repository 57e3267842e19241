use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use quarter::{scan_quarter, to_quarter, Quarter};

use crate::cli::{OfArgs, RangeArgs, ShowArgs};

/// How quarters are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `Q1 2020`
    Display,
    /// `2020-Q1`
    Iso,
}

impl Format {
    fn render(self, quarter: Quarter) -> String {
        match self {
            Format::Display => quarter.to_string(),
            Format::Iso => quarter.iso8601(),
        }
    }
}

/// Accepts the strict forms first, then the compact ones (`2020Q1`, `2020/Q1`).
fn parse_quarter(text: &str) -> Result<Quarter> {
    let trimmed = text.trim();
    match Quarter::parse(trimmed) {
        Ok(quarter) => Ok(quarter),
        Err(strict) => {
            tracing::debug!(input = trimmed, "falling back to fuzzy quarter forms");
            match scan_quarter(trimmed) {
                Some(result) => Ok(result?),
                None => Err(strict).with_context(|| format!("cannot read {text:?} as a quarter")),
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct QuarterInfo {
    quarter: Quarter,
    iso8601: String,
    start_date: NaiveDate,
    end_date: NaiveDate,
    days: u32,
    months: Vec<String>,
}

impl From<Quarter> for QuarterInfo {
    fn from(quarter: Quarter) -> Self {
        Self {
            quarter,
            iso8601: quarter.iso8601(),
            start_date: quarter.start_date(),
            end_date: quarter.end_date(),
            days: quarter.length(),
            months: quarter.months().iter().map(|m| m.to_string()).collect(),
        }
    }
}

pub fn show(args: ShowArgs, format: Format) -> Result<()> {
    let quarter = parse_quarter(&args.quarter)?;
    let info = QuarterInfo::from(quarter);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&info)?);
        return Ok(());
    }

    println!("{}", format.render(quarter));
    println!("start:  {}", info.start_date);
    println!("end:    {}", info.end_date);
    println!("days:   {}", info.days);
    println!("months: {}", info.months.join(", "));
    Ok(())
}

pub fn range(args: RangeArgs, format: Format) -> Result<()> {
    let from = parse_quarter(&args.from)?;
    let to = parse_quarter(&args.to)?;
    let step = args.step.unwrap_or(if from <= to { 1 } else { -1 });
    tracing::info!(%from, %to, step, "enumerating quarters");

    for quarter in from.step(to, step)? {
        println!("{}", format.render(quarter));
    }
    Ok(())
}

pub fn of(args: OfArgs, format: Format) -> Result<()> {
    println!("{}", format.render(to_quarter(args.date)));
    Ok(())
}

pub fn today(format: Format) -> Result<()> {
    println!("{}", format.render(Quarter::today()));
    Ok(())
}
