//! # quarter
//!
//! Calendar quarters as plain values.
//!
//! A [`Quarter`] is a year plus a quarter number 1–4. It is `Copy`, ordered
//! chronologically, and supports quarter arithmetic, lazy enumeration,
//! parsing, formatting, and derivation of its calendar days and months.
//!
//! ```
//! use quarter::{to_quarter, Quarter};
//! use chrono::NaiveDate;
//!
//! let q = Quarter::parse("2020-Q4").unwrap();
//! assert_eq!(q.to_string(), "Q4 2020");
//! assert_eq!(q + 1, Quarter::new(2021, 1).unwrap());
//! assert_eq!(q.length(), 92);
//!
//! let date = NaiveDate::from_ymd_opt(2020, 11, 3).unwrap();
//! assert_eq!(to_quarter(date), q);
//! ```
//!
//! ## Modules
//!
//! - [`quarter`] — the `Quarter` type: construction, formatting, ordering, arithmetic
//! - [`calendar`] — start/end dates, day and month spans, quarter length
//! - [`step`] — `step` / `upto` / `downto` enumeration
//! - [`coerce`] — `to_quarter` for dates, times, month numbers; `today` / `now`
//! - [`parse`] — `"Q1 2020"` and `"2020-Q1"` parsing
//! - [`methods`] — `Q1(year)` … `Q4(year)` constructors
//! - [`constants`] — `2020 - Q1` / `2020 / Q1` construction
//! - [`codec`] — serde support with fuzzy decoding
//! - [`scalar`] — scalar scanner that recognizes quarters before YAML literals
//! - [`document`] — YAML loader that runs the scanner on plain scalars
//! - [`error`] — Error types

pub mod calendar;
pub mod codec;
pub mod coerce;
pub mod constants;
pub mod document;
pub mod error;
pub mod methods;
pub mod parse;
pub mod quarter;
pub mod scalar;
pub mod step;

pub use calendar::{is_leap_year, DateSpan, MonthIter, MonthSpan, YearMonth};
pub use codec::{from_yaml, scan_quarter, to_yaml};
pub use coerce::{quarter_of_month, to_quarter, ToQuarter};
pub use constants::Constant;
pub use document::{load_yaml, Node};
pub use error::{QuarterError, Result};
pub use quarter::Quarter;
pub use scalar::{scan_scalar, Scalar};
pub use step::Steps;
