//! The [`Quarter`] value type.
//!
//! A quarter is a `(year, number)` pair with `number` in `1..=4`. Values are
//! `Copy`, never mutated after construction, and compare, hash, and order by
//! `(year, number)` alone.

use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};

use chrono::{Datelike, NaiveDate};

use crate::coerce::quarter_of_month;
use crate::error::{QuarterError, Result};

/// One of the four three-month spans of a calendar year.
///
/// Q1 is January–March, Q2 April–June, Q3 July–September and Q4
/// October–December.
///
/// # Examples
///
/// ```
/// use quarter::Quarter;
///
/// let q = Quarter::new(2020, 4).unwrap();
/// assert_eq!(q.to_string(), "Q4 2020");
/// assert_eq!(q.iso8601(), "2020-Q4");
/// assert_eq!(q.next(), Quarter::new(2021, 1).unwrap());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Quarter {
    // Field order drives the derived ordering: year first, then number.
    year: i32,
    number: u8,
}

impl Quarter {
    /// Creates a quarter from a year and a quarter number.
    ///
    /// # Errors
    ///
    /// Returns [`QuarterError::InvalidNumber`] unless `1 <= number <= 4`.
    pub fn new(year: i32, number: u8) -> Result<Self> {
        if !(1..=4).contains(&number) {
            return Err(QuarterError::InvalidNumber { number });
        }
        Ok(Self { year, number })
    }

    /// Caller guarantees `number` is in `1..=4`.
    pub(crate) const fn from_parts(year: i32, number: u8) -> Self {
        debug_assert!(number >= 1 && number <= 4);
        Self { year, number }
    }

    /// Returns the year.
    pub const fn year(self) -> i32 {
        self.year
    }

    /// Returns the quarter number (1..=4).
    pub const fn number(self) -> u8 {
        self.number
    }

    /// Returns the short name, e.g. `"Q3"`.
    pub fn name(self) -> String {
        format!("Q{}", self.number)
    }

    /// Returns the ISO 8601-like form, e.g. `"2020-Q3"`.
    pub fn iso8601(self) -> String {
        format!("{}-Q{}", self.year, self.number)
    }

    /// Compares against a value of unknown type.
    ///
    /// Returns `None` when `other` is not a `Quarter`: ordering is only
    /// defined between two quarters, and anything else is incomparable
    /// rather than an error.
    pub fn compare_any(&self, other: &dyn Any) -> Option<Ordering> {
        other
            .downcast_ref::<Quarter>()
            .map(|other| self.cmp(other))
    }

    // ── Arithmetic ──────────────────────────────────────────────────────────

    /// Advances by `n` quarters (`n` may be negative).
    ///
    /// Returns `None` if the resulting year does not fit in an `i32`.
    pub fn checked_add(self, n: i32) -> Option<Self> {
        let offset = i64::from(self.number - 1) + i64::from(n);
        let years = offset.div_euclid(4);
        let number = 1 + offset.rem_euclid(4) as u8;
        let year = i32::try_from(i64::from(self.year) + years).ok()?;
        Some(Self::from_parts(year, number))
    }

    /// Moves back by `n` quarters (`n` may be negative).
    ///
    /// Returns `None` if the resulting year does not fit in an `i32`.
    pub fn checked_sub(self, n: i32) -> Option<Self> {
        // -i32::MIN overflows, so go through i64 offsets instead of negating.
        let offset = i64::from(self.number - 1) - i64::from(n);
        let years = offset.div_euclid(4);
        let number = 1 + offset.rem_euclid(4) as u8;
        let year = i32::try_from(i64::from(self.year) + years).ok()?;
        Some(Self::from_parts(year, number))
    }

    /// Signed number of quarters from `other` to `self`.
    ///
    /// Zero when equal, positive when `self` is later. Same as `self - other`.
    pub fn quarters_since(self, other: Quarter) -> i64 {
        self.ordinal() - other.ordinal()
    }

    fn ordinal(self) -> i64 {
        i64::from(self.year) * 4 + i64::from(self.number)
    }

    /// The following quarter.
    ///
    /// # Panics
    ///
    /// Panics if the year overflows `i32`.
    pub fn next(self) -> Self {
        self + 1
    }

    /// The preceding quarter.
    ///
    /// # Panics
    ///
    /// Panics if the year overflows `i32`.
    pub fn prev(self) -> Self {
        self - 1
    }

    /// Alias of [`Quarter::next`].
    pub fn succ(self) -> Self {
        self.next()
    }

    /// Alias of [`Quarter::prev`].
    pub fn pred(self) -> Self {
        self.prev()
    }

    // ── Membership ──────────────────────────────────────────────────────────

    /// Whether `date` falls within this quarter.
    ///
    /// Works for anything with a calendar year and month: `NaiveDate`,
    /// `NaiveDateTime`, `DateTime<Tz>`.
    pub fn includes<D: Datelike>(&self, date: &D) -> bool {
        self.year == date.year() && u32::from(self.number) == quarter_of_month(date.month())
    }
}

impl fmt::Display for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Q{} {}", self.number, self.year)
    }
}

impl fmt::Debug for Quarter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Quarter: {self}>")
    }
}

impl Add<i32> for Quarter {
    type Output = Quarter;

    fn add(self, rhs: i32) -> Quarter {
        self.checked_add(rhs).expect("`Quarter + i32` overflowed")
    }
}

impl Sub<i32> for Quarter {
    type Output = Quarter;

    fn sub(self, rhs: i32) -> Quarter {
        self.checked_sub(rhs).expect("`Quarter - i32` overflowed")
    }
}

impl Sub<Quarter> for Quarter {
    type Output = i64;

    fn sub(self, rhs: Quarter) -> i64 {
        self.quarters_since(rhs)
    }
}

impl AddAssign<i32> for Quarter {
    fn add_assign(&mut self, rhs: i32) {
        *self = *self + rhs;
    }
}

impl SubAssign<i32> for Quarter {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

/// `quarter == date` holds when the date lies inside the quarter.
impl PartialEq<NaiveDate> for Quarter {
    fn eq(&self, other: &NaiveDate) -> bool {
        self.includes(other)
    }
}

impl PartialEq<Quarter> for NaiveDate {
    fn eq(&self, other: &Quarter) -> bool {
        other.includes(self)
    }
}
