//! Calendar ranges derived from a quarter: its days and its months.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;

use chrono::naive::NaiveDateDaysIterator;
use chrono::NaiveDate;

use crate::coerce::quarter_of_month;
use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

/// Proleptic Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        2 if is_leap_year(year) => 29,
        2 => 28,
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

// ── Quarter date ranges ─────────────────────────────────────────────────────

impl Quarter {
    /// First day of the quarter.
    ///
    /// # Panics
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn start_date(self) -> NaiveDate {
        self.first_month().first_day()
    }

    /// Last day of the quarter, e.g. March 31 for Q1.
    ///
    /// # Panics
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn end_date(self) -> NaiveDate {
        self.last_month().last_day()
    }

    /// [`start_date`](Self::start_date), or `None` if chrono cannot
    /// represent the year.
    pub fn checked_start_date(self) -> Option<NaiveDate> {
        self.first_month().checked_first_day()
    }

    /// [`end_date`](Self::end_date), or `None` if chrono cannot represent
    /// the year.
    pub fn checked_end_date(self) -> Option<NaiveDate> {
        self.last_month().checked_last_day()
    }

    /// [`dates`](Self::dates), or `None` if chrono cannot represent the year.
    pub fn checked_dates(self) -> Option<DateSpan> {
        Some(DateSpan {
            start: self.checked_start_date()?,
            end: self.checked_end_date()?,
        })
    }

    /// Every day of the quarter, first to last inclusive.
    ///
    /// # Panics
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn dates(self) -> DateSpan {
        DateSpan {
            start: self.start_date(),
            end: self.end_date(),
        }
    }

    /// Number of days in the quarter: 90 or 91 for Q1 (91 in leap years),
    /// 91 for Q2, 92 for Q3 and Q4.
    ///
    /// Computed arithmetically, so it is defined for every year.
    pub fn length(self) -> u32 {
        match self.number() {
            1 if is_leap_year(self.year()) => 91,
            1 => 90,
            2 => 91,
            _ => 92,
        }
    }

    /// The quarter's first month, e.g. April for Q2.
    pub fn first_month(self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: (self.number() - 1) * 3 + 1,
        }
    }

    /// The quarter's last month, e.g. June for Q2.
    pub fn last_month(self) -> YearMonth {
        YearMonth {
            year: self.year(),
            month: self.number() * 3,
        }
    }

    /// The three months of the quarter, in order.
    pub fn months(self) -> MonthSpan {
        MonthSpan {
            start: self.first_month(),
            end: self.last_month(),
        }
    }
}

// ── DateSpan ────────────────────────────────────────────────────────────────

/// An inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateSpan {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateSpan {
    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.start <= *date && *date <= self.end
    }

    /// Number of days, counting both ends.
    pub fn len(&self) -> usize {
        ((self.end - self.start).num_days() + 1).max(0) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> std::iter::Take<NaiveDateDaysIterator> {
        self.start.iter_days().take(self.len())
    }

    pub fn as_range(&self) -> RangeInclusive<NaiveDate> {
        self.start..=self.end
    }
}

impl IntoIterator for DateSpan {
    type Item = NaiveDate;
    type IntoIter = std::iter::Take<NaiveDateDaysIterator>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<DateSpan> for RangeInclusive<NaiveDate> {
    fn from(span: DateSpan) -> Self {
        span.as_range()
    }
}

// ── YearMonth ───────────────────────────────────────────────────────────────

/// A month of a specific year, e.g. March 2020.
///
/// Ordered chronologically. Displayed as `YYYY-MM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct YearMonth {
    year: i32,
    month: u8,
}

impl YearMonth {
    /// # Errors
    ///
    /// Returns [`QuarterError::InvalidMonth`] unless `1 <= month <= 12`.
    pub fn new(year: i32, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(QuarterError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    pub fn year(self) -> i32 {
        self.year
    }

    /// Month number, 1 = January.
    pub fn month(self) -> u8 {
        self.month
    }

    /// The quarter this month belongs to.
    pub fn quarter(self) -> Quarter {
        Quarter::from_parts(self.year, quarter_of_month(u32::from(self.month)) as u8)
    }

    /// The following month, rolling December into January of the next year.
    ///
    /// Returns `None` past `i32::MAX`.
    pub fn succ(self) -> Option<Self> {
        if self.month == 12 {
            Some(Self {
                year: self.year.checked_add(1)?,
                month: 1,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// The preceding month. Returns `None` before `i32::MIN`.
    pub fn pred(self) -> Option<Self> {
        if self.month == 1 {
            Some(Self {
                year: self.year.checked_sub(1)?,
                month: 12,
            })
        } else {
            Some(Self {
                year: self.year,
                month: self.month - 1,
            })
        }
    }

    pub fn days(self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// # Panics
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn first_day(self) -> NaiveDate {
        self.checked_first_day().expect("year outside chrono's supported range")
    }

    /// # Panics
    ///
    /// Panics if the year is outside the range chrono can represent.
    pub fn last_day(self) -> NaiveDate {
        self.checked_last_day().expect("year outside chrono's supported range")
    }

    pub fn checked_first_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), 1)
    }

    pub fn checked_last_day(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, u32::from(self.month), u32::from(self.days()))
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Sign outside the padding, as chrono prints `-0044-03-15`.
        if self.year < 0 {
            write!(f, "-{:04}-{:02}", self.year.unsigned_abs(), self.month)
        } else {
            write!(f, "{:04}-{:02}", self.year, self.month)
        }
    }
}

// ── MonthSpan ───────────────────────────────────────────────────────────────

/// An inclusive range of consecutive months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthSpan {
    start: YearMonth,
    end: YearMonth,
}

impl MonthSpan {
    pub fn start(&self) -> YearMonth {
        self.start
    }

    pub fn end(&self) -> YearMonth {
        self.end
    }

    pub fn contains(&self, month: &YearMonth) -> bool {
        self.start <= *month && *month <= self.end
    }

    pub fn iter(&self) -> MonthIter {
        MonthIter {
            next: (self.start <= self.end).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for MonthSpan {
    type Item = YearMonth;
    type IntoIter = MonthIter;

    fn into_iter(self) -> MonthIter {
        self.iter()
    }
}

/// Iterator over the months of a [`MonthSpan`].
#[derive(Debug, Clone)]
pub struct MonthIter {
    next: Option<YearMonth>,
    end: YearMonth,
}

impl Iterator for MonthIter {
    type Item = YearMonth;

    fn next(&mut self) -> Option<YearMonth> {
        let current = self.next?;
        self.next = if current < self.end {
            current.succ()
        } else {
            None
        };
        Some(current)
    }
}

impl FusedIterator for MonthIter {}

#[cfg(test)]
mod tests {
    use super::*;

    fn q(year: i32, number: u8) -> Quarter {
        Quarter::new(year, number).unwrap()
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn ym(year: i32, month: u8) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_start_date() {
        assert_eq!(q(2020, 1).start_date(), date(2020, 1, 1));
        assert_eq!(q(2020, 2).start_date(), date(2020, 4, 1));
        assert_eq!(q(2020, 3).start_date(), date(2020, 7, 1));
        assert_eq!(q(2020, 4).start_date(), date(2020, 10, 1));
    }

    #[test]
    fn test_end_date() {
        assert_eq!(q(2020, 1).end_date(), date(2020, 3, 31));
        assert_eq!(q(2020, 2).end_date(), date(2020, 6, 30));
        assert_eq!(q(2020, 3).end_date(), date(2020, 9, 30));
        assert_eq!(q(2020, 4).end_date(), date(2020, 12, 31));
    }

    #[test]
    fn test_dates_q1_2020() {
        let span = q(2020, 1).dates();
        assert_eq!(span.start(), date(2020, 1, 1));
        assert_eq!(span.end(), date(2020, 3, 31));
        assert_eq!(span.len(), 91);
        assert_eq!(span.iter().count(), 91);
        assert_eq!(span.iter().last(), Some(date(2020, 3, 31)));
        assert!(span.contains(&date(2020, 2, 29)));
        assert!(!span.contains(&date(2020, 4, 1)));
    }

    #[test]
    fn test_dates_range_conversion() {
        let range: RangeInclusive<NaiveDate> = q(2021, 4).dates().into();
        assert_eq!(*range.start(), date(2021, 10, 1));
        assert_eq!(*range.end(), date(2021, 12, 31));
        assert!(range.contains(&date(2021, 11, 15)));
    }

    #[test]
    fn test_length_matches_dates() {
        for year in [1900, 2000, 2001, 2020, 2100] {
            for number in 1..=4 {
                let quarter = q(year, number);
                assert_eq!(quarter.length() as usize, quarter.dates().len(), "{quarter}");
            }
        }
    }

    #[test]
    fn test_length() {
        assert_eq!(q(2000, 1).length(), 91);
        assert_eq!(q(2001, 1).length(), 90);
        assert_eq!(q(1900, 1).length(), 90);
        assert_eq!(q(2001, 2).length(), 91);
        assert_eq!(q(2001, 3).length(), 92);
        assert_eq!(q(2001, 4).length(), 92);
    }

    #[test]
    fn test_checked_dates() {
        assert_eq!(q(2020, 2).checked_start_date(), Some(date(2020, 4, 1)));
        assert_eq!(q(2020, 2).checked_end_date(), Some(date(2020, 6, 30)));
        assert_eq!(q(2020, 2).checked_dates(), Some(q(2020, 2).dates()));
    }

    #[test]
    fn test_checked_dates_outside_chrono_range() {
        let far = q(300_000, 1);
        assert_eq!(far.checked_start_date(), None);
        assert_eq!(far.checked_end_date(), None);
        assert_eq!(far.checked_dates(), None);
        assert_eq!(ym(300_000, 1).checked_first_day(), None);
    }

    #[test]
    #[should_panic(expected = "year outside chrono's supported range")]
    fn test_start_date_panics_outside_chrono_range() {
        q(300_000, 1).start_date();
    }

    #[test]
    fn test_length_defined_for_extreme_years() {
        assert_eq!(q(i32::MAX, 3).length(), 92);
    }

    #[test]
    fn test_months() {
        let months: Vec<YearMonth> = q(2020, 2).months().into_iter().collect();
        assert_eq!(months, vec![ym(2020, 4), ym(2020, 5), ym(2020, 6)]);
    }

    #[test]
    fn test_months_q4() {
        let span = q(2020, 4).months();
        assert_eq!(span.start(), ym(2020, 10));
        assert_eq!(span.end(), ym(2020, 12));
        assert!(span.contains(&ym(2020, 11)));
        assert!(!span.contains(&ym(2021, 1)));
        assert_eq!(span.iter().count(), 3);
    }

    #[test]
    fn test_year_month_rejects_invalid_month() {
        assert_eq!(
            YearMonth::new(2020, 13).unwrap_err(),
            QuarterError::InvalidMonth { month: 13 }
        );
        assert!(YearMonth::new(2020, 0).is_err());
    }

    #[test]
    fn test_year_month_succ_pred() {
        assert_eq!(ym(2020, 12).succ(), Some(ym(2021, 1)));
        assert_eq!(ym(2020, 1).pred(), Some(ym(2019, 12)));
        assert_eq!(ym(2020, 6).succ(), Some(ym(2020, 7)));
        assert_eq!(ym(i32::MAX, 12).succ(), None);
    }

    #[test]
    fn test_year_month_days_and_bounds() {
        assert_eq!(ym(2020, 2).days(), 29);
        assert_eq!(ym(2021, 2).days(), 28);
        assert_eq!(ym(2021, 2).last_day(), date(2021, 2, 28));
        assert_eq!(ym(2021, 9).first_day(), date(2021, 9, 1));
    }

    #[test]
    fn test_year_month_quarter() {
        assert_eq!(ym(2020, 3).quarter(), q(2020, 1));
        assert_eq!(ym(2020, 4).quarter(), q(2020, 2));
        assert_eq!(ym(2020, 12).quarter(), q(2020, 4));
    }

    #[test]
    fn test_year_month_display() {
        assert_eq!(ym(2020, 3).to_string(), "2020-03");
        assert_eq!(ym(7, 11).to_string(), "0007-11");
    }

    #[test]
    fn test_year_month_display_negative_year() {
        assert_eq!(ym(-44, 1).to_string(), "-0044-01");
        assert_eq!(ym(-12345, 6).to_string(), "-12345-06");
        assert!(date(-44, 1, 1).to_string().starts_with(&ym(-44, 1).to_string()));
    }

    #[test]
    fn test_leap_years() {
        assert!(is_leap_year(2000));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(-4));
    }
}
