//! Conversion of dates, times, month numbers and quarters into quarters.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};

use crate::quarter::Quarter;

/// Quarter number (1..=4) of a month number (1..=12): `ceil(month / 3)`.
///
/// No range check is made; month 0 gives 0, month 13 gives 5.
pub fn quarter_of_month(month: u32) -> u32 {
    month.div_ceil(3)
}

/// Types that can be turned into a quarter.
///
/// The output type depends on the input. Dates and times give a
/// [`Quarter`]; a bare month number gives only the quarter *number* as a
/// `u32`, since a month without a year cannot name a specific quarter.
pub trait ToQuarter {
    type Output;

    fn to_quarter(self) -> Self::Output;
}

impl ToQuarter for Quarter {
    type Output = Quarter;

    fn to_quarter(self) -> Quarter {
        self
    }
}

impl ToQuarter for &Quarter {
    type Output = Quarter;

    fn to_quarter(self) -> Quarter {
        *self
    }
}

impl ToQuarter for u32 {
    type Output = u32;

    fn to_quarter(self) -> u32 {
        quarter_of_month(self)
    }
}

fn from_datelike<D: Datelike>(date: &D) -> Quarter {
    // Datelike::month is always 1..=12, so the quarter number is 1..=4.
    Quarter::from_parts(date.year(), quarter_of_month(date.month()) as u8)
}

impl ToQuarter for NaiveDate {
    type Output = Quarter;

    fn to_quarter(self) -> Quarter {
        from_datelike(&self)
    }
}

impl ToQuarter for NaiveDateTime {
    type Output = Quarter;

    fn to_quarter(self) -> Quarter {
        from_datelike(&self)
    }
}

/// Uses the calendar date in the value's own timezone.
impl<Tz: TimeZone> ToQuarter for DateTime<Tz> {
    type Output = Quarter;

    fn to_quarter(self) -> Quarter {
        from_datelike(&self)
    }
}

/// Converts `value` to a quarter (or, for a month number, a quarter number).
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use quarter::{to_quarter, Quarter};
///
/// let date = NaiveDate::from_ymd_opt(2020, 5, 17).unwrap();
/// assert_eq!(to_quarter(date), Quarter::new(2020, 2).unwrap());
/// assert_eq!(to_quarter(4_u32), 2);
/// ```
pub fn to_quarter<T: ToQuarter>(value: T) -> T::Output {
    value.to_quarter()
}

impl Quarter {
    /// The quarter containing today's local date.
    pub fn today() -> Quarter {
        to_quarter(Local::now().date_naive())
    }

    /// The quarter containing the current local date-time.
    pub fn now() -> Quarter {
        to_quarter(Local::now())
    }
}
