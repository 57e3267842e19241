//! Quarter constants for writing `2020 - Q1` or `2020 / Q1`.
//!
//! ```
//! use quarter::constants::*;
//! use quarter::Quarter;
//!
//! assert_eq!(2020 - Q2, Quarter::new(2020, 2).unwrap());
//! assert_eq!(2020 / Q4, Quarter::new(2020, 4).unwrap());
//! ```
//!
//! Only an `i32` year may appear on the left; anything else does not
//! compile.

use std::ops::{Div, Sub};

use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

/// A quarter number without a year.
///
/// Not a quarter and not comparable with one; combine it with a year to get
/// a [`Quarter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Constant {
    number: u8,
}

impl Constant {
    /// # Errors
    ///
    /// Returns [`QuarterError::InvalidNumber`] unless `1 <= number <= 4`.
    pub fn new(number: u8) -> Result<Self> {
        if !(1..=4).contains(&number) {
            return Err(QuarterError::InvalidNumber { number });
        }
        Ok(Self { number })
    }

    pub const fn number(self) -> u8 {
        self.number
    }

    /// The quarter with this number in `year`.
    pub const fn of(self, year: i32) -> Quarter {
        Quarter::from_parts(year, self.number)
    }
}

impl Sub<Constant> for i32 {
    type Output = Quarter;

    fn sub(self, rhs: Constant) -> Quarter {
        rhs.of(self)
    }
}

impl Div<Constant> for i32 {
    type Output = Quarter;

    fn div(self, rhs: Constant) -> Quarter {
        rhs.of(self)
    }
}

pub const Q1: Constant = Constant { number: 1 };
pub const Q2: Constant = Constant { number: 2 };
pub const Q3: Constant = Constant { number: 3 };
pub const Q4: Constant = Constant { number: 4 };
