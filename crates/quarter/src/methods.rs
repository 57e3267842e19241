//! Named constructors: `Q1(2020)` is `Quarter::new(2020, 1)`.
//!
//! ```
//! use quarter::methods::*;
//! use quarter::Quarter;
//!
//! assert_eq!(Q3(2020), Quarter::new(2020, 3).unwrap());
//! ```

#![allow(non_snake_case)]

use crate::quarter::Quarter;

/// January to March of `year`.
pub const fn Q1(year: i32) -> Quarter {
    Quarter::from_parts(year, 1)
}

/// April to June of `year`.
pub const fn Q2(year: i32) -> Quarter {
    Quarter::from_parts(year, 2)
}

/// July to September of `year`.
pub const fn Q3(year: i32) -> Quarter {
    Quarter::from_parts(year, 3)
}

/// October to December of `year`.
pub const fn Q4(year: i32) -> Quarter {
    Quarter::from_parts(year, 4)
}
