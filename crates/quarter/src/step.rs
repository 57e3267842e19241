//! Lazy enumeration of quarters: [`Quarter::step`], [`Quarter::upto`],
//! [`Quarter::downto`].

use std::iter::FusedIterator;

use crate::error::{QuarterError, Result};
use crate::quarter::Quarter;

/// Iterator over quarters from a start towards a limit.
///
/// Yields the start, then every `step`-th quarter after it, stopping before
/// the first value that would pass `limit`. The limit itself is yielded when
/// an exact step lands on it. Cloning gives an independent iterator from the
/// current position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Steps {
    next: Option<Quarter>,
    limit: Quarter,
    step: i32,
}

impl Steps {
    fn past_limit(&self, quarter: Quarter) -> bool {
        if self.step > 0 {
            quarter > self.limit
        } else {
            quarter < self.limit
        }
    }
}

impl Iterator for Steps {
    type Item = Quarter;

    fn next(&mut self) -> Option<Quarter> {
        let current = self.next.take()?;
        if self.past_limit(current) {
            return None;
        }
        self.next = current.checked_add(self.step);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(current) if !self.past_limit(current) => {
                let remaining = (self.limit - current) / i64::from(self.step) + 1;
                let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
                (remaining, Some(remaining))
            }
            _ => (0, Some(0)),
        }
    }
}

impl FusedIterator for Steps {}

impl Quarter {
    /// Enumerates quarters from `self` towards `limit`, `step` quarters at a
    /// time. A negative step walks backwards.
    ///
    /// # Errors
    ///
    /// Returns [`QuarterError::ZeroStep`] if `step` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use quarter::Quarter;
    ///
    /// let start = Quarter::new(2020, 1).unwrap();
    /// let end = Quarter::new(2021, 1).unwrap();
    /// let names: Vec<String> = start.step(end, 2).unwrap().map(|q| q.iso8601()).collect();
    /// assert_eq!(names, ["2020-Q1", "2020-Q3", "2021-Q1"]);
    /// ```
    pub fn step(self, limit: Quarter, step: i32) -> Result<Steps> {
        if step == 0 {
            return Err(QuarterError::ZeroStep);
        }
        Ok(Steps {
            next: Some(self),
            limit,
            step,
        })
    }

    /// Every quarter from `self` up to and including `max`.
    ///
    /// Empty when `max` is before `self`.
    pub fn upto(self, max: Quarter) -> Steps {
        Steps {
            next: Some(self),
            limit: max,
            step: 1,
        }
    }

    /// Every quarter from `self` down to and including `min`.
    ///
    /// Empty when `min` is after `self`.
    pub fn downto(self, min: Quarter) -> Steps {
        Steps {
            next: Some(self),
            limit: min,
            step: -1,
        }
    }
}
