// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Fixed-width accumulator shared by all palindrome operations.
//!
//! The generator never materializes base-N digits: every palindrome is reached
//! from the previous one by a single addition. The accumulator holds the
//! current palindrome and refuses any addition that would wrap.
//!
//! A `u64` holds values up to about 1.8e19, four orders of magnitude above the
//! one-quadrillion target, so overflow is never expected in a normal run.

use crate::error::{Result, SearchError};
use std::fmt;

/// Largest value the accumulator can represent.
pub const ACCUMULATOR_MAX: u64 = u64::MAX;

/// The running palindrome value for one base.
///
/// Newtype over `u64` so that every mutation goes through [`Accumulator::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Accumulator(u64);

impl Accumulator {
    /// Create an accumulator holding `value`.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the current value.
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Whether the current value is odd (only odd values can be binary palindromes).
    pub const fn is_odd(self) -> bool {
        self.0 & 1 == 1
    }

    /// Add `delta`, failing without modification if the result would exceed
    /// [`ACCUMULATOR_MAX`].
    #[inline]
    pub fn add(&mut self, delta: u64) -> Result<()> {
        match self.0.checked_add(delta) {
            Some(sum) => {
                self.0 = sum;
                Ok(())
            }
            None => Err(SearchError::Overflow {
                value: self.0,
                delta,
            }),
        }
    }
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Checked multiplication used when deriving generator magnitude constants.
pub(crate) fn checked_mul(lhs: u64, rhs: u64) -> Result<u64> {
    lhs.checked_mul(rhs).ok_or(SearchError::Overflow {
        value: lhs,
        delta: lhs.saturating_mul(rhs.saturating_sub(1)),
    })
}
