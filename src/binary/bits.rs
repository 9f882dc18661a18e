// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Binary digit sequences with numeric ordering.

use std::cmp::Ordering;
use std::fmt;

/// A value's binary digits, most significant first, without leading zeros.
///
/// Ordering is numeric: a longer sequence is larger, and sequences of equal
/// length compare bit by bit from the most significant end. The empty
/// sequence (the default) is smaller than every value, including zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitString {
    bits: Vec<bool>,
}

impl BitString {
    /// The empty sequence, below every value.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Binary digits of `value`. Zero is the single digit `0`.
    pub fn from_value(value: u64) -> Self {
        if value == 0 {
            return Self { bits: vec![false] };
        }
        let width = u64::BITS - value.leading_zeros();
        let bits = (0..width).rev().map(|i| value >> i & 1 == 1).collect();
        Self { bits }
    }

    /// Number of binary digits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Whether the digits read the same in both directions.
    pub fn is_palindrome(&self) -> bool {
        self.bits.iter().eq(self.bits.iter().rev())
    }

    /// Iterate over the digits, most significant first.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }
}

impl From<u64> for BitString {
    fn from(value: u64) -> Self {
        Self::from_value(value)
    }
}

impl Ord for BitString {
    fn cmp(&self, other: &Self) -> Ordering {
        self.bits
            .len()
            .cmp(&other.bits.len())
            .then_with(|| self.bits.cmp(&other.bits))
    }
}

impl PartialOrd for BitString {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
