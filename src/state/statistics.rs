// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters are owned by the sequence driver and incremented as the search
//! runs. They are reported at the end of a run and in debug tracing.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{EnumCount as EnumCountMacro, EnumIter, IntoStaticStr};

#[derive(Debug, EnumCountMacro, EnumIter, IntoStaticStr, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    BasesSearched,
    GeneratorsBuilt,
    OperationSteps,
    BinaryTests,
    RecordsEmitted,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    #[inline]
    pub fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Add `amount` to the specified counter.
    pub fn add(&mut self, counter: Counters, amount: u64) {
        self.stats[counter as usize] += amount;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    /// Fold another set of counters into this one.
    pub fn merge(&mut self, other: &Statistics) {
        for (mine, theirs) in self.stats.iter_mut().zip(other.stats.iter()) {
            *mine += theirs;
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for counter in Counters::iter() {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            let name: &'static str = counter.into();
            write!(f, "{}={}", name, self.get(counter))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_start_at_zero() {
        let stats = Statistics::new();
        for counter in Counters::iter() {
            assert_eq!(stats.get(counter), 0);
        }
    }

    #[test]
    fn test_increment_and_add() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::BinaryTests);
        stats.increment_counter(Counters::BinaryTests);
        stats.add(Counters::OperationSteps, 40);

        assert_eq!(stats.get(Counters::BinaryTests), 2);
        assert_eq!(stats.get(Counters::OperationSteps), 40);
        assert_eq!(stats.get(Counters::RecordsEmitted), 0);
    }

    #[test]
    fn test_merge() {
        let mut total = Statistics::new();
        let mut base = Statistics::new();
        base.increment_counter(Counters::GeneratorsBuilt);
        total.merge(&base);
        total.merge(&base);
        assert_eq!(total.get(Counters::GeneratorsBuilt), 2);
    }

    #[test]
    fn test_display() {
        let mut stats = Statistics::new();
        stats.increment_counter(Counters::RecordsEmitted);
        assert_eq!(
            stats.to_string(),
            "BasesSearched=0, GeneratorsBuilt=0, OperationSteps=0, BinaryTests=0, RecordsEmitted=1"
        );
    }
}
