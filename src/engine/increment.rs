// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Leaf operation: add a fixed delta a fixed number of times.

use super::{Operation, Progress};
use crate::accumulator::Accumulator;
use crate::error::Result;

/// Adds `delta` to the accumulator `repeat` times, one addition per step.
///
/// Written `repeat:+delta` in the engine notation. In a generator the
/// innermost increment walks the middle kernel digit from 0 to `m`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Increment {
    delta: u64,
    repeat: u64,
    counter: u64,
}

impl Increment {
    /// Create a new increment.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero.
    pub fn new(repeat: u64, delta: u64) -> Self {
        assert!(repeat > 0, "Increment repeat count must be positive");
        Self {
            delta,
            repeat,
            counter: 0,
        }
    }

    /// The amount added on each step.
    pub fn delta(&self) -> u64 {
        self.delta
    }

    /// The number of steps before completion.
    pub fn repeat(&self) -> u64 {
        self.repeat
    }

    /// Steps taken since the last completion.
    pub fn counter(&self) -> u64 {
        self.counter
    }
}

impl Operation for Increment {
    #[inline]
    fn advance(&mut self, acc: &mut Accumulator) -> Result<Progress> {
        acc.add(self.delta)?;
        self.counter += 1;
        if self.counter == self.repeat {
            self.counter = 0;
            Ok(Progress::Complete)
        } else {
            Ok(Progress::Pending)
        }
    }

    fn name(&self) -> &str {
        "Increment"
    }
}
