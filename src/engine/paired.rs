// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Composite operation `n:[S, +delta], S`.
//!
//! A paired operation encodes one level of the carry cascade: run the inner
//! operation `S` until its digits are all `m`, then add `delta` to carry into
//! the next kernel digit out (which also zeroes the inner digits). After `n`
//! such pairs the outer digit is `m` too, and one last unpaired run of `S`
//! brings the inner digits up to `m` without carrying.

use super::{ChainOp, Operation, Progress};
use crate::accumulator::Accumulator;
use crate::error::Result;

/// Which half of the current pair is executing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairedPhase {
    /// Stepping the sub-operation.
    RunningSub,
    /// The sub-operation finished; the next step adds the delta.
    AddingDelta,
}

/// Paired operation owning its sub-operation.
#[derive(Debug, Clone)]
pub struct PairedOp {
    sub: Box<ChainOp>,
    delta: u64,
    repeat: u64,
    counter: u64,
    phase: PairedPhase,
}

impl PairedOp {
    /// Create `repeat:[sub, +delta], sub`.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero.
    pub fn new(repeat: u64, sub: ChainOp, delta: u64) -> Self {
        assert!(repeat > 0, "PairedOp repeat count must be positive");
        Self {
            sub: Box::new(sub),
            delta,
            repeat,
            counter: 0,
            phase: PairedPhase::RunningSub,
        }
    }

    pub fn sub(&self) -> &ChainOp {
        &self.sub
    }

    pub fn delta(&self) -> u64 {
        self.delta
    }

    pub fn repeat(&self) -> u64 {
        self.repeat
    }

    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn phase(&self) -> PairedPhase {
        self.phase
    }
}

impl Operation for PairedOp {
    fn advance(&mut self, acc: &mut Accumulator) -> Result<Progress> {
        if self.counter < self.repeat {
            match self.phase {
                PairedPhase::RunningSub => {
                    if self.sub.advance(acc)? == Progress::Complete {
                        self.phase = PairedPhase::AddingDelta;
                    }
                }
                PairedPhase::AddingDelta => {
                    acc.add(self.delta)?;
                    self.counter += 1;
                    self.phase = PairedPhase::RunningSub;
                }
            }
            return Ok(Progress::Pending);
        }

        // Final unpaired run of the sub-operation.
        if self.sub.advance(acc)? == Progress::Complete {
            self.counter = 0;
            self.phase = PairedPhase::RunningSub;
            Ok(Progress::Complete)
        } else {
            Ok(Progress::Pending)
        }
    }

    fn name(&self) -> &str {
        "PairedOp"
    }
}
