// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator for all base-N palindromes of one digit length.
//!
//! A generator is built for a (base, digit length) pair. Starting from the
//! smallest palindrome of that length already in the accumulator, it steps
//! through every larger palindrome of the same length and finally adds 2,
//! which turns `mm...m` into `10...01`, the first palindrome one digit longer.
//!
//! Two-digit palindromes are special: the accumulator is seeded with `11`
//! (which does not exceed 2N) and the generator steps `22, 33, ..., mm`.
//!
//! The magnitude constants are computed directly as integers; no digit
//! vector is ever built.

use super::{ChainOp, Increment, Operation, PairedOp, Progress};
use crate::accumulator::{checked_mul, Accumulator};
use crate::error::{Result, SearchError};
use tracing::trace;

/// Where a generator is in its two-step completion protocol.
///
/// Finishing the chain and rolling over to the next digit length are two
/// separate steps, each performing one addition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeneratorPhase {
    /// Stepping the chain body.
    InChain,
    /// The chain reached `mm...m`; the next step adds 2.
    TransitionPending,
    /// The `+2` has been applied. Advancing again restarts the chain.
    TransitionDone,
}

/// The full operation tree for one base and digit length.
#[derive(Debug, Clone)]
pub struct Generator {
    base: u64,
    digit_length: u32,
    body: ChainOp,
    phase: GeneratorPhase,
}

impl Generator {
    /// Amount added to move from `mm...m` to `10...01`.
    pub const TRANSITION_DELTA: u64 = 2;

    /// Build the generator for `digit_length`-digit palindromes in `base`.
    ///
    /// Fails if `base <= 2`, if `digit_length < 2`, or if a magnitude
    /// constant does not fit in the accumulator.
    pub fn new(base: u64, digit_length: u32) -> Result<Self> {
        if base <= 2 {
            return Err(SearchError::InvalidBase(base));
        }
        if digit_length < 2 {
            return Err(SearchError::InvalidDigitLength(digit_length));
        }

        let max_digit = base - 1;
        let second_digit = base - 2;
        let eleven = base.checked_add(1).ok_or(SearchError::Overflow {
            value: base,
            delta: 1,
        })?;

        let body = if digit_length == 2 {
            ChainOp::from(Increment::new(second_digit, eleven))
        } else {
            let k = (digit_length - 1) / 2;
            let odd = digit_length % 2 == 1;

            // "1" or "11" followed by k zeros, and "11" followed by k-1 zeros.
            let mut magnitude = if odd { base } else { checked_mul(base, eleven)? };
            let mut pair_delta = eleven;
            for _ in 1..k {
                magnitude = checked_mul(magnitude, base)?;
                pair_delta = checked_mul(pair_delta, base)?;
            }

            let mut chain = ChainOp::from(Increment::new(max_digit, magnitude));
            for _ in 1..k {
                chain = PairedOp::new(max_digit, chain, pair_delta).into();
                pair_delta /= base;
            }
            PairedOp::new(second_digit, chain, pair_delta).into()
        };

        trace!(
            base,
            digit_length,
            body = body.name(),
            depth = body.depth(),
            "built palindrome generator"
        );

        Ok(Self {
            base,
            digit_length,
            body,
            phase: GeneratorPhase::InChain,
        })
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn digit_length(&self) -> u32 {
        self.digit_length
    }

    pub fn phase(&self) -> GeneratorPhase {
        self.phase
    }

    /// The chain stepped before the transition.
    pub fn body(&self) -> &ChainOp {
        &self.body
    }

    /// Number of `advance` calls needed to complete this generator,
    /// including the transition step.
    ///
    /// For two digits this is `N-1`; otherwise it is the number of
    /// palindromes with `digit_length` digits, `(N-1) * N^(ceil(L/2) - 1)`.
    pub fn step_count(&self) -> Option<u64> {
        if self.digit_length == 2 {
            return Some(self.base - 1);
        }
        let half = self.digit_length.div_ceil(2) - 1;
        self.base
            .checked_pow(half)
            .and_then(|power| power.checked_mul(self.base - 1))
    }
}

impl Operation for Generator {
    fn advance(&mut self, acc: &mut Accumulator) -> Result<Progress> {
        match self.phase {
            GeneratorPhase::InChain | GeneratorPhase::TransitionDone => {
                self.phase = GeneratorPhase::InChain;
                if self.body.advance(acc)? == Progress::Complete {
                    self.phase = GeneratorPhase::TransitionPending;
                }
                Ok(Progress::Pending)
            }
            GeneratorPhase::TransitionPending => {
                acc.add(Self::TRANSITION_DELTA)?;
                self.phase = GeneratorPhase::TransitionDone;
                Ok(Progress::Complete)
            }
        }
    }

    fn name(&self) -> &str {
        "Generator"
    }
}
