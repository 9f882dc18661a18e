// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Additive palindrome generation engine.
//!
//! This module enumerates every base-N palindrome of a given digit length
//! using nothing but additions to a shared [`Accumulator`]. The pattern of
//! additions is fixed by the base and the digit length, so it is compiled
//! once into a small tree of operations and then stepped.
//!
//! # Architecture
//!
//! There are exactly three kinds of operation:
//!
//! - [`Increment`]: add a fixed delta a fixed number of times
//! - [`PairedOp`]: `n:[S, +delta], S` - run a sub-operation to completion,
//!   add a delta, repeat `n` times, then run the sub-operation once more
//! - [`Generator`]: the whole chain for one (base, digit length), followed
//!   by the `+2` that rolls `mm...m` over to `10...01`
//!
//! Each call to [`Operation::advance`] performs exactly one addition, so the
//! number of calls equals the number of palindromes visited.
//!
//! # Notation
//!
//! With `m = N-1` and `q = N-2` (digits written in base N):
//!
//! ```text
//! 2 digits:        q:+11                       (from the seed 11)
//! 2k+1 digits:     S0 = m:+(1 0^k)
//! 2k+2 digits:     S0 = m:+(11 0^k)
//!                  Si = m:[S(i-1), +(11 0^(k-i))], S(i-1)   for i in 1..k
//!                  body = q:[S(k-1), +11], S(k-1)
//! ```
//!
//! # Example
//!
//! ```
//! use palindrome_search::accumulator::Accumulator;
//! use palindrome_search::engine::{Generator, Operation, Progress};
//!
//! // Two-digit base-10 palindromes, starting from the seed 11.
//! let mut acc = Accumulator::new(11);
//! let mut generator = Generator::new(10, 2).unwrap();
//! let mut seen = Vec::new();
//! loop {
//!     let progress = generator.advance(&mut acc).unwrap();
//!     seen.push(acc.value());
//!     if progress == Progress::Complete {
//!         break;
//!     }
//! }
//! assert_eq!(seen, vec![22, 33, 44, 55, 66, 77, 88, 99, 101]);
//! ```

pub mod generator;
pub mod increment;
pub mod paired;

pub use generator::{Generator, GeneratorPhase};
pub use increment::Increment;
pub use paired::{PairedOp, PairedPhase};

use crate::accumulator::Accumulator;
use crate::error::Result;
use std::fmt::Debug;

/// Result of advancing an operation by one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// The operation has more steps to perform.
    Pending,

    /// The operation finished with this step and has reset itself,
    /// so the next call starts it over.
    Complete,
}

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Increment {}
    impl Sealed for super::PairedOp {}
    impl Sealed for super::ChainOp {}
    impl Sealed for super::Generator {}
}

/// One step of palindrome generation.
///
/// The set of implementations is closed: the derivation only ever produces
/// increments, paired operations and generators.
pub trait Operation: Debug + sealed::Sealed {
    /// Perform one addition on `acc`.
    ///
    /// Returns [`Progress::Complete`] when this step finished the operation.
    /// An overflowing addition is reported as an error and leaves `acc`
    /// unchanged.
    fn advance(&mut self, acc: &mut Accumulator) -> Result<Progress>;

    /// Name for tracing output.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// A node of a generator's chain: the leaf increment or a nested pair.
///
/// Children are owned by value (boxed inside [`PairedOp`]), so a chain is a
/// strict tree that is dropped as a unit.
#[derive(Debug, Clone)]
pub enum ChainOp {
    Increment(Increment),
    Paired(PairedOp),
}

impl ChainOp {
    /// Nesting depth of this chain (an increment has depth 1).
    pub fn depth(&self) -> usize {
        match self {
            ChainOp::Increment(_) => 1,
            ChainOp::Paired(paired) => 1 + paired.sub().depth(),
        }
    }
}

impl Operation for ChainOp {
    #[inline]
    fn advance(&mut self, acc: &mut Accumulator) -> Result<Progress> {
        match self {
            ChainOp::Increment(op) => op.advance(acc),
            ChainOp::Paired(op) => op.advance(acc),
        }
    }

    fn name(&self) -> &str {
        match self {
            ChainOp::Increment(op) => op.name(),
            ChainOp::Paired(op) => op.name(),
        }
    }
}

impl From<Increment> for ChainOp {
    fn from(op: Increment) -> Self {
        ChainOp::Increment(op)
    }
}

impl From<PairedOp> for ChainOp {
    fn from(op: PairedOp) -> Self {
        ChainOp::Paired(op)
    }
}
