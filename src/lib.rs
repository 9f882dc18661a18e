// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search for numbers that are palindromes in base N and in base 2.
//!
//! For each base N > 2, P(N) is the smallest integer exceeding 2N that is
//! palindromic both in base N and in base 2. Scanning N upwards and keeping
//! P(N) only when it beats every earlier value gives a record sequence; the
//! search reports it until a record reaches one quadrillion.
//!
//! # Architecture
//!
//! The work is split in two tiers:
//!
//! ## Tier 1: Generation (per base, per digit length)
//!
//! Base-N palindromes are never built from digits. For each digit length a
//! [`engine::Generator`] compiles a small tree of additions
//! ([`engine::Increment`] and [`engine::PairedOp`]) that walks every
//! palindrome of that length in increasing order, one addition per step,
//! using a checked [`accumulator::Accumulator`].
//!
//! ## Tier 2: Search (per base, across bases)
//!
//! - [`binary::BinaryPalindromeTester`] checks each odd candidate, caching the
//!   most significant bit since candidates only grow
//! - [`driver::find_p`] chains generators of increasing length until the
//!   tester accepts, giving P(N)
//! - [`driver::SequenceDriver`] scans bases and keeps strict records
//!
//! # Errors
//!
//! The only runtime failure is accumulator overflow, which is returned as
//! [`SearchError::Overflow`] from every step and handled once by the caller
//! of the driver. A `u64` accumulator is wide enough for the default target.
//!
//! # Parallelization
//!
//! Bases are independent apart from the record filter, so P(N) for many bases
//! could be computed in parallel and merged in increasing N order. The
//! current driver is single threaded.

pub mod accumulator;
pub mod binary;
pub mod driver;
pub mod engine;
pub mod error;
pub mod format;
pub mod state;

// Re-export commonly used types
pub use accumulator::Accumulator;
pub use driver::{find_p, Record, SearchConfig, SearchOutcome, SequenceDriver};
pub use engine::{Generator, Operation, Progress};
pub use error::{Result, SearchError};
