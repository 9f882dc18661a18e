// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for palindrome generation and the record search.

use thiserror::Error;

/// Errors that can occur while generating palindromes or driving the search.
///
/// None of these are recoverable inside the search: an overflow means the
/// accumulator width was too small for the requested target, and the
/// precondition errors mean a caller asked for something undefined.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An addition (or a magnitude constant) would exceed the accumulator width.
    #[error("accumulator overflow: {value} + {delta} exceeds {max}", max = u64::MAX)]
    Overflow { value: u64, delta: u64 },

    /// Palindromes are only searched for in bases N > 2.
    #[error("base {0} is not supported (must be greater than 2)")]
    InvalidBase(u64),

    /// Generators start at two-digit palindromes.
    #[error("digit length {0} is not supported (must be at least 2)")]
    InvalidDigitLength(u32),

    /// The search configuration is inconsistent.
    #[error("invalid search configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
