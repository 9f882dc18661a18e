// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Base-2 side of the search.
//!
//! - `tester`: incremental binary palindrome test over increasing candidates
//! - `bits`: binary digit sequences, used to order records

pub mod bits;
pub mod tester;

pub use bits::BitString;
pub use tester::BinaryPalindromeTester;
