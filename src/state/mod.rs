// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Mutable bookkeeping owned by the sequence driver.

pub mod statistics;

pub use statistics::{Counters, Statistics};
