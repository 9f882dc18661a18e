// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Search configuration.

use crate::error::{Result, SearchError};

/// The record value that ends the search: one quadrillion.
pub const DEFAULT_TARGET: u64 = 1_000_000_000_000_000;

/// Smallest base for which P(N) is defined.
pub const MIN_BASE: u64 = 3;

/// Safety valve on the number of bases scanned.
///
/// The default target is reached at N = 602,112.
pub const DEFAULT_MAX_BASE: u64 = 10_000_000;

/// Parameters of one record search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Stop after the first record at or above this value.
    pub target: u64,
    /// First base scanned.
    pub first_base: u64,
    /// Last base scanned before giving up.
    pub max_base: u64,
}

impl SearchConfig {
    /// Default configuration with a different target.
    pub fn with_target(target: u64) -> Self {
        Self {
            target,
            ..Self::default()
        }
    }

    /// Check the configuration before a search starts.
    pub fn validate(&self) -> Result<()> {
        if self.first_base < MIN_BASE {
            return Err(SearchError::InvalidBase(self.first_base));
        }
        if self.max_base < self.first_base {
            return Err(SearchError::InvalidConfig(format!(
                "max base {} is below first base {}",
                self.max_base, self.first_base
            )));
        }
        if self.max_base == u64::MAX {
            return Err(SearchError::InvalidConfig(
                "max base must be below u64::MAX".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            target: DEFAULT_TARGET,
            first_base: MIN_BASE,
            max_base: DEFAULT_MAX_BASE,
        }
    }
}
