// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Record sequence driver.
//!
//! For N = 3, 4, 5, ... the driver computes P(N) and keeps it only if it is
//! strictly larger than every P(N) kept so far. The search ends with the
//! first record at or above the configured target.
//!
//! # Example
//!
//! ```
//! use palindrome_search::driver::{SearchConfig, SearchOutcome, SequenceDriver};
//!
//! let mut driver = SequenceDriver::new(SearchConfig::with_target(20_000)).unwrap();
//! let mut bases = Vec::new();
//! let outcome = driver.run(|record| bases.push(record.base)).unwrap();
//!
//! assert_eq!(bases, vec![3, 41, 51, 57, 63, 67]);
//! assert!(matches!(outcome, SearchOutcome::Reached(record) if record.value == 22517));
//! ```

pub mod config;
pub mod search;

pub use config::{SearchConfig, DEFAULT_MAX_BASE, DEFAULT_TARGET, MIN_BASE};
pub use search::find_p;

use crate::binary::BitString;
use crate::error::Result;
use crate::state::{Counters, Statistics};
use tracing::{debug, info, warn};

/// One entry of the record sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Record {
    /// 1-based position in the sequence.
    pub position: usize,
    /// The base N.
    pub base: u64,
    /// P(N).
    pub value: u64,
}

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// A record met the target.
    Reached(Record),
    /// The base cap was hit first.
    CapExhausted { last: Option<Record> },
}

/// Scans bases in increasing order and emits records.
#[derive(Debug)]
pub struct SequenceDriver {
    config: SearchConfig,
    next_base: u64,
    /// Largest P(N) so far, as binary digits.
    maximum: BitString,
    last: Option<Record>,
    finished: bool,
    statistics: Statistics,
}

impl SequenceDriver {
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            next_base: config.first_base,
            maximum: BitString::empty(),
            last: None,
            finished: false,
            statistics: Statistics::new(),
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The most recent record, if any.
    pub fn last_record(&self) -> Option<Record> {
        self.last
    }

    /// Whether the search has ended (target met or cap reached).
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Scan bases until the next record.
    ///
    /// Returns `Ok(None)` once the search has ended. An overflow error ends
    /// the search as well; the driver should not be used after one.
    pub fn next_record(&mut self) -> Result<Option<Record>> {
        if self.finished {
            return Ok(None);
        }

        while self.next_base <= self.config.max_base {
            let base = self.next_base;
            self.next_base += 1;

            let mut base_stats = Statistics::new();
            let result = find_p(base, &mut base_stats);
            base_stats.increment_counter(Counters::BasesSearched);
            self.statistics.merge(&base_stats);
            let value = match result {
                Ok(value) => value,
                Err(err) => {
                    self.finished = true;
                    return Err(err);
                }
            };
            debug!(
                base,
                value,
                generators = base_stats.get(Counters::GeneratorsBuilt),
                steps = base_stats.get(Counters::OperationSteps),
                "found P(N)"
            );

            // Equal values are not records, so only a strict increase counts.
            let bits = BitString::from_value(value);
            if bits <= self.maximum {
                continue;
            }
            self.maximum = bits;
            self.statistics.increment_counter(Counters::RecordsEmitted);

            let record = Record {
                position: self.last.map_or(1, |last| last.position + 1),
                base,
                value,
            };
            self.last = Some(record);
            info!(
                position = record.position,
                base,
                value,
                "new record"
            );

            if value >= self.config.target {
                self.finished = true;
                info!(threshold = self.config.target, base, "target reached");
            }
            return Ok(Some(record));
        }

        self.finished = true;
        warn!(
            max_base = self.config.max_base,
            threshold = self.config.target,
            "base cap reached before target"
        );
        Ok(None)
    }

    /// Drive the search to completion, calling `on_record` for each record.
    pub fn run<F>(&mut self, mut on_record: F) -> Result<SearchOutcome>
    where
        F: FnMut(&Record),
    {
        while let Some(record) = self.next_record()? {
            on_record(&record);
        }
        Ok(self.outcome())
    }

    /// The outcome so far. Only meaningful once [`Self::is_finished`].
    pub fn outcome(&self) -> SearchOutcome {
        match self.last {
            Some(record) if record.value >= self.config.target => SearchOutcome::Reached(record),
            last => SearchOutcome::CapExhausted { last },
        }
    }
}
