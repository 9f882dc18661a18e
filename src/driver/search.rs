// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! P(N): the smallest value above 2N palindromic in base N and base 2.

use crate::accumulator::Accumulator;
use crate::binary::BinaryPalindromeTester;
use crate::engine::{Generator, Operation, Progress};
use crate::error::{Result, SearchError};
use crate::state::{Counters, Statistics};

/// Compute P(`base`) with the additive generator.
///
/// The accumulator is seeded with `11` (that is, N+1) and generators of
/// increasing digit length are driven from there. Every value produced by a
/// step, including the `10...01` produced by a generator's final transition,
/// is offered to the binary tester.
///
/// Counters for generators, steps and binary tests are added to `stats`.
pub fn find_p(base: u64, stats: &mut Statistics) -> Result<u64> {
    if base < 3 {
        return Err(SearchError::InvalidBase(base));
    }

    let seed = base.checked_add(1).ok_or(SearchError::Overflow {
        value: base,
        delta: 1,
    })?;
    let mut acc = Accumulator::new(seed);
    let mut tester = BinaryPalindromeTester::new();
    let mut steps = 0u64;
    let mut tests = 0u64;

    let mut digit_length = 2u32;
    let found = 'lengths: loop {
        let mut generator = Generator::new(base, digit_length)?;
        stats.increment_counter(Counters::GeneratorsBuilt);

        loop {
            let progress = match generator.advance(&mut acc) {
                Ok(progress) => progress,
                Err(err) => {
                    stats.add(Counters::OperationSteps, steps);
                    stats.add(Counters::BinaryTests, tests);
                    return Err(err);
                }
            };
            steps += 1;

            if acc.is_odd() {
                tests += 1;
                if tester.test(acc.value()) {
                    break 'lengths acc.value();
                }
            }
            if progress == Progress::Complete {
                break;
            }
        }
        digit_length += 1;
    };

    stats.add(Counters::OperationSteps, steps);
    stats.add(Counters::BinaryTests, tests);
    Ok(found)
}
