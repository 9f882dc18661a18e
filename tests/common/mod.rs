// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.
//!
//! These are deliberately slow, direct implementations: base-N palindromes
//! are built as digit vectors and binary palindromes are checked by bit
//! reversal. They serve as the oracle for the additive engine.

#![allow(dead_code)]

use palindrome_search::accumulator::Accumulator;
use palindrome_search::engine::{Generator, Operation, Progress};

/// Base-N palindromes in increasing order, starting at `22`.
///
/// Digits are stored little-endian. The upper half (including the middle
/// digit for odd lengths) is the kernel; incrementing it and mirroring gives
/// the next palindrome.
#[derive(Debug)]
pub struct DigitPalindromes {
    base: u64,
    digits: Vec<u64>,
}

impl DigitPalindromes {
    pub fn new(base: u64) -> Self {
        assert!(base > 2, "base must exceed 2");
        Self {
            base,
            digits: vec![1, 1],
        }
    }
}

impl Iterator for DigitPalindromes {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        let n = self.digits.len();
        let mut a = n / 2;
        let mut b = (n - 1) / 2;
        loop {
            if self.digits[a] < self.base - 1 {
                self.digits[a] += 1;
                self.digits[b] = self.digits[a];
                break;
            }
            if a + 1 == n {
                self.digits = vec![0; n + 1];
                self.digits[0] = 1;
                self.digits[n] = 1;
                break;
            }
            self.digits[a] = 0;
            self.digits[b] = 0;
            a += 1;
            b -= 1;
        }
        self.digits
            .iter()
            .rev()
            .try_fold(0u64, |acc, &d| acc.checked_mul(self.base)?.checked_add(d))
    }
}

/// Whether `value` is a binary palindrome, by reversing its bits.
pub fn is_binary_palindrome(value: u64) -> bool {
    if value == 0 {
        return true;
    }
    value.reverse_bits() >> value.leading_zeros() == value
}

/// P(N) by direct enumeration.
pub fn brute_force_p(base: u64) -> u64 {
    DigitPalindromes::new(base)
        .find(|&value| is_binary_palindrome(value))
        .expect("palindrome enumeration overflowed")
}

/// Every value produced by chaining generators for lengths `2..=max_length`,
/// starting from the seed `N+1`.
pub fn generated_values(base: u64, max_length: u32) -> Vec<u64> {
    let mut acc = Accumulator::new(base + 1);
    let mut values = Vec::new();
    for length in 2..=max_length {
        let mut generator = Generator::new(base, length).unwrap();
        loop {
            let progress = generator.advance(&mut acc).unwrap();
            values.push(acc.value());
            if progress == Progress::Complete {
                break;
            }
        }
    }
    values
}

/// Deltas between consecutive accumulator values while driving one generator.
pub fn generator_deltas(base: u64, length: u32, start: u64) -> Vec<u64> {
    let mut generator = Generator::new(base, length).unwrap();
    let mut acc = Accumulator::new(start);
    let mut deltas = Vec::new();
    loop {
        let before = acc.value();
        let progress = generator.advance(&mut acc).unwrap();
        deltas.push(acc.value() - before);
        if progress == Progress::Complete {
            return deltas;
        }
    }
}
