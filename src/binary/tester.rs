// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Incremental binary palindrome test.
//!
//! Candidates arrive in strictly increasing order, so the position of the
//! most significant bit only ever moves up. The tester caches it and grows it
//! lazily instead of recomputing the bit width on every call.

/// Tests whether values are palindromic in base 2.
///
/// # Monotonic input
///
/// The cached most significant bit is only valid while the input never
/// decreases. Create a fresh tester for each P(N) search. Passing a smaller
/// value than a previous one is a programming error and panics.
#[derive(Debug, Clone)]
pub struct BinaryPalindromeTester {
    /// Highest known set bit (a power of two).
    msb: u64,
    /// All bit positions strictly above `msb`.
    mask: u64,
    /// Largest value tested so far.
    last: u64,
}

impl BinaryPalindromeTester {
    pub fn new() -> Self {
        Self {
            msb: 1,
            mask: !1,
            last: 0,
        }
    }

    /// The cached most significant bit.
    pub fn msb(&self) -> u64 {
        self.msb
    }

    /// Whether `value` reads the same forwards and backwards in binary.
    ///
    /// # Panics
    ///
    /// Panics if `value` is smaller than a previously tested value.
    #[inline]
    pub fn test(&mut self, value: u64) -> bool {
        assert!(
            value >= self.last,
            "BinaryPalindromeTester input must be non-decreasing: {} after {}",
            value,
            self.last
        );
        self.last = value;

        // A trailing zero would need a leading zero.
        if value & 1 == 0 {
            return false;
        }

        while value & self.mask != 0 {
            self.mask <<= 1;
            self.msb <<= 1;
        }

        let mut high = self.msb;
        let mut low = 1u64;
        while high > low {
            if (value & high == 0) != (value & low == 0) {
                return false;
            }
            high >>= 1;
            low <<= 1;
        }
        true
    }
}

impl Default for BinaryPalindromeTester {
    fn default() -> Self {
        Self::new()
    }
}
