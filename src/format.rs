// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Human readable output for records.
//!
//! A record line looks like:
//!
//! ```text
//! 00:00:00  #2  41: 7,671: (4)(23)(4) 1110111110111
//! ```
//!
//! Base-N digits are written plainly for N <= 10 and as parenthesized
//! decimals otherwise, so any base can be printed without a digit alphabet.

use crate::binary::BitString;
use crate::driver::Record;
use std::time::Duration;

/// Decimal rendering with `,` between groups of three digits.
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Digits of `value` in `base`, most significant first.
pub fn digits(mut value: u64, base: u64) -> Vec<u64> {
    assert!(base >= 2, "base must be at least 2, got {}", base);
    if value == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(value % base);
        value /= base;
    }
    digits.reverse();
    digits
}

/// `value` written in `base`.
pub fn to_base(value: u64, base: u64) -> String {
    digits(value, base)
        .into_iter()
        .map(|digit| {
            if base <= 10 {
                digit.to_string()
            } else {
                format!("({})", digit)
            }
        })
        .collect()
}

/// Elapsed time as `hh:mm:ss`. Hours are not wrapped.
pub fn hh_mm_ss(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{:02}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60)
}

/// One output line for a record, optionally prefixed with the elapsed time.
pub fn record_line(record: &Record, elapsed: Option<Duration>) -> String {
    let prefix = elapsed.map_or_else(String::new, |elapsed| format!("{}  ", hh_mm_ss(elapsed)));
    format!(
        "{}#{}  {}: {}: {} {}",
        prefix,
        record.position,
        record.base,
        group_thousands(record.value),
        to_base(record.value, record.base),
        BitString::from_value(record.value)
    )
}
