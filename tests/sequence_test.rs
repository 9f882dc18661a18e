// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Record sequence behaviour of the driver.

mod common;

use common::is_binary_palindrome;
use palindrome_search::driver::{SearchConfig, SearchOutcome, SequenceDriver};
use palindrome_search::format::{record_line, to_base};
use palindrome_search::state::Counters;
use palindrome_search::Record;

/// (base, P(N)) for every record up to the first one above one million.
const RECORDS_TO_ONE_MILLION: [(u64, u64); 15] = [
    (3, 6643),
    (41, 7671),
    (51, 8673),
    (57, 11061),
    (63, 13107),
    (67, 22517),
    (85, 49731),
    (91, 51603),
    (93, 52179),
    (133, 134337),
    (149, 174933),
    (163, 219243),
    (187, 411411),
    (219, 741549),
    (269, 1509917),
];

fn collect(config: SearchConfig) -> (Vec<Record>, SearchOutcome, SequenceDriver) {
    let mut driver = SequenceDriver::new(config).unwrap();
    let mut records = Vec::new();
    let outcome = driver.run(|record| records.push(*record)).unwrap();
    (records, outcome, driver)
}

#[test]
fn test_records_to_one_million() {
    let (records, outcome, driver) = collect(SearchConfig::with_target(1_000_000));

    let found: Vec<(u64, u64)> = records.iter().map(|r| (r.base, r.value)).collect();
    assert_eq!(found, RECORDS_TO_ONE_MILLION.to_vec());
    for (i, record) in records.iter().enumerate() {
        assert_eq!(record.position, i + 1);
    }

    assert_eq!(outcome, SearchOutcome::Reached(*records.last().unwrap()));
    assert_eq!(driver.statistics().get(Counters::BasesSearched), 267);
    assert_eq!(driver.statistics().get(Counters::RecordsEmitted), 15);
}

#[test]
fn test_records_strictly_increase() {
    let (records, _, _) = collect(SearchConfig::with_target(1_000_000));
    for pair in records.windows(2) {
        assert!(pair[0].base < pair[1].base);
        assert!(pair[0].value < pair[1].value);
    }
}

#[test]
fn test_records_are_double_palindromes() {
    let (records, _, _) = collect(SearchConfig::with_target(200_000));
    for record in records {
        assert!(is_binary_palindrome(record.value));
        let digits = to_base(record.value, record.base);
        if record.base <= 10 {
            assert!(digits.chars().eq(digits.chars().rev()), "{}", digits);
        }
        assert!(record.value > 2 * record.base);
    }
}

#[test]
fn test_first_line() {
    let (records, _, _) = collect(SearchConfig::with_target(1));
    assert_eq!(records.len(), 1);
    assert_eq!(
        record_line(&records[0], None),
        "#1  3: 6,643: 100010001 1100111110011"
    );
}

#[test]
fn test_cap_reports_incomplete() {
    let config = SearchConfig {
        target: 1_000_000,
        first_base: 3,
        max_base: 100,
    };
    let (records, outcome, _) = collect(config);
    assert_eq!(records.len(), 9);
    assert_eq!(
        outcome,
        SearchOutcome::CapExhausted {
            last: records.last().copied()
        }
    );
}

/// Full default search. Takes about half an hour in release mode.
#[test]
#[ignore = "Long running: scans about 600,000 bases"]
fn test_reaches_one_quadrillion() {
    let (records, outcome, _) = collect(SearchConfig::default());
    let last = *records.last().unwrap();
    assert_eq!(
        last,
        Record {
            position: 51,
            base: 602_112,
            value: 1_752_877_625_172_707
        }
    );
    assert_eq!(outcome, SearchOutcome::Reached(last));
    assert!(records[..records.len() - 1]
        .iter()
        .all(|r| r.value < 1_000_000_000_000_000));
}
