// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command line entry point: print the record sequence until the target.

use anyhow::{Context, Result};
use clap::Parser;
use palindrome_search::driver::{SearchConfig, DEFAULT_MAX_BASE, DEFAULT_TARGET, MIN_BASE};
use palindrome_search::format::{group_thousands, record_line};
use palindrome_search::{SearchOutcome, SequenceDriver};
use std::process::ExitCode;
use std::time::Instant;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "palindromes")]
#[command(
    version,
    about = "Records of the smallest number above 2N palindromic in base N and base 2"
)]
struct Cli {
    /// Stop after the first record at or above this value
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: u64,

    /// First base to scan
    #[arg(long, default_value_t = MIN_BASE)]
    first_base: u64,

    /// Give up after this base
    #[arg(long, default_value_t = DEFAULT_MAX_BASE)]
    max_base: u64,

    /// Omit the elapsed time column
    #[arg(long)]
    no_timestamps: bool,
}

impl Cli {
    fn config(&self) -> SearchConfig {
        SearchConfig {
            target: self.target,
            first_base: self.first_base,
            max_base: self.max_base,
        }
    }
}

/// `RUST_LOG` style directives, falling back to `info` when none are given.
fn log_filter(directives: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives)
}

fn main() -> ExitCode {
    // Logs go to stderr so stdout carries only records.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(log_filter(
            &std::env::var(EnvFilter::DEFAULT_ENV).unwrap_or_default(),
        ))
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(SearchOutcome::Reached(_)) => ExitCode::SUCCESS,
        Ok(SearchOutcome::CapExhausted { .. }) => ExitCode::from(1),
        Err(err) => {
            error!("{:#}", err);
            ExitCode::from(2)
        }
    }
}

fn run(cli: &Cli) -> Result<SearchOutcome> {
    let start = Instant::now();
    let mut driver =
        SequenceDriver::new(cli.config()).context("invalid search configuration")?;

    let timestamps = !cli.no_timestamps;
    let outcome = driver
        .run(|record| {
            let elapsed = timestamps.then(|| start.elapsed());
            println!("{}", record_line(record, elapsed));
        })
        .context("search aborted")?;

    println!();
    match outcome {
        SearchOutcome::Reached(record) => println!(
            "First record at or above {}: #{} P({}) = {}",
            group_thousands(cli.target),
            record.position,
            record.base,
            group_thousands(record.value)
        ),
        SearchOutcome::CapExhausted { last } => {
            let best = last.map_or_else(|| "none".to_string(), |r| group_thousands(r.value));
            println!(
                "No record reached {} by base {} (best {})",
                group_thousands(cli.target),
                cli.max_base,
                best
            );
        }
    }
    println!("{}", driver.statistics());

    Ok(outcome)
}
