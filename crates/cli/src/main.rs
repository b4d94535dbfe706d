// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown batch hand scorer.
//!
//! Reads a file with one ten characters hand token per line and writes one
//! result record per hand, the score, the hand cards in canonical order,
//! and the category label:
//!
//! ```text
//! (505) 2S3H4D5CAC Straight
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};
use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use showdown_eval::{Hand, HandValue};

#[derive(Debug, Parser)]
struct Cli {
    /// The hands file, one ten characters hand per line.
    #[clap(long, short, default_value = "hands.txt")]
    input: PathBuf,
    /// The results file.
    #[clap(long, short, default_value = "results.txt")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    let cli = Cli::parse();

    let reader = File::open(&cli.input)
        .map(BufReader::new)
        .with_context(|| format!("cannot open hands file {:?}", cli.input))?;
    let mut writer = File::create(&cli.output)
        .map(BufWriter::new)
        .with_context(|| format!("cannot create results file {:?}", cli.output))?;

    let now = Instant::now();
    let mut rows = 0usize;

    for line in reader.lines() {
        let line = line.context("cannot read hands file")?;
        if line.is_empty() {
            continue;
        }

        // A malformed record does not stop the batch.
        match line.parse::<Hand>() {
            Ok(hand) => {
                let value = HandValue::eval(&hand);
                writeln!(writer, "{}", result_line(&hand, value))?;
                rows += 1;
            }
            Err(e) => warn!("skipping record: {e}"),
        }
    }

    writer.flush()?;

    info!(
        "Scored {rows} hands in {:.3}s",
        now.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Formats a result record, score then sorted cards then category label.
fn result_line(hand: &Hand, value: HandValue) -> String {
    format!("({}) {} {}", value.score(), hand, value.rank())
}
