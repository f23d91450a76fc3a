// Copyright (c) 2024 Ken Barker

// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"),
// to deal in the Software without restriction, including without limitation the
// rights to use, copy, modify, merge, publish, distribute, sublicense, and/or
// sell copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:

// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.

// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN
// THE SOFTWARE.

//! geodistance
//!
//! Reads latitude/longitude positions from a CSV file (or a single pair from
//! the command line), compares the spherical trigonometry and Hubeny formula
//! distances and azimuths between every consecutive pair of positions and
//! writes the results to a text report and, optionally, a CSV series file.
//!
//! Log messages are written to stdout and appended to a log file.

mod app;

use anyhow::{Context, Result};
use app::config::{Cli, Config};
use app::report::{CsvSeries, ReportSink, TextReport};
use app::source::{CsvSource, PairSource, PointSource};
use clap::Parser;
use std::fs::OpenOptions;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::FmtSubscriber;

fn init_logging(config: &Config) -> Result<()> {
    let level = config.level()?;
    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("cannot open log file {}", config.log_file.display()))?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_ansi(false)
        .with_writer(std::io::stdout.and(Arc::new(log_file)))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn execute(cli: &Cli, config: &Config) -> Result<()> {
    let mut source: Box<dyn PointSource> = match cli.pair_points() {
        Some((a, b)) => Box::new(PairSource::new(a, b)),
        None => Box::new(
            CsvSource::from_path(&config.input)
                .with_context(|| format!("cannot open input file {}", config.input.display()))?,
        ),
    };

    let mut report = TextReport::append(&config.report)
        .with_context(|| format!("cannot open report file {}", config.report.display()))?;
    let mut series = match &config.series {
        Some(path) => Some(
            CsvSeries::create(path)
                .with_context(|| format!("cannot create series file {}", path.display()))?,
        ),
        None => None,
    };

    let mut sinks: Vec<&mut dyn ReportSink> = Vec::new();
    sinks.push(&mut report);
    if let Some(series) = series.as_mut() {
        sinks.push(series);
    }

    let summary = app::run(source.as_mut(), &mut sinks)?;
    info!(
        "compared {} segments, largest distance difference {} km, report: {}",
        summary.segments,
        summary.max_distance_difference,
        config.report.display()
    );
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve().context("cannot load configuration")?;
    init_logging(&config)?;

    execute(&cli, &config).inspect_err(|err| error!("{err:#}"))
}
