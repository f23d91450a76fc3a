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

//! Command line arguments and the optional TOML configuration file.
//!
//! Values given on the command line override values in the configuration
//! file, which override the defaults:
//!
//! ```toml
//! input = "location.csv"
//! report = "result.txt"
//! series = "series.csv"
//! log_file = "error.log"
//! log_level = "info"
//! ```

use crate::app::error::{GeoDistanceError, Result};
use clap::Parser;
use geodistance::{Degrees, GeoPoint};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;

/// Compare spherical trigonometry and Hubeny formula distances and azimuths
/// between consecutive latitude/longitude positions.
#[derive(Parser, Debug)]
#[command(name = "geodistance", version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// CSV file of latitude, longitude values in decimal degrees
    #[arg(short, long, conflicts_with = "pair")]
    pub input: Option<PathBuf>,

    /// a single pair of positions instead of an input file
    #[arg(
        long,
        num_args = 4,
        value_names = ["LAT1", "LON1", "LAT2", "LON2"],
        allow_negative_numbers = true
    )]
    pub pair: Option<Vec<f64>>,

    /// text report file, appended to
    #[arg(short, long)]
    pub report: Option<PathBuf>,

    /// CSV file of the distance and azimuth series
    #[arg(short, long)]
    pub series: Option<PathBuf>,

    /// log file, appended to
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// log level (trace, debug, info, warn, error)
    #[arg(short, long)]
    pub log_level: Option<String>,
}

impl Cli {
    /// Load the configuration file, if any, and apply the command line
    /// overrides to it.
    pub fn resolve(&self) -> Result<Config> {
        let config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };
        Ok(self.apply(config))
    }

    fn apply(&self, config: Config) -> Config {
        Config {
            input: self.input.clone().unwrap_or(config.input),
            report: self.report.clone().unwrap_or(config.report),
            series: self.series.clone().or(config.series),
            log_file: self.log_file.clone().unwrap_or(config.log_file),
            log_level: self.log_level.clone().unwrap_or(config.log_level),
        }
    }

    /// The positions given by `--pair`, if any.
    pub fn pair_points(&self) -> Option<(GeoPoint, GeoPoint)> {
        match self.pair.as_deref() {
            Some(&[lat1, lon1, lat2, lon2]) => Some((
                GeoPoint::new(Degrees(lat1), Degrees(lon1)),
                GeoPoint::new(Degrees(lat2), Degrees(lon2)),
            )),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub input: PathBuf,
    pub report: PathBuf,
    pub series: Option<PathBuf>,
    pub log_file: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("location.csv"),
            report: PathBuf::from("result.txt"),
            series: None,
            log_file: PathBuf::from("error.log"),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn level(&self) -> Result<Level> {
        parse_log_level(&self.log_level)
    }
}

pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(GeoDistanceError::LogLevel(level.to_string())),
    }
}
