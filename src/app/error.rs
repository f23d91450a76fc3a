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

//! The error type of the `geodistance` binary.
//!
//! The calculations never fail, so every error comes from reading positions
//! or writing results.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoDistanceError>;

#[derive(Error, Debug)]
pub enum GeoDistanceError {
    #[error("IO error {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid number {value:?} on line {line}")]
    InvalidNumber { line: u64, value: String },

    #[error("odd number of coordinate values: {0}, expected latitude, longitude pairs")]
    OddValueCount(usize),

    #[error("config error {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid log level {0:?}")]
    LogLevel(String),
}
