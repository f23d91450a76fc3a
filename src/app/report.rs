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

//! Sinks for the results of comparing consecutive positions.

use crate::app::error::Result;
use geodistance::Segment;
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

/// A consumer of compared `Segment`s.
pub trait ReportSink {
    /// Write the `Segment` between positions `index` and `index + 1`.
    fn write_segment(&mut self, index: usize, segment: &Segment) -> Result<()>;

    /// Flush any buffered output.
    fn finish(&mut self) -> Result<()>;
}

/// A human readable report, one block of lines per `Segment`.
pub struct TextReport<W: Write> {
    writer: W,
}

impl TextReport<BufWriter<File>> {
    /// Open a report file, appending to it if it exists.
    pub fn append(path: &Path) -> Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl<W: Write> TextReport<W> {
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> ReportSink for TextReport<W> {
    fn write_segment(&mut self, index: usize, segment: &Segment) -> Result<()> {
        let spherical = segment.comparison.spherical();
        let hubeny = segment.comparison.hubeny();

        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "segment {index} start: {} end: {}",
            segment.start, segment.end
        )?;
        writeln!(
            self.writer,
            "spherical trigonometry distance: {} km azimuth: {}°",
            spherical.distance(),
            spherical.azimuth().0
        )?;
        writeln!(
            self.writer,
            "Hubeny formula distance: {} km azimuth: {}°",
            hubeny.distance(),
            hubeny.azimuth().0
        )?;
        writeln!(
            self.writer,
            "difference distance: {} km azimuth: {}°",
            segment.comparison.distance_difference(),
            segment.comparison.azimuth_difference().0
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}

#[derive(Serialize)]
struct SeriesRecord {
    index: usize,
    spherical_distance_km: f64,
    spherical_azimuth_deg: f64,
    hubeny_distance_km: f64,
    hubeny_azimuth_deg: f64,
}

/// The distance and azimuth series of both methods as CSV, for plotting.
pub struct CsvSeries<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvSeries<File> {
    pub fn create(path: &Path) -> Result<Self> {
        Ok(Self::new(File::create(path)?))
    }
}

impl<W: Write> CsvSeries<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(writer),
        }
    }
}

impl<W: Write> ReportSink for CsvSeries<W> {
    fn write_segment(&mut self, index: usize, segment: &Segment) -> Result<()> {
        let spherical = segment.comparison.spherical();
        let hubeny = segment.comparison.hubeny();
        self.writer.serialize(SeriesRecord {
            index,
            spherical_distance_km: spherical.distance(),
            spherical_azimuth_deg: spherical.azimuth().0,
            hubeny_distance_km: hubeny.distance(),
            hubeny_azimuth_deg: hubeny.azimuth().0,
        })?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(self.writer.flush()?)
    }
}
