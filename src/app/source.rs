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

//! Sources of positions.

use crate::app::error::{GeoDistanceError, Result};
use csv::{ReaderBuilder, Trim};
use geodistance::{Degrees, GeoPoint};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// A source of positions, consecutive pairs of which are compared.
pub trait PointSource {
    fn points(&mut self) -> Result<Vec<GeoPoint>>;
}

/// Positions read from headerless CSV.
///
/// The fields of every record are read in order as latitude, longitude
/// values, so a record may hold one position, several positions or half of
/// one. Empty fields are ignored.
pub struct CsvSource<R: Read> {
    reader: csv::Reader<R>,
}

impl CsvSource<File> {
    pub fn from_path(path: &Path) -> Result<Self> {
        Ok(Self::from_reader(File::open(path)?))
    }
}

impl<R: Read> CsvSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self {
            reader: ReaderBuilder::new()
                .has_headers(false)
                .flexible(true)
                .trim(Trim::All)
                .from_reader(reader),
        }
    }
}

impl<R: Read> PointSource for CsvSource<R> {
    fn points(&mut self) -> Result<Vec<GeoPoint>> {
        let mut values = Vec::new();
        for result in self.reader.records() {
            let record = result?;
            let line = record.position().map_or(0, csv::Position::line);
            for field in record.iter().filter(|field| !field.is_empty()) {
                match field.parse::<f64>() {
                    Ok(value) if value.is_finite() => values.push(value),
                    _ => {
                        return Err(GeoDistanceError::InvalidNumber {
                            line,
                            value: field.to_string(),
                        })
                    }
                }
            }
        }

        if values.len() % 2 != 0 {
            return Err(GeoDistanceError::OddValueCount(values.len()));
        }

        Ok(values
            .chunks_exact(2)
            .map(|pair| GeoPoint::new(Degrees(pair[0]), Degrees(pair[1])))
            .collect())
    }
}

/// A single pair of positions.
pub struct PairSource {
    a: GeoPoint,
    b: GeoPoint,
}

impl PairSource {
    pub const fn new(a: GeoPoint, b: GeoPoint) -> Self {
        Self { a, b }
    }
}

impl PointSource for PairSource {
    fn points(&mut self) -> Result<Vec<GeoPoint>> {
        Ok(vec![self.a, self.b])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> Result<Vec<GeoPoint>> {
        CsvSource::from_reader(text.as_bytes()).points()
    }

    #[test]
    fn test_csv_source() {
        let points = read("35.655,139.74472\n36.10056, 140.09111\n").unwrap();
        assert_eq!(
            vec![
                GeoPoint::new(Degrees(35.655), Degrees(139.74472)),
                GeoPoint::new(Degrees(36.10056), Degrees(140.09111)),
            ],
            points
        );
    }

    #[test]
    fn test_csv_source_flattens_records() {
        // One value per record and two positions in one record
        let points = read("35.655\n139.74472\n36.10056,140.09111,22.386651,114.169922\n").unwrap();
        assert_eq!(3, points.len());
        assert_eq!(GeoPoint::new(Degrees(35.655), Degrees(139.74472)), points[0]);
        assert_eq!(GeoPoint::new(Degrees(36.10056), Degrees(140.09111)), points[1]);
        assert_eq!(GeoPoint::new(Degrees(22.386651), Degrees(114.169922)), points[2]);
    }

    #[test]
    fn test_csv_source_empty() {
        assert!(read("").unwrap().is_empty());
        assert_eq!(1, read("1.0,2.0,\n").unwrap().len());
    }

    #[test]
    fn test_csv_source_invalid_number() {
        match read("35.655,139.74472\n36.10056,east\n") {
            Err(GeoDistanceError::InvalidNumber { line, value }) => {
                assert_eq!(2, line);
                assert_eq!("east", value);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert!(matches!(
            read("NaN,139.74472\n"),
            Err(GeoDistanceError::InvalidNumber { line: 1, .. })
        ));
    }

    #[test]
    fn test_csv_source_odd_value_count() {
        assert!(matches!(
            read("35.655,139.74472\n36.10056\n"),
            Err(GeoDistanceError::OddValueCount(3))
        ));
    }

    #[test]
    fn test_pair_source() {
        let a = GeoPoint::new(Degrees(22.386651), Degrees(114.169922));
        let b = GeoPoint::new(Degrees(21.4225), Degrees(39.8261));
        let mut source = PairSource::new(a, b);
        assert_eq!(vec![a, b], source.points().unwrap());
    }
}
