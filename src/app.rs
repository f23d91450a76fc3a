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

//! The `geodistance` application: reads positions from a `PointSource`,
//! compares every consecutive pair and writes the results to `ReportSink`s.

pub mod config;
pub mod error;
pub mod report;
pub mod source;

use error::Result;
use geodistance::{compare_segments, Validate};
use report::ReportSink;
use source::PointSource;
use tracing::{debug, info, warn};

/// The outcome of a run.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Summary {
    /// The number of segments compared.
    pub segments: usize,
    /// The largest difference between the distances in kilometres.
    pub max_distance_difference: f64,
}

/// Compare the consecutive positions of `source`, writing every `Segment`
/// to all of the `sinks`.
pub fn run(source: &mut dyn PointSource, sinks: &mut [&mut dyn ReportSink]) -> Result<Summary> {
    let points = source.points()?;
    info!("read {} positions", points.len());

    for (index, point) in points.iter().enumerate() {
        if !point.is_valid() {
            warn!("position {index} {point} is outside the valid latitude/longitude range");
        }
    }

    if points.len() < 2 {
        warn!("at least two positions are required, no segments compared");
    }

    let mut summary = Summary::default();
    for (index, segment) in compare_segments(&points).enumerate() {
        debug!(
            "segment {index}: {} -> {} spherical {:?} hubeny {:?}",
            segment.start,
            segment.end,
            segment.comparison.spherical(),
            segment.comparison.hubeny()
        );
        for sink in sinks.iter_mut() {
            sink.write_segment(index, &segment)?;
        }

        summary.segments += 1;
        summary.max_distance_difference = summary
            .max_distance_difference
            .max(segment.comparison.distance_difference());
    }

    for sink in sinks.iter_mut() {
        sink.finish()?;
    }

    Ok(summary)
}
