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

//! The hubeny module contains the Hubeny formula for calculating the
//! distance and azimuth between two positions.
//!
//! The formula treats the ellipsoid as flat around the mean latitude of the
//! positions, scaling the latitude and longitude differences by the
//! meridional (`M`) and transverse (`N`) radii of curvature:
//!
//! distance = sqrt((Δφ·M)² + (Δλ·N·cos(μ))²)
//!
//! where μ is the mean latitude.
//! It is accurate for short distances: tens to low hundreds of kilometres.
//!
//! The azimuth is `90° - atan2(Δφ·M, Δλ·N·cos(μ))`, it is **not** normalised
//! to [0°, 360°). It lies in the range [-90°, 270°].

#![allow(clippy::float_cmp)]

use crate::{to_degrees, to_radians, Degrees, DistanceResult, Ellipsoid, GeoPoint, Radians};

/// Calculate the distance and azimuth between a pair of positions.
/// * `a`, `b` - the start and finish positions.
/// * `ellipsoid` - the `Ellipsoid`.
///
/// returns the distance in kilometres and the azimuth.  
/// Coincident positions return a distance of zero and an azimuth of 90°.
///
/// # Examples
/// ```
/// use geodistance::{hubeny, Degrees, GeoPoint, WGS84_ELLIPSOID};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.0), Degrees(-1.0));
///
/// let result = hubeny::calculate_distance_and_azimuth(&a, &b, &WGS84_ELLIPSOID);
/// assert!((result.distance() - 111.319_490_793).abs() < 1e-9);
/// assert_eq!(-90.0, result.azimuth().0);
/// ```
#[must_use]
pub fn calculate_distance_and_azimuth(
    a: &GeoPoint,
    b: &GeoPoint,
    ellipsoid: &Ellipsoid,
) -> DistanceResult {
    let dx = to_radians(Degrees(b.lon().0 - a.lon().0)).0;
    let dy = to_radians(Degrees(b.lat().0 - a.lat().0)).0;
    let mu = to_radians(Degrees((a.lat().0 + b.lat().0) / 2.0));

    let (m, n) = ellipsoid.radii_of_curvature(mu);
    let north = dy * m;
    let east = dx * n * libm::cos(mu.0);

    let azimuth = 90.0 - to_degrees(Radians(libm::atan2(north, east))).0;
    DistanceResult::new(libm::hypot(north, east), Degrees(azimuth))
}
