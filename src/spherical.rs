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

//! The spherical module contains the spherical trigonometry method of
//! calculating the distance and azimuth between two positions.
//!
//! The distance is the great-circle distance given by the
//! [spherical law of cosines](https://en.wikipedia.org/wiki/Spherical_law_of_cosines)
//! on a sphere of radius [`R`](crate::ellipsoid::wgs84::R).  
//! The azimuth is the initial bearing of the great circle from true north.

#![allow(clippy::float_cmp)]
#![allow(clippy::suboptimal_flops)]

use crate::ellipsoid::wgs84;
use crate::{to_degrees, to_radians, Degrees, DistanceResult, GeoPoint, Radians};

/// Normalise an azimuth in degrees to the range [0°, 360°).
#[must_use]
fn normalise_azimuth(azimuth: f64) -> f64 {
    let azimuth = if azimuth < 0.0 {
        azimuth + 360.0
    } else {
        azimuth
    };
    // A tiny negative azimuth rounds to 360
    if azimuth < 360.0 {
        azimuth
    } else {
        0.0
    }
}

/// Calculate the great-circle distance and initial azimuth between a pair of
/// positions.
/// * `a`, `b` - the start and finish positions.
///
/// returns the distance in kilometres and the azimuth in the range [0°, 360°).  
/// Identical positions (`a == b`) return a distance and azimuth of zero.
/// The same position written differently, e.g. longitudes of -180° and 180°,
/// is not identical: its distance comes from the rounding of the acos
/// argument, so it is small but not necessarily zero.
///
/// # Examples
/// ```
/// use geodistance::{spherical, Degrees, GeoPoint};
///
/// let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
/// let b = GeoPoint::new(Degrees(0.0), Degrees(-1.0));
///
/// let result = spherical::calculate_distance_and_azimuth(&a, &b);
/// assert!((result.distance() - 111.319_490_793).abs() < 1e-9);
/// assert_eq!(270.0, result.azimuth().0);
/// ```
#[must_use]
pub fn calculate_distance_and_azimuth(a: &GeoPoint, b: &GeoPoint) -> DistanceResult {
    // acos of the rounded cosine of a zero angle is not zero
    if a == b {
        return DistanceResult::new(0.0, Degrees(0.0));
    }

    let lat1 = to_radians(a.lat()).0;
    let lat2 = to_radians(b.lat()).0;
    let delta_long = to_radians(Degrees(b.lon().0 - a.lon().0)).0;

    let sin_lat1 = libm::sin(lat1);
    let cos_lat1 = libm::cos(lat1);
    let sin_delta_long = libm::sin(delta_long);
    let cos_delta_long = libm::cos(delta_long);

    let cos_distance =
        sin_lat1 * libm::sin(lat2) + cos_lat1 * libm::cos(lat2) * cos_delta_long;
    let distance = wgs84::R * libm::acos(cos_distance.clamp(-1.0, 1.0));

    let azimuth = to_degrees(Radians(libm::atan2(
        sin_delta_long,
        cos_lat1 * libm::tan(lat2) - sin_lat1 * cos_delta_long,
    )));

    DistanceResult::new(distance, Degrees(normalise_azimuth(azimuth.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;
    use core::f64::consts::PI;

    /// Positions every 20° of latitude and 40° of longitude.
    fn grid() -> Vec<GeoPoint> {
        let mut points = Vec::new();
        for lat in (-80..=80).step_by(20) {
            for lon in (-170..=170).step_by(40) {
                points.push(GeoPoint::new(
                    Degrees(f64::from(lat) + 0.25),
                    Degrees(f64::from(lon) - 0.5),
                ));
            }
        }
        points
    }

    #[test]
    fn test_normalise_azimuth() {
        assert_eq!(0.0, normalise_azimuth(0.0));
        assert_eq!(359.0, normalise_azimuth(-1.0));
        assert_eq!(180.0, normalise_azimuth(180.0));
        assert_eq!(0.0, normalise_azimuth(-1e-20));
    }

    #[test]
    fn test_cardinal_directions() {
        let origin = GeoPoint::new(Degrees(0.0), Degrees(0.0));
        let one_degree = wgs84::R * PI / 180.0;

        let north = calculate_distance_and_azimuth(
            &origin,
            &GeoPoint::new(Degrees(1.0), Degrees(0.0)),
        );
        assert!(is_within_tolerance(one_degree, north.distance(), 1e-9));
        assert_eq!(0.0, north.azimuth().0);

        let east = calculate_distance_and_azimuth(
            &origin,
            &GeoPoint::new(Degrees(0.0), Degrees(1.0)),
        );
        assert!(is_within_tolerance(one_degree, east.distance(), 1e-9));
        assert_eq!(90.0, east.azimuth().0);

        let south = calculate_distance_and_azimuth(
            &origin,
            &GeoPoint::new(Degrees(-1.0), Degrees(0.0)),
        );
        assert!(is_within_tolerance(one_degree, south.distance(), 1e-9));
        assert_eq!(180.0, south.azimuth().0);

        let west = calculate_distance_and_azimuth(
            &origin,
            &GeoPoint::new(Degrees(0.0), Degrees(-1.0)),
        );
        assert!(is_within_tolerance(one_degree, west.distance(), 1e-9));
        assert_eq!(270.0, west.azimuth().0);
    }

    #[test]
    fn test_antipodal_positions() {
        let a = GeoPoint::new(Degrees(0.0), Degrees(0.0));
        let b = GeoPoint::new(Degrees(0.0), Degrees(180.0));
        let result = calculate_distance_and_azimuth(&a, &b);
        assert!(is_within_tolerance(wgs84::R * PI, result.distance(), 1e-9));
    }

    #[test]
    fn test_coincident_positions() {
        for point in grid() {
            let result = calculate_distance_and_azimuth(&point, &point);
            assert!(result.distance().abs() <= 1e-9);
            assert_eq!(0.0, result.azimuth().0);
        }
    }

    #[test]
    fn test_distance_is_symmetric() {
        let points = grid();
        for a in &points {
            for b in &points {
                let ab = calculate_distance_and_azimuth(a, b);
                let ba = calculate_distance_and_azimuth(b, a);
                assert!(is_within_tolerance(ab.distance(), ba.distance(), 1e-9));
            }
        }
    }

    #[test]
    fn test_azimuth_range() {
        let points = grid();
        for a in &points {
            for b in &points {
                let azimuth = calculate_distance_and_azimuth(a, b).azimuth().0;
                assert!((0.0..360.0).contains(&azimuth), "{a} {b} {azimuth}");
            }
        }
    }

    #[test]
    fn test_nearly_coincident_positions() {
        // The acos argument of some of these pairs rounds to above 1
        for i in 0..2000 {
            let lat = -89.0 + f64::from(i) * 178.0 / 1999.0;
            let a = GeoPoint::new(Degrees(lat), Degrees(10.0));
            let b = GeoPoint::new(Degrees(lat), Degrees(10.000_000_000_1));
            let result = calculate_distance_and_azimuth(&a, &b);
            assert!(!result.distance().is_nan(), "latitude: {lat}");
            assert!(result.distance() < 1e-3, "latitude: {lat}");
        }
    }

    #[test]
    fn test_same_position_different_longitude() {
        // Not identical values, so not the zero distance shortcut
        let a = GeoPoint::new(Degrees(0.0), Degrees(-180.0));
        let b = GeoPoint::new(Degrees(0.0), Degrees(180.0));
        let result = calculate_distance_and_azimuth(&a, &b);
        assert!(result.distance().is_finite());
        assert!(result.distance() < 1e-3);
    }
}
