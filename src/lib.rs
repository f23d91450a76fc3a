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
//! A library for comparing two methods of calculating the distance and
//! azimuth between a pair of latitude/longitude positions:
//!
//! - [spherical trigonometry](https://en.wikipedia.org/wiki/Spherical_law_of_cosines),
//!   the great-circle distance and initial bearing on a sphere of radius
//!   [`R`](ellipsoid::wgs84::R);
//! - the [Hubeny formula](https://en.wikipedia.org/wiki/Geographical_distance),
//!   a local flat-earth approximation using the radii of curvature of the
//!   WGS 84 ellipsoid at the mean latitude of the positions.
//!
//! Spherical trigonometry is valid at any range. The Hubeny formula is only
//! accurate for short distances: tens to low hundreds of kilometres.
//!
//! ## Azimuth conventions
//!
//! The two methods do **not** use the same azimuth convention:
//!
//! - the spherical trigonometry azimuth is the initial bearing from north,
//!   normalised to the range [0°, 360°);
//! - the Hubeny azimuth is `90° - atan2(north, east)`. It is not normalised,
//!   e.g. a segment heading west-south-west gives a negative azimuth.
//!
//! The azimuths are compared directly by [`compare`], so differences between
//! the conventions show up in [`Comparison::azimuth_difference`].
//!
//! ## Design
//!
//! The library depends upon the following crates:
//!
//! - [angle-sc](https://crates.io/crates/angle-sc) - to define `Degrees` and
//!   `Radians`;
//! - [icao_units](https://crates.io/crates/icao-units) - to define `Metres` and
//!   `NauticalMiles` and perform conversions between them;
//! - [libm](https://crates.io/crates/libm) - for trigonometric functions.
//!
//! The library is declared [no_std](https://docs.rust-embedded.org/book/intro/no-std.html)
//! so it can be used in embedded applications.
//! The `geodistance` binary reads positions from a file and reports the
//! results of both methods for every consecutive pair of positions.

#![cfg_attr(not(test), no_std)]

extern crate angle_sc;
extern crate icao_units;

pub mod ellipsoid;
pub mod hubeny;
pub mod spherical;

pub use angle_sc::{Degrees, Radians, Validate};
pub use icao_units::non_si::NauticalMiles;
pub use icao_units::si::Metres;

use core::f64::consts::PI;
use once_cell::sync::Lazy;

/// Convert an angle in `Degrees` to `Radians`.
/// # Examples
/// ```
/// use geodistance::{to_radians, Degrees};
///
/// assert_eq!(core::f64::consts::PI, to_radians(Degrees(180.0)).0);
/// ```
#[must_use]
pub fn to_radians(angle: Degrees) -> Radians {
    Radians(angle.0 * PI / 180.0)
}

/// Convert an angle in `Radians` to `Degrees`.
/// # Examples
/// ```
/// use geodistance::{to_degrees, Radians};
///
/// assert_eq!(180.0, to_degrees(Radians(core::f64::consts::PI)).0);
/// ```
#[must_use]
pub fn to_degrees(angle: Radians) -> Degrees {
    Degrees(angle.0 * 180.0 / PI)
}

/// A position given by its latitude and longitude in decimal degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeoPoint {
    lat: Degrees,
    lon: Degrees,
}

impl Validate for GeoPoint {
    /// Test whether a `GeoPoint` is valid.
    /// Whether -90° <= `latitude` <= 90° and -180° <= `longitude` <= 180°.
    fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat.0) && (-180.0..=180.0).contains(&self.lon.0)
    }
}

impl GeoPoint {
    /// Constructor.
    /// * `lat` - the latitude.
    /// * `lon` - the longitude.
    ///
    /// Note: the values are not validated, see [`Validate::is_valid`].
    #[must_use]
    pub const fn new(lat: Degrees, lon: Degrees) -> Self {
        Self { lat, lon }
    }

    #[must_use]
    pub const fn lat(&self) -> Degrees {
        self.lat
    }

    #[must_use]
    pub const fn lon(&self) -> Degrees {
        self.lon
    }
}

impl core::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.lat.0, self.lon.0)
    }
}

/// The distance and azimuth from one position to another.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistanceResult {
    /// The distance in kilometres.
    distance: f64,
    /// The azimuth, see the crate documentation for the conventions.
    azimuth: Degrees,
}

impl DistanceResult {
    /// Constructor.
    /// * `distance` - the distance in kilometres.
    /// * `azimuth` - the azimuth.
    #[must_use]
    pub const fn new(distance: f64, azimuth: Degrees) -> Self {
        Self { distance, azimuth }
    }

    /// The distance in kilometres.
    #[must_use]
    pub const fn distance(&self) -> f64 {
        self.distance
    }

    #[must_use]
    pub const fn azimuth(&self) -> Degrees {
        self.azimuth
    }

    /// The distance in `Metres`.
    #[must_use]
    pub fn metres(&self) -> Metres {
        Metres(self.distance * 1000.0)
    }

    /// The distance in `NauticalMiles`.
    #[must_use]
    pub fn nautical_miles(&self) -> NauticalMiles {
        NauticalMiles::from(self.metres())
    }
}

/// The parameters of the `Ellipsoid` used by the Hubeny formula.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipsoid {
    /// The Semimajor axis of the ellipsoid in kilometres.
    a: f64,
    /// The Semiminor axis of the ellipsoid in kilometres.
    b: f64,
    /// The square of the Eccentricity of the ellipsoid.
    e_2: f64,
}

impl Ellipsoid {
    /// Constructor.
    /// * `a` - the Semimajor axis of the `Ellipsoid` in kilometres.
    /// * `b` - the Semiminor axis of the `Ellipsoid` in kilometres.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            a,
            b,
            e_2: ellipsoid::calculate_sq_eccentricity(a, b),
        }
    }

    /// Construct an `Ellipsoid` with the WGS-84 parameters.
    #[must_use]
    pub fn wgs84() -> Self {
        Self::new(ellipsoid::wgs84::A, ellipsoid::wgs84::B)
    }

    /// The Semimajor axis of the ellipsoid in kilometres.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The Semiminor axis of the ellipsoid in kilometres.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The square of the Eccentricity of the ellipsoid.
    #[must_use]
    pub const fn e_2(&self) -> f64 {
        self.e_2
    }

    /// Calculate the meridional and transverse radii of curvature at a latitude.
    /// * `lat` - the latitude.
    ///
    /// returns `M` and `N` in kilometres.
    #[must_use]
    pub fn radii_of_curvature(&self, lat: Radians) -> (f64, f64) {
        let w = ellipsoid::calculate_w(self.e_2, lat);
        (
            ellipsoid::calculate_meridional_radius(self.a, self.e_2, w),
            ellipsoid::calculate_transverse_radius(self.a, w),
        )
    }
}

/// A static instance of the WGS-84 `Ellipsoid`.
pub static WGS84_ELLIPSOID: Lazy<Ellipsoid> = Lazy::new(Ellipsoid::wgs84);

/// Calculate the great-circle distance and initial azimuth between a pair of
/// positions using spherical trigonometry.
/// * `a`, `b` - the start and finish positions.
///
/// returns the distance in kilometres and the azimuth in the range [0°, 360°).
///
/// # Examples
/// ```
/// use geodistance::{compute_spherical_trigonometry, Degrees, GeoPoint};
///
/// let tokyo = GeoPoint::new(Degrees(35.655), Degrees(139.74472));
/// let tsukuba = GeoPoint::new(Degrees(36.10056), Degrees(140.09111));
///
/// let result = compute_spherical_trigonometry(&tokyo, &tsukuba);
/// assert!((result.distance() - 58.62).abs() < 0.01);
/// assert!((result.azimuth().0 - 32.11).abs() < 0.01);
/// ```
#[must_use]
pub fn compute_spherical_trigonometry(a: &GeoPoint, b: &GeoPoint) -> DistanceResult {
    spherical::calculate_distance_and_azimuth(a, b)
}

/// Calculate the distance and azimuth between a pair of positions using the
/// Hubeny formula on the WGS-84 `Ellipsoid`.
/// * `a`, `b` - the start and finish positions.
///
/// returns the distance in kilometres and the (un-normalised) azimuth.
///
/// # Examples
/// ```
/// use geodistance::{compute_hubeny_formula, Degrees, GeoPoint};
///
/// let tokyo = GeoPoint::new(Degrees(35.655), Degrees(139.74472));
/// let tsukuba = GeoPoint::new(Degrees(36.10056), Degrees(140.09111));
///
/// let result = compute_hubeny_formula(&tokyo, &tsukuba);
/// assert!((result.distance() - 58.50).abs() < 0.01);
/// assert!((result.azimuth().0 - 32.32).abs() < 0.01);
/// ```
#[must_use]
pub fn compute_hubeny_formula(a: &GeoPoint, b: &GeoPoint) -> DistanceResult {
    hubeny::calculate_distance_and_azimuth(a, b, &WGS84_ELLIPSOID)
}

/// The results of both methods for a pair of positions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Comparison {
    spherical: DistanceResult,
    hubeny: DistanceResult,
}

impl Comparison {
    #[must_use]
    pub const fn new(spherical: DistanceResult, hubeny: DistanceResult) -> Self {
        Self { spherical, hubeny }
    }

    /// The spherical trigonometry result.
    #[must_use]
    pub const fn spherical(&self) -> DistanceResult {
        self.spherical
    }

    /// The Hubeny formula result.
    #[must_use]
    pub const fn hubeny(&self) -> DistanceResult {
        self.hubeny
    }

    /// The absolute difference between the distances in kilometres.
    #[must_use]
    pub fn distance_difference(&self) -> f64 {
        libm::fabs(self.spherical.distance - self.hubeny.distance)
    }

    /// The absolute difference between the azimuths.  
    /// Note: the azimuths are compared as they are, without reconciling
    /// their conventions.
    #[must_use]
    pub fn azimuth_difference(&self) -> Degrees {
        Degrees(libm::fabs(self.spherical.azimuth.0 - self.hubeny.azimuth.0))
    }
}

/// Calculate the distance and azimuth between a pair of positions using both
/// spherical trigonometry and the Hubeny formula.
/// * `a`, `b` - the start and finish positions.
#[must_use]
pub fn compare(a: &GeoPoint, b: &GeoPoint) -> Comparison {
    Comparison::new(
        compute_spherical_trigonometry(a, b),
        compute_hubeny_formula(a, b),
    )
}

/// A pair of consecutive positions and the `Comparison` between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub comparison: Comparison,
}

/// Compare every consecutive pair of positions in a sequence.
/// * `points` - the positions.
///
/// returns an iterator over `points.len() - 1` `Segment`s, or none if there
/// are fewer than two positions.
///
/// # Examples
/// ```
/// use geodistance::{compare_segments, Degrees, GeoPoint};
///
/// let points = [
///     GeoPoint::new(Degrees(35.655), Degrees(139.74472)),
///     GeoPoint::new(Degrees(36.10056), Degrees(140.09111)),
///     GeoPoint::new(Degrees(35.655), Degrees(139.74472)),
/// ];
/// assert_eq!(2, compare_segments(&points).count());
/// ```
pub fn compare_segments(points: &[GeoPoint]) -> impl Iterator<Item = Segment> + '_ {
    points.windows(2).map(|pair| Segment {
        start: pair[0],
        end: pair[1],
        comparison: compare(&pair[0], &pair[1]),
    })
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use angle_sc::is_within_tolerance;

    const TOKYO: GeoPoint = GeoPoint::new(Degrees(35.655), Degrees(139.74472));
    const TSUKUBA: GeoPoint = GeoPoint::new(Degrees(36.10056), Degrees(140.09111));
    const HONG_KONG: GeoPoint = GeoPoint::new(Degrees(22.386651), Degrees(114.169922));
    const JEDDAH: GeoPoint = GeoPoint::new(Degrees(21.4225), Degrees(39.8261));

    #[test]
    fn test_to_radians_and_to_degrees() {
        assert_eq!(0.0, to_radians(Degrees(0.0)).0);
        assert_eq!(PI / 2.0, to_radians(Degrees(90.0)).0);
        assert_eq!(-PI, to_radians(Degrees(-180.0)).0);
        assert_eq!(90.0, to_degrees(Radians(PI / 2.0)).0);

        for i in -720..=720 {
            let value = f64::from(i) * 0.5 + 0.123_456_789;
            let result = to_degrees(to_radians(Degrees(value))).0;
            assert!(is_within_tolerance(
                value,
                result,
                4.0 * f64::EPSILON * value.abs()
            ));
        }
    }

    #[test]
    fn test_geopoint_is_valid() {
        assert!(TOKYO.is_valid());
        assert!(GeoPoint::new(Degrees(90.0), Degrees(180.0)).is_valid());
        assert!(GeoPoint::new(Degrees(-90.0), Degrees(-180.0)).is_valid());
        assert!(!GeoPoint::new(Degrees(90.000_001), Degrees(0.0)).is_valid());
        assert!(!GeoPoint::new(Degrees(0.0), Degrees(-180.5)).is_valid());
        assert!(!GeoPoint::new(Degrees(f64::NAN), Degrees(0.0)).is_valid());
    }

    #[test]
    fn test_geopoint_traits() {
        let point = TOKYO;
        assert_eq!(Degrees(35.655), point.lat());
        assert_eq!(Degrees(139.74472), point.lon());
        assert_eq!("(35.655, 139.74472)", point.to_string());
        println!("GeoPoint: {:?}", point);
    }

    #[test]
    fn test_distance_result_units() {
        let result = DistanceResult::new(1.852, Degrees(45.0));
        assert_eq!(1.852, result.distance());
        assert_eq!(Degrees(45.0), result.azimuth());
        assert!(is_within_tolerance(1852.0, result.metres().0, 1e-9));
        assert!(is_within_tolerance(1.0, result.nautical_miles().0, 1e-12));
    }

    #[test]
    fn test_ellipsoid_wgs84() {
        let geoid = Ellipsoid::wgs84();
        assert_eq!(ellipsoid::wgs84::A, geoid.a());
        assert_eq!(ellipsoid::wgs84::B, geoid.b());
        assert_eq!(
            ellipsoid::calculate_sq_eccentricity(ellipsoid::wgs84::A, ellipsoid::wgs84::B),
            geoid.e_2()
        );
        assert_eq!(geoid, *WGS84_ELLIPSOID);

        let (m, n) = geoid.radii_of_curvature(Radians(0.0));
        assert!(is_within_tolerance(6335.439326804107, m, 1e-9));
        assert_eq!(ellipsoid::wgs84::A, n);
    }

    #[test]
    fn test_ellipsoid_traits() {
        let geoid = Ellipsoid::wgs84();

        let geoid_clone = geoid.clone();
        assert!(geoid_clone == geoid);

        println!("Ellipsoid: {:?}", geoid);
    }

    #[test]
    fn test_compute_tokyo_tsukuba() {
        let spherical = compute_spherical_trigonometry(&TOKYO, &TSUKUBA);
        let hubeny = compute_hubeny_formula(&TOKYO, &TSUKUBA);

        assert!(is_within_tolerance(58.61980584901641, spherical.distance(), 1e-9));
        assert!(is_within_tolerance(32.10646331144682, spherical.azimuth().0, 1e-9));
        assert!(is_within_tolerance(58.50245893047077, hubeny.distance(), 1e-9));
        assert!(is_within_tolerance(32.32200940704332, hubeny.azimuth().0, 1e-9));

        // At this range the methods agree within 1% distance and 5° azimuth
        assert!(is_within_tolerance(
            spherical.distance(),
            hubeny.distance(),
            0.01 * spherical.distance()
        ));
        assert!(is_within_tolerance(
            spherical.azimuth().0,
            hubeny.azimuth().0,
            5.0
        ));
    }

    #[test]
    fn test_compute_hong_kong_jeddah() {
        let spherical = compute_spherical_trigonometry(&HONG_KONG, &JEDDAH);
        assert!(is_within_tolerance(7591.830437282532, spherical.distance(), 1e-6));
        assert!(is_within_tolerance(285.11055691842665, spherical.azimuth().0, 1e-9));

        // The Hubeny formula still returns a finite value at this range
        let hubeny = compute_hubeny_formula(&HONG_KONG, &JEDDAH);
        assert!(hubeny.distance().is_finite());
        assert!(1000.0 < hubeny.distance());
    }

    #[test]
    fn test_compare() {
        let comparison = compare(&TOKYO, &TSUKUBA);
        assert_eq!(
            compute_spherical_trigonometry(&TOKYO, &TSUKUBA),
            comparison.spherical()
        );
        assert_eq!(compute_hubeny_formula(&TOKYO, &TSUKUBA), comparison.hubeny());
        assert!(is_within_tolerance(
            58.61980584901641 - 58.50245893047077,
            comparison.distance_difference(),
            1e-9
        ));
        assert!(is_within_tolerance(
            32.32200940704332 - 32.10646331144682,
            comparison.azimuth_difference().0,
            1e-9
        ));

        // The azimuths are compared without reconciling their conventions
        let comparison = compare(&HONG_KONG, &JEDDAH);
        assert!(is_within_tolerance(
            285.11055691842665 - comparison.hubeny().azimuth().0,
            comparison.azimuth_difference().0,
            1e-9
        ));
    }

    #[test]
    fn test_compare_segments() {
        assert_eq!(0, compare_segments(&[]).count());
        assert_eq!(0, compare_segments(&[TOKYO]).count());

        let points = [TOKYO, TSUKUBA, HONG_KONG, JEDDAH];
        let segments: Vec<Segment> = compare_segments(&points).collect();
        assert_eq!(3, segments.len());

        assert_eq!(TOKYO, segments[0].start);
        assert_eq!(TSUKUBA, segments[0].end);
        assert_eq!(compare(&TOKYO, &TSUKUBA), segments[0].comparison);

        assert_eq!(TSUKUBA, segments[1].start);
        assert_eq!(HONG_KONG, segments[1].end);

        assert_eq!(HONG_KONG, segments[2].start);
        assert_eq!(JEDDAH, segments[2].end);
        assert_eq!(compare(&HONG_KONG, &JEDDAH), segments[2].comparison);
    }
}
