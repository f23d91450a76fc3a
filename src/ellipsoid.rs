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

//! The ellipsoid module contains functions for calculating the parameters of
//! an ellipsoid given its Semimajor and Semiminor axes (the equatorial and
//! polar radii) and the radii of curvature at a given latitude.
//!
//! The radii of curvature are used by the Hubeny formula, see the
//! [hubeny](crate::hubeny) module.

#![allow(clippy::suboptimal_flops)]

pub mod wgs84;

use angle_sc::Radians;

/// Calculate the square of the Eccentricity of an ellipsoid.
/// * `a` - the Semimajor axis of an ellipsoid.
/// * `b` - the Semiminor axis of an ellipsoid.
/// # Examples
/// ```
/// use geodistance::ellipsoid::{calculate_sq_eccentricity, wgs84};
///
/// assert_eq!(0.006694380066764457, calculate_sq_eccentricity(wgs84::A, wgs84::B));
/// ```
#[must_use]
pub fn calculate_sq_eccentricity(a: f64, b: f64) -> f64 {
    let a_2 = a * a;
    (a_2 - b * b) / a_2
}

/// Calculate `W`, the common term of the radii of curvature.  
/// W = sqrt(1 - e²·sin²(lat))
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `lat` - the latitude.
#[must_use]
pub fn calculate_w(e_2: f64, lat: Radians) -> f64 {
    let sin_lat = libm::sin(lat.0);
    libm::sqrt(1.0 - e_2 * sin_lat * sin_lat)
}

/// Calculate `M`, the meridional radius of curvature.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `e_2` - the square of the Eccentricity of the ellipsoid.
/// * `w` - see [`calculate_w`].
#[must_use]
pub fn calculate_meridional_radius(a: f64, e_2: f64, w: f64) -> f64 {
    a * (1.0 - e_2) / (w * w * w)
}

/// Calculate `N`, the transverse (prime vertical) radius of curvature.
/// * `a` - the Semimajor axis of the ellipsoid.
/// * `w` - see [`calculate_w`].
#[must_use]
pub fn calculate_transverse_radius(a: f64, w: f64) -> f64 {
    a / w
}
