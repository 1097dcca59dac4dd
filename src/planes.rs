// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Contains the PlaneMapper struct, which describes a relationship
//! between a rectangle on the integral plane with an origin at 0,0,
//! and a rectangle on the complex plane with an arbitrary pair of
//! corners defining the leftlower and rightupper corners of the
//! complex plane.

use complex::Complex;
use errors::NewtonError;
use itertools::iproduct;

/// Describes the width and height of an integral plane that is assumed to start at
/// 0,0 and all values are assumed to be non-negative integers.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IntegralPlane(pub usize, pub usize);

/// Describes the lower-left corner and upper-right corner of the
/// Complex plane, treating the real part of each value as the
/// x-component and the imaginary part of each value as the
/// y-component.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ComplexPlane(pub Complex, pub Complex);

/// Describes the x, y of a pixel in the image.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Pixel(pub usize, pub usize);

/// Contains the definitions of two planes: an integral cartesian plane,
/// and a complex cartesian plane.  Maps pixels from one to points in
/// the other.
#[derive(Debug)]
pub struct PlaneMapper {
    /// The right-upper hand corner of the integral cartesian plane.
    /// The left-lower is assumed to be at 0,0
    pub integral_plane: IntegralPlane,
    /// The two coordinates defining the complex cartesian plane,
    /// left-lower and right-upper
    pub complex_plane: ComplexPlane,
    // Width and height of one pixel on the complex plane.
    steps: (f64, f64),
}

impl PlaneMapper {
    /// Constructor.  Takes the size of the integral plane, and two
    /// points describing the complex plane.  The x and y steps are
    /// independent, so the image need not share the plane's aspect
    /// ratio.
    pub fn new(
        width: usize,
        height: usize,
        leftlower: Complex,
        rightupper: Complex,
    ) -> Result<PlaneMapper, NewtonError> {
        if width == 0 || height == 0 {
            return Err(NewtonError::EmptyImage { width, height });
        }

        if !(leftlower.re < rightupper.re) {
            return Err(NewtonError::InvalidPlane {
                reason: format!(
                    "xmin {} is not to the left of xmax {}",
                    leftlower.re, rightupper.re
                ),
            });
        }

        if !(leftlower.im < rightupper.im) {
            return Err(NewtonError::InvalidPlane {
                reason: format!("ymin {} is not below ymax {}", leftlower.im, rightupper.im),
            });
        }

        let steps = (
            (rightupper.re - leftlower.re) / (width as f64),
            (rightupper.im - leftlower.im) / (height as f64),
        );

        Ok(PlaneMapper {
            integral_plane: IntegralPlane(width, height),
            complex_plane: ComplexPlane(leftlower, rightupper),
            steps,
        })
    }

    /// The total number of points in the integral grid.
    pub fn len(&self) -> usize {
        self.integral_plane.0 * self.integral_plane.1
    }

    /// Describes that the integral plane has no area.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Given a pixel on the integral cartesian plane, return the
    /// complex number at the same location on the complex plane.
    pub fn pixel_to_point(&self, pixel: &Pixel) -> Complex {
        Complex::new(
            self.complex_plane.0.re + (pixel.0 as f64) * self.steps.0,
            self.complex_plane.0.im + (pixel.1 as f64) * self.steps.1,
        )
    }

    /// Every pixel exactly once, a column at a time.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> {
        iproduct!(0..self.integral_plane.0, 0..self.integral_plane.1).map(|(x, y)| Pixel(x, y))
    }
}
