// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A small, immutable complex number.  Every operation returns a new
//! value; nothing here ever mutates in place.
//!
//! Equality is exact: two numbers are equal only when both components
//! compare equal as `f64`.  Callers that want a fuzzy comparison use
//! `approx_eq`, which is deliberately a separate routine from the
//! squared-distance test the root registry performs.

use num::{One, Zero};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A point on the complex cartesian plane.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Complex {
    /// The real component, plotted along the x axis.
    pub re: f64,
    /// The imaginary component, plotted along the y axis.
    pub im: f64,
}

impl Complex {
    /// Constructor.
    pub fn new(re: f64, im: f64) -> Complex {
        Complex { re, im }
    }

    /// A complex number lying on the real axis.
    pub fn real(re: f64) -> Complex {
        Complex { re, im: 0.0 }
    }

    /// Component-wise sum.
    pub fn add(self, other: Complex) -> Complex {
        Complex::new(self.re + other.re, self.im + other.im)
    }

    /// Component-wise difference.
    pub fn subtract(self, other: Complex) -> Complex {
        Complex::new(self.re - other.re, self.im - other.im)
    }

    /// The usual `(a+bi)(c+di)` product.
    pub fn multiply(self, other: Complex) -> Complex {
        Complex::new(
            self.re * other.re - self.im * other.im,
            self.re * other.im + self.im * other.re,
        )
    }

    /// Multiplies by the conjugate of the divisor, then scales both
    /// components by the divisor's squared magnitude.  An exact zero
    /// divisor yields NaN or infinite components; this is not trapped.
    pub fn divide(self, other: Complex) -> Complex {
        let numerator = self.multiply(other.conjugate());
        let denominator = other.magnitude_squared();
        Complex::new(numerator.re / denominator, numerator.im / denominator)
    }

    /// Mirror across the real axis.
    pub fn conjugate(self) -> Complex {
        Complex::new(self.re, -self.im)
    }

    /// `re² + im²`, used wherever a comparison can skip the square root.
    #[inline]
    pub fn magnitude_squared(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// The absolute value (distance from the origin).
    pub fn abs(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    /// The plain arctangent of `im / re`, in radians.  Only the
    /// principal branch; undefined at the origin.
    pub fn angle(self) -> f64 {
        (self.im / self.re).atan()
    }

    /// Squared euclidean distance between two points.
    #[inline]
    pub fn distance_squared(self, other: Complex) -> f64 {
        (self.re - other.re) * (self.re - other.re) + (self.im - other.im) * (self.im - other.im)
    }

    /// Tolerant comparison: each component may differ by at most
    /// `epsilon`.
    pub fn approx_eq(self, other: Complex, epsilon: f64) -> bool {
        (self.re - other.re).abs() <= epsilon && (self.im - other.im).abs() <= epsilon
    }

    /// Replaces any component that is exactly zero with `offset`.
    /// Newton's method is never started from a point on either axis.
    pub fn avoid_zero(self, offset: f64) -> Complex {
        Complex::new(
            if self.re == 0.0 { offset } else { self.re },
            if self.im == 0.0 { offset } else { self.im },
        )
    }

    /// True when neither component is NaN or infinite.
    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} + {}i)", self.re, self.im)
    }
}

impl Add for Complex {
    type Output = Complex;
    fn add(self, other: Complex) -> Complex {
        Complex::add(self, other)
    }
}

impl Sub for Complex {
    type Output = Complex;
    fn sub(self, other: Complex) -> Complex {
        self.subtract(other)
    }
}

impl Mul for Complex {
    type Output = Complex;
    fn mul(self, other: Complex) -> Complex {
        self.multiply(other)
    }
}

impl Div for Complex {
    type Output = Complex;
    fn div(self, other: Complex) -> Complex {
        self.divide(other)
    }
}

impl Neg for Complex {
    type Output = Complex;
    fn neg(self) -> Complex {
        Complex::new(-self.re, -self.im)
    }
}

impl Zero for Complex {
    fn zero() -> Complex {
        Complex::new(0.0, 0.0)
    }

    fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }
}

impl One for Complex {
    fn one() -> Complex {
        Complex::new(1.0, 0.0)
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Complex {
        Complex::real(re)
    }
}

impl From<num::Complex<f64>> for Complex {
    fn from(c: num::Complex<f64>) -> Complex {
        Complex::new(c.re, c.im)
    }
}

impl From<Complex> for num::Complex<f64> {
    fn from(c: Complex) -> num::Complex<f64> {
        num::Complex::new(c.re, c.im)
    }
}
