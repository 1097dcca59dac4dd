// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Polynomials over `Complex`, stored lowest power first: the
//! coefficient at index `i` multiplies `x^i`.

use complex::Complex;
use num::{One, Zero};
use std::fmt;

/// An ordered list of coefficients.  May be empty, in which case it
/// evaluates to zero everywhere.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polynomial {
    coefficients: Vec<Complex>,
}

impl Polynomial {
    /// Constructor.  Index zero is the constant term.
    pub fn new(coefficients: Vec<Complex>) -> Polynomial {
        Polynomial { coefficients }
    }

    /// The polynomial this renderer always draws: `x³ + 1`.
    pub fn newton_cubic() -> Polynomial {
        Polynomial::new(vec![
            Complex::one(),
            Complex::zero(),
            Complex::zero(),
            Complex::one(),
        ])
    }

    /// Appends a coefficient for the next higher power.
    pub fn push(&mut self, coefficient: Complex) {
        self.coefficients.push(coefficient);
    }

    /// The coefficients, constant term first.
    pub fn coefficients(&self) -> &[Complex] {
        &self.coefficients
    }

    /// Number of stored coefficients (degree + 1 for a non-empty list).
    pub fn len(&self) -> usize {
        self.coefficients.len()
    }

    /// True for the polynomial with no coefficients.
    pub fn is_empty(&self) -> bool {
        self.coefficients.is_empty()
    }

    /// Evaluates `Σ cᵢ·xⁱ` by building each power through repeated
    /// multiplication.
    pub fn evaluate(&self, x: Complex) -> Complex {
        let mut sum = Complex::zero();
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            let term = if power == 0 {
                *coefficient
            } else {
                let mut xn = x;
                for _ in 1..power {
                    xn = xn.multiply(x);
                }
                coefficient.multiply(xn)
            };
            sum = sum.add(term);
        }
        sum
    }

    /// Evaluates at a point on the real axis.
    pub fn evaluate_real(&self, x: f64) -> Complex {
        self.evaluate(Complex::real(x))
    }

    /// The symbolic derivative: coefficient `i` of the result is
    /// `(i + 1) · self[i + 1]`.  Constants and the empty polynomial
    /// derive to the empty polynomial.
    pub fn derive(&self) -> Polynomial {
        Polynomial::new(
            self.coefficients
                .iter()
                .enumerate()
                .skip(1)
                .map(|(power, c)| c.multiply(Complex::real(power as f64)))
                .collect(),
        )
    }
}

impl From<Vec<Complex>> for Polynomial {
    fn from(coefficients: Vec<Complex>) -> Polynomial {
        Polynomial::new(coefficients)
    }
}

/// Renders as `c0 + c1x + c2xx + ...`, one `x` per power.  Only used
/// for tracing.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (power, coefficient) in self.coefficients.iter().enumerate() {
            if power > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}{}", coefficient, "x".repeat(power))?;
        }
        Ok(())
    }
}
